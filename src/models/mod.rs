//! Data models for the skinpacker application.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`ProjectSettings`]: Run configuration loaded from the settings YAML,
//!   including output locations, mod metadata, resolutions, and vehicle
//!   selections. Immutable for the duration of a run.
//! - [`Resolution`]: A width x height pair for resize targets.
//! - [`VehicleDefinition`] / [`VehicleType`]: Static vehicle catalog entries.
//!
//! # Architecture Note
//!
//! The models are designed to be:
//! - **Serializable**: `ProjectSettings` derives `Serialize`/`Deserialize`
//!   for YAML persistence with per-field defaults
//! - **Borrowed, not shared**: the pipeline takes `&ProjectSettings` and
//!   never mutates it; there is no global settings state

pub mod settings;
pub mod vehicle;

pub use settings::{MOD_ICON_RESOLUTION, ProjectSettings, Resolution, SettingsError};
pub use vehicle::{VehicleDefinition, VehicleType};
