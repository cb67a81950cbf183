// skinpacker - Skin pack mod generator for ETS2/ATS
//
// This is the library crate containing the generation pipeline and data
// structures. The binary crate (main.rs) provides the CLI entry point.

pub mod builders;
pub mod catalog;
pub mod config;
pub mod ids;
pub mod layout;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod services;

// Re-export commonly used types for convenience
pub use catalog::VehicleCatalog;
pub use config::ConfigManager;
pub use models::{ProjectSettings, Resolution, VehicleDefinition, VehicleType};
pub use pipeline::{ModGenerator, RunReport};
pub use services::{ImageService, ScsArchiver, TexconvService, TextureConverter};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
