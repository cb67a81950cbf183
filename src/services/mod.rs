//! Services module - I/O-capable collaborators of the generation pipeline.
//!
//! The services wrap everything that touches the outside world so the rest
//! of the crate (builders, layout, pipeline policy) stays pure and testable.
//!
//! # Components
//!
//! - [`TexconvService`]: Executes the external texconv tool as a subprocess
//!   (fixed flags: format, single mip level, overwrite, explicit output
//!   directory) with a bounded timeout, then probes for the output file
//!   case-insensitively. Implements the [`TextureConverter`] trait, which is
//!   the seam tests use to inject failing converters.
//!
//! - [`ImageService`]: Raster resize and encode via the `image` crate.
//!   Stretch-resize only; PNG by default, JPEG when asked for by extension.
//!
//! - [`ScsArchiver`]: Packs the finished package directory into a
//!   zip-compatible .scs archive with the package contents at entry root.
//!
//! # Design Philosophy
//!
//! - **Stateless**: services hold configuration only; every operation takes
//!   explicit parameters
//! - **Explicit results**: errors are typed (`thiserror`) or contextual
//!   (`anyhow`); nothing signals failure by panicking
//! - **Async only where waiting happens**: subprocess execution is async
//!   (tokio), local file I/O is not

pub mod archive;
pub mod image;
pub mod texconv;

pub use archive::{ArchiveError, ScsArchiver};
pub use image::ImageService;
pub use texconv::{DEFAULT_CONVERSION_TIMEOUT, TexconvError, TexconvService, TextureConverter};
