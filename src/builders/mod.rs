//! Descriptor builders - pure text generation for the game's config formats.
//!
//! Each builder is a pure `build_*` function rendering a context tuple into
//! one of the game's descriptor languages, plus an I/O-capable save helper.
//! The builders never fail: a blank required input yields an empty string,
//! and callers must treat blank output as a generation failure before
//! writing anything.
//!
//! # Components
//!
//! - [`tobj`]: texture-reference descriptors binding a logical texture name
//!   to a DDS path
//! - [`mat`]: UI material descriptors for accessory icon rendering
//! - [`sui`]: `accessory_paint_job_data` blocks (price, display name,
//!   texture slot bindings) and the empty metallic/mask override stubs
//! - [`sii`]: `accessory_addon_data` blocks (look, models, conflicts)
//! - [`metadata`]: package manifest and the free-text mod description
//!
//! # Encodings
//!
//! Every descriptor is UTF-8 without a byte-order mark; only the free-text
//! description uses a BOM, for compatibility with external editors.

use anyhow::{Context, Result, bail};
use camino::Utf8Path;
use std::fs;

pub mod mat;
pub mod metadata;
pub mod sii;
pub mod sui;
pub mod tobj;

pub use mat::build_ui_mat_content;
pub use metadata::{build_manifest_content, build_mod_description_content};
pub use sii::build_addon_data_content;
pub use sui::build_paint_job_data_content;
pub use tobj::build_tobj_content;

/// UTF-8 byte-order mark.
const BOM: &[u8] = b"\xEF\xBB\xBF";

fn ensure_parent_dir(path: &Utf8Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {parent}"))?;
    }
    Ok(())
}

/// Write a descriptor as UTF-8 without BOM, creating parent directories.
///
/// Refuses blank content: an empty builder result means generation failed
/// and must never be flushed to disk.
pub fn save_descriptor(path: &Utf8Path, content: &str) -> Result<()> {
    if content.trim().is_empty() {
        bail!("Refusing to write empty descriptor: {path}");
    }
    ensure_parent_dir(path)?;
    fs::write(path, content).with_context(|| format!("Failed to write descriptor: {path}"))
}

/// Write free text as UTF-8 with BOM, creating parent directories.
/// Empty content is allowed here; a mod description may be blank.
pub fn save_text_with_bom(path: &Utf8Path, content: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut bytes = Vec::with_capacity(BOM.len() + content.len());
    bytes.extend_from_slice(BOM);
    bytes.extend_from_slice(content.as_bytes());
    fs::write(path, bytes).with_context(|| format!("Failed to write text file: {path}"))
}

/// Create an empty override stub (`*_metallic.sui`, `*_mask.sui`).
pub fn save_empty_stub(path: &Utf8Path) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, b"").with_context(|| format!("Failed to write stub file: {path}"))
}
