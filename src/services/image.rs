use crate::models::Resolution;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use std::fs;
use std::io::BufWriter;

/// JPEG quality used when a resize target has a .jpg/.jpeg name.
const JPEG_QUALITY: u8 = 90;

/// Raster resize/encode service.
///
/// One resize policy only: stretch to the exact target resolution. The
/// output format follows the requested file name's extension; anything
/// that is not JPEG is written as PNG.
#[derive(Debug, Clone, Default)]
pub struct ImageService;

impl ImageService {
    pub fn new() -> Self {
        Self
    }

    /// Resize `source` and save it as `file_name` inside `output_dir`,
    /// creating the directory if needed. Returns the written path.
    pub fn resize_image(
        &self,
        source: &Utf8Path,
        output_dir: &Utf8Path,
        file_name: &str,
        resolution: Resolution,
    ) -> Result<Utf8PathBuf> {
        anyhow::ensure!(
            resolution.is_valid(),
            "Invalid target resolution {}x{}",
            resolution.width,
            resolution.height
        );

        fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create output directory: {output_dir}"))?;

        let img = image::open(source.as_std_path())
            .with_context(|| format!("Failed to open source image: {source}"))?;
        let resized = img.resize_exact(resolution.width, resolution.height, FilterType::Lanczos3);

        let output_path = output_dir.join(file_name);
        let extension = output_path
            .extension()
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        if extension == "jpg" || extension == "jpeg" {
            let file = fs::File::create(&output_path)
                .with_context(|| format!("Failed to create: {output_path}"))?;
            let mut writer = BufWriter::new(file);
            let encoder = JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY);
            // JPEG has no alpha channel.
            resized
                .to_rgb8()
                .write_with_encoder(encoder)
                .with_context(|| format!("Failed to encode JPEG: {output_path}"))?;
        } else {
            resized
                .save_with_format(output_path.as_std_path(), image::ImageFormat::Png)
                .with_context(|| format!("Failed to encode PNG: {output_path}"))?;
        }

        tracing::debug!(
            "Resized '{}' to {}x{} as '{}'",
            source,
            resolution.width,
            resolution.height,
            output_path
        );
        Ok(output_path)
    }
}
