use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::process::Command;
use tokio::time::timeout;

/// Default bound on a single texconv invocation. A hung tool fails the
/// conversion instead of stalling the run forever.
pub const DEFAULT_CONVERSION_TIMEOUT: Duration = Duration::from_secs(300);

/// Errors from external DDS conversion.
#[derive(Error, Debug)]
pub enum TexconvError {
    #[error("Texconv executable not found at {0}")]
    ToolNotFound(Utf8PathBuf),

    #[error("Input image not found: {0}")]
    InputNotFound(Utf8PathBuf),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Process error: {0}")]
    Process(#[from] std::io::Error),

    #[error("Texconv exited with code {code}: {detail}")]
    ExitFailure { code: i32, detail: String },

    #[error("Texconv reported success but no output was found for {input} in {output_dir}")]
    OutputMissing {
        input: Utf8PathBuf,
        output_dir: Utf8PathBuf,
    },
}

/// The conversion seam of the pipeline.
///
/// The pipeline only needs "turn this image into a DDS in that directory";
/// abstracting the subprocess behind this trait lets tests drive the
/// per-vehicle failure policy without a real texconv binary.
pub trait TextureConverter {
    /// Check the converter is usable before a run starts.
    fn validate(&self) -> Result<(), TexconvError>;

    /// Convert `input` to a DDS file inside `output_dir`.
    ///
    /// The output file is named after the input's stem. When
    /// `ensure_lowercase_extension` is set, a `.DDS` output (produced by
    /// some tool versions) is renamed to `.dds`.
    fn convert_to_dds(
        &self,
        input: &Utf8Path,
        output_dir: &Utf8Path,
        ensure_lowercase_extension: bool,
    ) -> impl Future<Output = Result<Utf8PathBuf, TexconvError>> + Send;
}

/// Service wrapping the external texconv tool.
///
/// Each conversion spawns one subprocess with fixed flags: the configured
/// compression format, a single mip level, overwrite without prompting, and
/// an explicit output directory. Invocations are strictly sequential; the
/// completion of each process is awaited before the next step begins.
#[derive(Debug, Clone)]
pub struct TexconvService {
    texconv_path: Utf8PathBuf,
    dds_format: String,
    conversion_timeout: Duration,
}

impl TexconvService {
    pub fn new(texconv_path: impl Into<Utf8PathBuf>, dds_format: impl Into<String>) -> Self {
        Self {
            texconv_path: texconv_path.into(),
            dds_format: dds_format.into(),
            conversion_timeout: DEFAULT_CONVERSION_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, conversion_timeout: Duration) -> Self {
        self.conversion_timeout = conversion_timeout;
        self
    }

    /// Locate the DDS texconv actually produced for `input`.
    ///
    /// Some tool/platform combinations emit an uppercase `.DDS` extension,
    /// so both spellings are probed.
    fn find_output(&self, input: &Utf8Path, output_dir: &Utf8Path) -> Option<Utf8PathBuf> {
        let stem = input.file_stem()?;
        let upper = output_dir.join(format!("{stem}.DDS"));
        let lower = output_dir.join(format!("{stem}.dds"));
        if upper.exists() {
            Some(upper)
        } else if lower.exists() {
            Some(lower)
        } else {
            None
        }
    }
}

impl TextureConverter for TexconvService {
    fn validate(&self) -> Result<(), TexconvError> {
        if !self.texconv_path.exists() {
            return Err(TexconvError::ToolNotFound(self.texconv_path.clone()));
        }
        Ok(())
    }

    async fn convert_to_dds(
        &self,
        input: &Utf8Path,
        output_dir: &Utf8Path,
        ensure_lowercase_extension: bool,
    ) -> Result<Utf8PathBuf, TexconvError> {
        if !input.exists() {
            return Err(TexconvError::InputNotFound(input.to_path_buf()));
        }
        fs::create_dir_all(output_dir)?;

        let start = Instant::now();
        tracing::info!("Converting '{}' to {} in '{}'", input, self.dds_format, output_dir);

        let child = Command::new(&self.texconv_path)
            .arg("-f")
            .arg(&self.dds_format)
            .args(["-m", "1", "-y", "-o"])
            .arg(output_dir.as_str())
            .arg(input.as_str())
            .kill_on_drop(true)
            .output();

        let output = timeout(self.conversion_timeout, child).await.map_err(|_| {
            tracing::warn!("texconv timed out after {:?}", self.conversion_timeout);
            TexconvError::Timeout(self.conversion_timeout)
        })??;

        let exit_code = output.status.code().unwrap_or(-1);
        tracing::debug!(
            "texconv finished in {:.2}s with exit code {}",
            start.elapsed().as_secs_f32(),
            exit_code
        );

        if !output.status.success() {
            let mut detail = String::from_utf8_lossy(&output.stderr).trim().to_string();
            if detail.is_empty() {
                detail = String::from_utf8_lossy(&output.stdout).trim().to_string();
            }
            return Err(TexconvError::ExitFailure { code: exit_code, detail });
        }

        let found = self
            .find_output(input, output_dir)
            .ok_or_else(|| TexconvError::OutputMissing {
                input: input.to_path_buf(),
                output_dir: output_dir.to_path_buf(),
            })?;

        if ensure_lowercase_extension && found.extension() == Some("DDS") {
            let stem = found.file_stem().unwrap_or_default();
            let lowered = output_dir.join(format!("{stem}.dds"));
            match fs::rename(&found, &lowered) {
                Ok(()) => return Ok(lowered),
                Err(e) => {
                    // The DDS is still usable under its original name.
                    tracing::warn!("Could not lowercase '{}': {}", found, e);
                    return Ok(found);
                }
            }
        }

        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap()
    }

    #[test]
    fn test_validate_missing_tool() {
        let service = TexconvService::new("/nonexistent/texconv.exe", "DXT5");
        assert!(matches!(service.validate(), Err(TexconvError::ToolNotFound(_))));
    }

    #[tokio::test]
    async fn test_convert_missing_input() {
        let dir = TempDir::new().unwrap();
        let service = TexconvService::new("/nonexistent/texconv.exe", "DXT5");
        let result = service
            .convert_to_dds(Utf8Path::new("/nope/image.png"), &utf8(&dir), false)
            .await;
        assert!(matches!(result, Err(TexconvError::InputNotFound(_))));
    }

    #[test]
    fn test_find_output_prefers_uppercase_probe() {
        let dir = TempDir::new().unwrap();
        let base = utf8(&dir);
        fs::write(base.join("img.DDS"), b"x").unwrap();
        let service = TexconvService::new("texconv.exe", "DXT5");
        let found = service.find_output(Utf8Path::new("in/img.png"), &base).unwrap();
        assert_eq!(found.file_name(), Some("img.DDS"));
    }

    #[test]
    fn test_find_output_lowercase_fallback() {
        let dir = TempDir::new().unwrap();
        let base = utf8(&dir);
        fs::write(base.join("img.dds"), b"x").unwrap();
        let service = TexconvService::new("texconv.exe", "DXT5");
        let found = service.find_output(Utf8Path::new("in/img.png"), &base).unwrap();
        assert_eq!(found.file_name(), Some("img.dds"));
    }
}
