use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Target resolution for a resize step, width x height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Fixed resolution of the mod icon shown in the game's mod manager.
pub const MOD_ICON_RESOLUTION: Resolution = Resolution::new(276, 162);

/// Validation errors for [`ProjectSettings`].
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Output directory is not set")]
    OutputDirectoryNotSet,

    #[error("Texconv path is not set")]
    TexconvPathNotSet,

    #[error("Mod name is not set")]
    ModNameNotSet,

    #[error("Paint job prefix is not set")]
    PaintJobPrefixNotSet,

    #[error("Invalid {context} resolution: {width}x{height}")]
    InvalidResolution {
        context: &'static str,
        width: u32,
        height: u32,
    },
}

/// Run configuration for a single mod generation pass.
///
/// Loaded once from the settings YAML (or assembled by a caller) and held
/// immutable for the duration of the run; the pipeline only ever borrows it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSettings {
    /// Directory under which the package folder and temp folder are created.
    #[serde(default)]
    pub output_directory: Utf8PathBuf,

    /// Full path to the texconv executable.
    #[serde(default)]
    pub texconv_path: Utf8PathBuf,

    /// Folder scanned for source images when none are given on the command line.
    #[serde(default)]
    pub input_folder: Utf8PathBuf,

    #[serde(default = "default_mod_name")]
    pub mod_name: String,

    #[serde(default = "default_mod_version")]
    pub mod_version: String,

    #[serde(default)]
    pub mod_author: String,

    #[serde(default)]
    pub mod_description: String,

    /// Prefix for generated paint IDs, e.g. "skin" -> "skin0042".
    #[serde(default = "default_paint_job_prefix")]
    pub paint_job_prefix: String,

    /// Pack the finished package folder into a .scs archive.
    #[serde(default = "default_true")]
    pub pack_to_scs_archive: bool,

    /// DDS compression format passed to texconv, e.g. "DXT5" or "BC7_UNORM".
    #[serde(default = "default_dds_format")]
    pub dds_format: String,

    #[serde(default = "default_main_resolution")]
    pub main_image_resolution: Resolution,

    #[serde(default = "default_ui_resolution")]
    pub ui_accessory_resolution: Resolution,

    /// In-game purchase price of each paint job.
    #[serde(default)]
    pub price: u32,

    /// Player level at which the paint job unlocks.
    #[serde(default)]
    pub unlock_level: u32,

    /// Internal names of the trucks to generate paint jobs for.
    #[serde(default)]
    pub selected_trucks: Vec<String>,

    /// Internal names of the owned trailers to generate paint jobs for.
    #[serde(default)]
    pub selected_trailers: Vec<String>,

    /// File name of the mod icon at the package root, e.g. "mod_icon.png".
    #[serde(default = "default_mod_icon_file_name")]
    pub mod_icon_file_name: String,
}

fn default_mod_name() -> String {
    "My Skin Pack".to_string()
}

fn default_mod_version() -> String {
    "1.0.0".to_string()
}

fn default_paint_job_prefix() -> String {
    "skin".to_string()
}

fn default_dds_format() -> String {
    "DXT5".to_string()
}

fn default_mod_icon_file_name() -> String {
    "mod_icon.png".to_string()
}

fn default_main_resolution() -> Resolution {
    Resolution::new(4096, 4096)
}

fn default_ui_resolution() -> Resolution {
    Resolution::new(256, 64)
}

fn default_true() -> bool {
    true
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            output_directory: Utf8PathBuf::new(),
            texconv_path: Utf8PathBuf::new(),
            input_folder: Utf8PathBuf::from("skin_sources"),
            mod_name: default_mod_name(),
            mod_version: default_mod_version(),
            mod_author: String::new(),
            mod_description: String::new(),
            paint_job_prefix: default_paint_job_prefix(),
            pack_to_scs_archive: true,
            dds_format: default_dds_format(),
            main_image_resolution: default_main_resolution(),
            ui_accessory_resolution: default_ui_resolution(),
            price: 0,
            unlock_level: 0,
            selected_trucks: Vec::new(),
            selected_trailers: Vec::new(),
            mod_icon_file_name: default_mod_icon_file_name(),
        }
    }
}

impl ProjectSettings {
    /// Check field-level invariants that do not require filesystem access.
    ///
    /// Existence of the output directory and the texconv executable is
    /// checked by the pipeline's validation stage, which owns the fatal
    /// error policy.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.output_directory.as_str().trim().is_empty() {
            return Err(SettingsError::OutputDirectoryNotSet);
        }
        if self.texconv_path.as_str().trim().is_empty() {
            return Err(SettingsError::TexconvPathNotSet);
        }
        if self.mod_name.trim().is_empty() {
            return Err(SettingsError::ModNameNotSet);
        }
        if self.paint_job_prefix.trim().is_empty() {
            return Err(SettingsError::PaintJobPrefixNotSet);
        }
        if !self.main_image_resolution.is_valid() {
            return Err(SettingsError::InvalidResolution {
                context: "main image",
                width: self.main_image_resolution.width,
                height: self.main_image_resolution.height,
            });
        }
        if !self.ui_accessory_resolution.is_valid() {
            return Err(SettingsError::InvalidResolution {
                context: "UI accessory",
                width: self.ui_accessory_resolution.width,
                height: self.ui_accessory_resolution.height,
            });
        }
        Ok(())
    }

    /// Folder name of the package, derived from the mod name.
    ///
    /// Lowercased with whitespace collapsed to underscores so the folder
    /// (and the .scs file named after it) is filesystem-friendly.
    pub fn package_folder_name(&self) -> String {
        self.mod_name
            .trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
    }

    /// Directory whose contents become the installable mod's file tree.
    pub fn package_root(&self) -> Utf8PathBuf {
        self.output_directory.join(self.package_folder_name())
    }

    /// Scratch directory for resized master images. A sibling of the
    /// package root so temp files never end up inside the archive.
    pub fn temp_dir(&self) -> Utf8PathBuf {
        self.output_directory.join("temp_resized")
    }

    pub fn ui_accessory_dir(&self) -> Utf8PathBuf {
        self.package_root().join("material/ui/accessory")
    }

    pub fn mod_icon_path(&self) -> Utf8PathBuf {
        self.package_root().join(&self.mod_icon_file_name)
    }

    /// All directories created up front by the pipeline's prepare stage.
    pub fn output_directories(&self) -> Vec<Utf8PathBuf> {
        let root = self.package_root();
        vec![
            root.clone(),
            self.temp_dir(),
            self.ui_accessory_dir(),
            root.join("vehicle/truck/upgrade/paintjob"),
            root.join("vehicle/trailer_owned/upgrade/paintjob"),
            root.join("def/vehicle/truck"),
            root.join("def/vehicle/trailer_owned"),
        ]
    }

    /// True when `path` names an image format usable as a skin source.
    pub fn is_supported_source_image(path: &Utf8Path) -> bool {
        matches!(
            path.extension().map(|e| e.to_ascii_lowercase()).as_deref(),
            Some("png" | "jpg" | "jpeg")
        )
    }
}
