use crate::models::ProjectSettings;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Loads and saves the project settings YAML file.
///
/// A single file (`skinpacker.yaml` by default) holds the whole run
/// configuration. Missing file means defaults, so a fresh checkout runs
/// without any setup beyond pointing at texconv and an output directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    settings_path: Utf8PathBuf,
}

impl ConfigManager {
    pub fn new(settings_path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            settings_path: settings_path.into(),
        }
    }

    /// Load the settings file, falling back to defaults when it is absent.
    pub fn load(&self) -> Result<ProjectSettings> {
        if !self.settings_path.exists() {
            tracing::warn!(
                "Settings file not found at {}, using defaults",
                self.settings_path
            );
            return Ok(ProjectSettings::default());
        }

        let contents = fs::read_to_string(&self.settings_path)
            .with_context(|| format!("Failed to read settings: {}", self.settings_path))?;
        let settings: ProjectSettings = serde_yaml_ng::from_str(&contents)
            .with_context(|| format!("Failed to parse settings: {}", self.settings_path))?;

        tracing::info!("Loaded settings from {}", self.settings_path);
        Ok(settings)
    }

    /// Save the settings file, creating parent directories as needed.
    pub fn save(&self, settings: &ProjectSettings) -> Result<()> {
        let yaml =
            serde_yaml_ng::to_string(settings).context("Failed to serialize settings to YAML")?;

        if let Some(parent) = self.settings_path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create settings directory: {parent}"))?;
        }
        fs::write(&self.settings_path, yaml)
            .with_context(|| format!("Failed to write settings: {}", self.settings_path))?;

        tracing::info!("Saved settings to {}", self.settings_path);
        Ok(())
    }

    pub fn settings_path(&self) -> &Utf8Path {
        &self.settings_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager_in(dir: &TempDir) -> ConfigManager {
        let path = Utf8PathBuf::try_from(dir.path().join("skinpacker.yaml")).unwrap();
        ConfigManager::new(path)
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = manager_in(&dir).load().unwrap();
        assert_eq!(settings.paint_job_prefix, "skin");
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = TempDir::new().unwrap();
        let manager = manager_in(&dir);

        let settings = ProjectSettings {
            mod_name: "Round Trip".to_string(),
            selected_trucks: vec!["volvo.fh16".to_string()],
            price: 750,
            ..Default::default()
        };
        manager.save(&settings).unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.mod_name, "Round Trip");
        assert_eq!(loaded.selected_trucks, vec!["volvo.fh16".to_string()]);
        assert_eq!(loaded.price, 750);
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let manager = manager_in(&dir);
        fs::write(manager.settings_path(), "mod_name: [unterminated").unwrap();
        assert!(manager.load().is_err());
    }
}
