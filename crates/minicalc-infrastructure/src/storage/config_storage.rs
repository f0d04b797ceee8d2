//! `config.toml` storage.

use std::fs::{self, File};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use minicalc_core::config::AppConfig;
use minicalc_core::error::Result;

/// Reads and writes [`AppConfig`] as TOML.
///
/// Responsibilities:
/// - Load config.toml, falling back to defaults when it is missing or empty
/// - Write config.toml atomically (tmp file + rename)
///
/// Does NOT:
/// - Hold secrets (see `SecretStorage`)
pub struct ConfigStorage {
    path: PathBuf,
}

impl ConfigStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the configuration.
    ///
    /// # Returns
    ///
    /// - `Ok(AppConfig)`: Parsed file, or defaults if the file is absent/empty
    /// - `Err(CalcError::Serialization)`: The file exists but is not valid TOML
    pub fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(AppConfig::default());
        }

        Ok(toml::from_str(&content)?)
    }

    /// Saves the configuration atomically.
    pub fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let toml_string = toml::to_string_pretty(config)?;

        let tmp_path = self.path.with_extension("toml.tmp");
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(toml_string.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let storage = ConfigStorage::new(temp_dir.path().join("config.toml"));
        assert_eq!(storage.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let storage = ConfigStorage::new(temp_dir.path().join("config.toml"));

        let mut config = AppConfig::default();
        config.gateway.timeout_secs = 7;
        config.logging.log_to_file = true;
        storage.save(&config).unwrap();

        assert_eq!(storage.load().unwrap(), config);
        assert!(!temp_dir.path().join("config.toml.tmp").exists());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[gateway\ntimeout_secs = ").unwrap();

        let err = ConfigStorage::new(path).load().unwrap_err();
        assert!(err.is_serialization());
    }
}
