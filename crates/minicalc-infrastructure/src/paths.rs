//! Unified path management for minicalc files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/minicalc/          # Config directory
//! ├── config.toml              # Application configuration
//! ├── secret.json              # Gemini API key
//! └── logs/                    # Application logs
//!     └── minicalc.log.YYYY-MM-DD
//!
//! ~/.local/share/minicalc/     # Data directory
//! └── storage.json             # Key-value store (history, signed-in user)
//! ```
//!
//! A root override collapses both directories into one, which is what tests
//! and `--data-dir` use.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "minicalc";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home/config directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for minicalc_core::CalcError {
    fn from(e: PathError) -> Self {
        minicalc_core::CalcError::config(e.to_string())
    }
}

/// Resolves where minicalc keeps its files.
#[derive(Debug, Clone, Default)]
pub struct MinicalcPaths {
    root: Option<PathBuf>,
}

impl MinicalcPaths {
    /// Platform default locations (XDG on Linux, the usual places elsewhere).
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Places every file under `root`.
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        Self {
            root: Some(root.as_ref().to_path_buf()),
        }
    }

    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => dirs::data_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Path to secret.json. Keep it at 600 permissions.
    pub fn secret_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("secret.json"))
    }

    pub fn storage_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join("storage.json"))
    }

    pub fn logs_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("logs"))
    }
}
