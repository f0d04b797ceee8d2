//! `secret.json` on disk.
//!
//! The file holds the Gemini credential in plaintext, so it is created
//! owner-only and never rewritten once it exists.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use minicalc_core::config::{DEFAULT_GEMINI_MODEL, GeminiConfig, SecretConfig};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecretStorageError {
    #[error("No secret file at {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to access secret file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Secret file is not valid JSON: {0}")]
    ParseError(#[from] serde_json::Error),
}

pub struct SecretStorage {
    path: PathBuf,
}

impl SecretStorage {
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the file. A missing file is reported as
    /// [`SecretStorageError::NotFound`] so callers can treat it as "no
    /// credential" rather than a failure.
    pub fn load(&self) -> Result<SecretConfig, SecretStorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SecretStorageError::NotFound(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }

    /// Writes a template with an empty key unless the file already exists.
    /// On Unix the file is created with mode 0600.
    pub fn ensure_template(&self) -> Result<&Path, SecretStorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = match options.open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(&self.path),
            Err(e) => return Err(e.into()),
        };

        let template = SecretConfig {
            gemini: Some(GeminiConfig {
                api_key: String::new(),
                model_name: Some(DEFAULT_GEMINI_MODEL.to_string()),
            }),
        };
        file.write_all(serde_json::to_string_pretty(&template)?.as_bytes())?;
        file.sync_all()?;

        tracing::debug!(path = %self.path.display(), "wrote secret template");
        Ok(&self.path)
    }
}
