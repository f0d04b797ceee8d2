//! Secret service implementation.
//!
//! Reads secret.json through [`SecretStorage`] and caches the result so the
//! file is read at most once per process.

use crate::paths::MinicalcPaths;
use crate::storage::{SecretStorage, SecretStorageError};
use minicalc_core::config::SecretConfig;
use minicalc_core::secret::SecretService;
use std::sync::{Arc, PoisonError, RwLock};

/// Service for managing secret configuration.
///
/// # Example
///
/// ```ignore
/// use minicalc_infrastructure::SecretServiceImpl;
/// use minicalc_core::secret::SecretService;
///
/// let service = SecretServiceImpl::new(&MinicalcPaths::new())?;
/// let api_key = service.load_secrets()?.gemini_api_key().map(str::to_owned);
/// ```
#[derive(Clone)]
pub struct SecretServiceImpl {
    /// Cached secret config loaded from storage.
    secrets: Arc<RwLock<Option<SecretConfig>>>,
    storage: Arc<SecretStorage>,
}

impl SecretServiceImpl {
    pub fn new(paths: &MinicalcPaths) -> minicalc_core::error::Result<Self> {
        Ok(Self::with_storage(SecretStorage::with_path(
            paths.secret_file()?,
        )))
    }

    pub fn with_storage(storage: SecretStorage) -> Self {
        Self {
            secrets: Arc::new(RwLock::new(None)),
            storage: Arc::new(storage),
        }
    }

    fn load_secrets_internal(&self) -> Result<SecretConfig, String> {
        {
            let read_lock = self.secrets.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        // A missing secret.json simply means "no credential configured".
        let loaded = match self.storage.load() {
            Ok(config) => config,
            Err(SecretStorageError::NotFound(path)) => {
                tracing::debug!(path = %path.display(), "secret file not found, no credentials");
                SecretConfig::default()
            }
            Err(e) => return Err(format!("Failed to load secret.json: {}", e)),
        };

        {
            let mut write_lock = self.secrets.write().unwrap_or_else(PoisonError::into_inner);
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }
}

impl SecretService for SecretServiceImpl {
    fn load_secrets(&self) -> Result<SecretConfig, String> {
        self.load_secrets_internal()
    }

    fn secret_file_exists(&self) -> bool {
        self.storage.path().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_means_no_credentials() {
        let temp_dir = TempDir::new().unwrap();
        let service = SecretServiceImpl::new(&MinicalcPaths::with_root(temp_dir.path())).unwrap();

        assert!(!service.secret_file_exists());
        let secrets = service.load_secrets().unwrap();
        assert!(secrets.gemini_api_key().is_none());
    }

    #[test]
    fn test_secrets_are_cached() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("secret.json");
        std::fs::write(&path, r#"{ "gemini": { "api_key": "first" } }"#).unwrap();

        let service = SecretServiceImpl::with_storage(SecretStorage::with_path(path.clone()));
        assert_eq!(service.load_secrets().unwrap().gemini_api_key(), Some("first"));

        std::fs::write(&path, r#"{ "gemini": { "api_key": "second" } }"#).unwrap();
        assert_eq!(service.load_secrets().unwrap().gemini_api_key(), Some("first"));
    }

    #[test]
    fn test_invalid_file_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("secret.json");
        std::fs::write(&path, "not json").unwrap();

        let service = SecretServiceImpl::with_storage(SecretStorage::with_path(path));
        let err = service.load_secrets().unwrap_err();
        assert!(err.contains("secret.json"));
    }
}
