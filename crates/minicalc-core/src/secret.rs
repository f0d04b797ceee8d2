//! Secret management service trait.
//!
//! Defines the interface for loading the API credential used by the
//! exchange-rate gateway.

use crate::config::SecretConfig;

/// Service for managing secret configuration.
///
/// # Security Note
///
/// Implementations should ensure that:
/// - Secret files have appropriate permissions (e.g., 600 on Unix)
/// - Secrets are never logged or exposed in error messages
pub trait SecretService: Send + Sync {
    /// Loads the secret configuration.
    ///
    /// # Returns
    ///
    /// - `Ok(SecretConfig)`: Successfully loaded secrets (possibly empty)
    /// - `Err(String)`: Failed to load (error message should not contain secrets)
    fn load_secrets(&self) -> Result<SecretConfig, String>;

    /// Checks if the secret file exists.
    fn secret_file_exists(&self) -> bool;
}
