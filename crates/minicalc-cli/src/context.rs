//! Wires the stores, services and calculators for one invocation.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use minicalc_application::CalculatorSuite;
use minicalc_core::Identity;
use minicalc_core::config::AppConfig;
use minicalc_core::secret::SecretService;
use minicalc_core::storage::KeyValueStore;
use minicalc_infrastructure::{
    AuthService, ConfigStorage, HistoryLedger, JsonFileStore, MinicalcPaths, SecretServiceImpl,
};
use minicalc_interaction::{GatewayConfig, GeminiRateGateway};

pub struct AppContext {
    pub paths: MinicalcPaths,
    pub config: AppConfig,
    pub auth: AuthService,
    secrets: SecretServiceImpl,
    history: Arc<HistoryLedger>,
}

impl AppContext {
    /// Resolves paths and loads `config.toml`. Opening the store touches no
    /// files until the first read or write.
    pub fn load(data_dir: Option<PathBuf>) -> Result<Self> {
        let paths = match data_dir {
            Some(root) => MinicalcPaths::with_root(root),
            None => MinicalcPaths::new(),
        };

        let config = ConfigStorage::new(paths.config_file()?).load()?;
        let store: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::new(paths.storage_file()?));
        let secrets = SecretServiceImpl::new(&paths)?;

        Ok(Self {
            auth: AuthService::new(store.clone()),
            history: Arc::new(HistoryLedger::new(store)),
            paths,
            config,
            secrets,
        })
    }

    /// `--user` wins; otherwise the signed-in user, if any.
    pub fn identity(&self, user_override: Option<&str>) -> Option<Identity> {
        match user_override {
            Some(uid) => Identity::new(uid),
            None => self.auth.current_user().and_then(|user| user.identity()),
        }
    }

    pub fn gateway(&self) -> GeminiRateGateway {
        let secrets = match self.secrets.load_secrets() {
            Ok(secrets) => secrets,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable secret.json");
                Default::default()
            }
        };

        if !self.secrets.secret_file_exists() {
            tracing::debug!("no secret.json, exchange rates are unavailable");
        }

        GeminiRateGateway::from_config(&GatewayConfig::new(&secrets, self.config.gateway.clone()))
    }

    pub fn suite(&self, identity: Option<Identity>) -> CalculatorSuite {
        CalculatorSuite::new(self.history.clone(), Arc::new(self.gateway())).with_identity(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minicalc_infrastructure::mock_google_user;
    use tempfile::TempDir;

    #[test]
    fn test_identity_prefers_override() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = AppContext::load(Some(temp_dir.path().to_path_buf())).unwrap();
        assert!(ctx.identity(None).is_none());

        let user = ctx.auth.sign_in(mock_google_user()).unwrap();
        assert_eq!(ctx.identity(None).unwrap().as_str(), user.uid);
        assert_eq!(ctx.identity(Some("bob")).unwrap().as_str(), "bob");
        assert!(ctx.identity(Some("  ")).is_none());
    }

    #[test]
    fn test_history_shared_between_contexts() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().to_path_buf();

        let first = AppContext::load(Some(root.clone())).unwrap();
        first.suite(first.identity(Some("alice"))).tax(100.0, 5.0);

        let second = AppContext::load(Some(root)).unwrap();
        let items = second.suite(second.identity(Some("alice"))).history();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].result, "Total with Tax: $105.00");
    }

    #[test]
    fn test_gateway_without_secrets_is_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = AppContext::load(Some(temp_dir.path().to_path_buf())).unwrap();
        assert!(!ctx.gateway().is_configured());
    }
}
