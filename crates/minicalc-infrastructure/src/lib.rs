pub mod auth_service;
pub mod history_ledger;
pub mod paths;
pub mod secret_service;
pub mod storage;

pub use crate::auth_service::{AuthService, Subscription, mock_google_user};
pub use crate::history_ledger::HistoryLedger;
pub use crate::paths::MinicalcPaths;
pub use crate::secret_service::SecretServiceImpl;
pub use crate::storage::{ConfigStorage, JsonFileStore, MemoryStore};
