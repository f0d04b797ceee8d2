pub mod config;
pub mod error;
pub mod history;
pub mod identity;
pub mod rate;
pub mod secret;
pub mod storage;
pub mod user;

// Re-export common error type
pub use error::CalcError;
pub use identity::Identity;
