//! Error types for minicalc.
//!
//! Most of these never reach a user: the history ledger and the exchange-rate
//! gateway absorb them at their boundary and only log them. They exist so the
//! storage, configuration and network layers can say *why* something failed.

use strum::Display;
use thiserror::Error;

/// On-disk encodings that can fail to (de)serialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum DataFormat {
    Json,
    Toml,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// File system failure, with the `io::ErrorKind` kept for the log.
    #[error("IO error ({kind:?}): {message}")]
    Io {
        kind: std::io::ErrorKind,
        message: String,
    },

    /// The key-value store refused the operation (quota, disabled, poisoned).
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("{format} error: {message}")]
    Serialization { format: DataFormat, message: String },

    /// Missing home directory, missing credential and the like.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Exchange-rate upstream failure: transport, HTTP status or payload shape.
    #[error("Gateway error: {0}")]
    Gateway(String),
}

impl CalcError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn gateway(message: impl Into<String>) -> Self {
        Self::Gateway(message.into())
    }

    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    fn serialization(format: DataFormat, err: impl std::fmt::Display) -> Self {
        Self::Serialization {
            format,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for CalcError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(DataFormat::Json, err)
    }
}

impl From<toml::de::Error> for CalcError {
    fn from(err: toml::de::Error) -> Self {
        Self::serialization(DataFormat::Toml, err)
    }
}

impl From<toml::ser::Error> for CalcError {
    fn from(err: toml::ser::Error) -> Self {
        Self::serialization(DataFormat::Toml, err)
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
