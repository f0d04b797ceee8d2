//! Calculation history domain module.
//!
//! # Module Structure
//!
//! - `model`: `HistoryItem` as persisted, `NewHistoryEntry` as submitted by calculators
//! - `repository`: the `HistoryRepository` collaborator interface
//!
//! # Usage
//!
//! ```ignore
//! use minicalc_core::history::{HistoryItem, HistoryRepository, NewHistoryEntry};
//! ```

mod model;
mod repository;

pub use model::{CalculationKind, HistoryItem, NewHistoryEntry};
pub use repository::{HISTORY_CAPACITY, HistoryRepository, history_key};
