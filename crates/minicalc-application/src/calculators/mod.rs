//! Pure formula evaluators.
//!
//! Each calculator returns an [`Evaluated`] value: what to show, plus the
//! history entry to record when the input was meaningful. Degenerate input
//! (non-positive amounts) still produces a value but no entry.

pub mod bill_split;
pub mod currency;
pub mod engineering;
pub mod example_key;
pub mod expense;
pub mod tax;
pub mod tip;

use minicalc_core::history::NewHistoryEntry;

/// A calculator outcome and the history entry it earns, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluated<T> {
    pub value: T,
    pub entry: Option<NewHistoryEntry>,
}

impl<T> Evaluated<T> {
    pub fn recorded(value: T, entry: NewHistoryEntry) -> Self {
        Self {
            value,
            entry: Some(entry),
        }
    }

    pub fn unrecorded(value: T) -> Self {
        Self { value, entry: None }
    }
}

/// Two-decimal display used by every result line.
pub(crate) fn fixed2(value: f64) -> String {
    format!("{value:.2}")
}
