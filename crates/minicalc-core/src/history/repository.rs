//! History repository trait.

use super::model::{HistoryItem, NewHistoryEntry};
use crate::identity::Identity;

/// Maximum number of entries kept per identity. Oldest entries beyond this
/// are dropped on write.
pub const HISTORY_CAPACITY: usize = 50;

/// Storage key under which an identity's ledger is persisted.
pub fn history_key(identity: &Identity) -> String {
    format!("history:{}", identity.as_str())
}

/// Interface the calculators and the history view use to reach the ledger.
///
/// None of these operations fail observably. History is advisory: an absent
/// identity, an unavailable store or a corrupt payload degrade to "nothing
/// recorded" / "nothing listed" instead of surfacing an error.
pub trait HistoryRepository: Send + Sync {
    /// Returns the identity's entries, newest first.
    fn list_results(&self, identity: Option<&Identity>) -> Vec<HistoryItem>;

    /// Records a new entry at the front of the identity's ledger.
    fn record_result(&self, identity: Option<&Identity>, entry: NewHistoryEntry);

    /// Removes the entry with the given id. Unknown ids leave the ledger unchanged.
    fn delete_result(&self, identity: Option<&Identity>, id: &str);

    /// Removes the identity's whole ledger.
    fn clear_results(&self, identity: Option<&Identity>);
}
