//! Per-identity calculation history persisted in a key-value store.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Local;
use minicalc_core::error::Result;
use minicalc_core::history::{
    HISTORY_CAPACITY, HistoryItem, HistoryRepository, NewHistoryEntry, history_key,
};
use minicalc_core::storage::KeyValueStore;
use minicalc_core::Identity;
use uuid::Uuid;

/// Display format for `HistoryItem::date`, e.g. `10/19/2026, 3:04:05 PM`.
const DATE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// The history ledger.
///
/// Each identity's entries live under `history:<identity>` as a JSON array,
/// newest first, never longer than [`HISTORY_CAPACITY`]. Every mutation is a
/// single read-modify-write of that key, serialized by an in-process mutex so
/// two threads recording at once cannot lose each other's entries. Writers in
/// other processes are not coordinated: last writer wins.
///
/// Failures never escape. Unreadable or corrupt payloads list as empty, and
/// failed writes are logged and dropped.
pub struct HistoryLedger {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl HistoryLedger {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    fn load(&self, identity: &Identity) -> Result<Vec<HistoryItem>> {
        match self.store.get(&history_key(identity))? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Loads for a mutation. A corrupt ledger is replaced rather than
    /// blocking every later write.
    fn load_for_update(&self, identity: &Identity) -> Vec<HistoryItem> {
        self.load(identity).unwrap_or_else(|e| {
            tracing::warn!(identity = %identity, error = %e, "discarding unreadable history");
            Vec::new()
        })
    }

    fn save(&self, identity: &Identity, items: &[HistoryItem]) -> Result<()> {
        let raw = serde_json::to_string(items)?;
        self.store.set(&history_key(identity), &raw)
    }

    fn new_item(existing: &[HistoryItem], entry: NewHistoryEntry) -> HistoryItem {
        let taken: HashSet<&str> = existing.iter().map(|item| item.id.as_str()).collect();
        let mut id = Uuid::new_v4().to_string();
        while taken.contains(id.as_str()) {
            id = Uuid::new_v4().to_string();
        }

        HistoryItem {
            id,
            kind: entry.kind,
            result: entry.result,
            date: Local::now().format(DATE_FORMAT).to_string(),
        }
    }
}

impl HistoryRepository for HistoryLedger {
    fn list_results(&self, identity: Option<&Identity>) -> Vec<HistoryItem> {
        let Some(identity) = identity else {
            return Vec::new();
        };

        match self.load(identity) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(identity = %identity, error = %e, "failed to read history");
                Vec::new()
            }
        }
    }

    fn record_result(&self, identity: Option<&Identity>, entry: NewHistoryEntry) {
        let Some(identity) = identity else {
            tracing::debug!(kind = %entry.kind, "no identity, history not recorded");
            return;
        };

        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut items = self.load_for_update(identity);
        let item = Self::new_item(&items, entry);
        tracing::debug!(identity = %identity, id = %item.id, kind = %item.kind, "recording history");

        items.insert(0, item);
        items.truncate(HISTORY_CAPACITY);

        if let Err(e) = self.save(identity, &items) {
            tracing::warn!(identity = %identity, error = %e, "failed to persist history entry");
        }
    }

    fn delete_result(&self, identity: Option<&Identity>, id: &str) {
        let Some(identity) = identity else {
            return;
        };

        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut items = self.load_for_update(identity);
        items.retain(|item| item.id != id);

        if let Err(e) = self.save(identity, &items) {
            tracing::warn!(identity = %identity, id, error = %e, "failed to persist history deletion");
        }
    }

    fn clear_results(&self, identity: Option<&Identity>) {
        let Some(identity) = identity else {
            return;
        };

        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = self.store.remove(&history_key(identity)) {
            tracing::warn!(identity = %identity, error = %e, "failed to clear history");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use minicalc_core::CalcError;

    fn ledger() -> (Arc<MemoryStore>, HistoryLedger) {
        let store = Arc::new(MemoryStore::new());
        let ledger = HistoryLedger::new(store.clone());
        (store, ledger)
    }

    fn alice() -> Identity {
        Identity::new("alice").unwrap()
    }

    /// Store whose reads succeed but whose writes always fail.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(CalcError::storage("quota exceeded"))
        }

        fn remove(&self, _key: &str) -> Result<()> {
            Err(CalcError::storage("storage disabled"))
        }
    }

    #[test]
    fn test_record_prepends_newest_first() {
        let (_, ledger) = ledger();
        let id = alice();

        ledger.record_result(Some(&id), NewHistoryEntry::new("A", "first"));
        ledger.record_result(Some(&id), NewHistoryEntry::new("B", "second"));

        let items = ledger.list_results(Some(&id));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].result, "second");
        assert_eq!(items[1].result, "first");
        assert_ne!(items[0].id, items[1].id);
        assert!(!items[0].date.is_empty());
    }

    #[test]
    fn test_absent_identity_is_a_no_op() {
        let (store, ledger) = ledger();

        ledger.record_result(None, NewHistoryEntry::new("A", "x"));
        ledger.delete_result(None, "x");
        ledger.clear_results(None);

        assert!(store.is_empty());
        assert!(ledger.list_results(None).is_empty());
    }

    #[test]
    fn test_persists_under_history_key() {
        let (store, ledger) = ledger();
        let id = alice();

        ledger.record_result(Some(&id), NewHistoryEntry::new("Tax Calculation", "Total with Tax: $1.05"));

        let raw = store.get("history:alice").unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json[0]["type"], "Tax Calculation");
        assert_eq!(json[0]["result"], "Total with Tax: $1.05");
        assert!(json[0]["id"].is_string());
        assert!(json[0]["date"].is_string());
    }

    #[test]
    fn test_corrupt_payload_lists_empty_and_next_record_starts_fresh() {
        let (store, ledger) = ledger();
        let id = alice();
        store.set("history:alice", r#"{"nonsense": true}"#).unwrap();

        assert!(ledger.list_results(Some(&id)).is_empty());

        ledger.record_result(Some(&id), NewHistoryEntry::new("A", "x"));
        let items = ledger.list_results(Some(&id));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].result, "x");
    }

    #[test]
    fn test_delete_unknown_id_keeps_list() {
        let (_, ledger) = ledger();
        let id = alice();
        ledger.record_result(Some(&id), NewHistoryEntry::new("A", "x"));

        let before = ledger.list_results(Some(&id));
        ledger.delete_result(Some(&id), "no-such-id");
        assert_eq!(ledger.list_results(Some(&id)), before);
    }

    #[test]
    fn test_write_failures_are_swallowed() {
        let ledger = HistoryLedger::new(Arc::new(ReadOnlyStore));
        let id = alice();

        ledger.record_result(Some(&id), NewHistoryEntry::new("A", "x"));
        ledger.delete_result(Some(&id), "x");
        ledger.clear_results(Some(&id));

        assert!(ledger.list_results(Some(&id)).is_empty());
    }

    #[test]
    fn test_new_item_avoids_existing_ids() {
        let existing: Vec<HistoryItem> = (0..10)
            .map(|i| HistoryItem {
                id: format!("id-{i}"),
                kind: "A".to_string(),
                result: String::new(),
                date: String::new(),
            })
            .collect();

        let item = HistoryLedger::new_item(&existing, NewHistoryEntry::new("A", "x"));
        assert!(existing.iter().all(|e| e.id != item.id));
    }
}
