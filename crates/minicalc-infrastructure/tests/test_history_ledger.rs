use std::sync::Arc;

use minicalc_core::Identity;
use minicalc_core::history::{HISTORY_CAPACITY, HistoryRepository, NewHistoryEntry};
use minicalc_infrastructure::{HistoryLedger, JsonFileStore, MemoryStore};
use tempfile::TempDir;

fn file_ledger(temp_dir: &TempDir) -> HistoryLedger {
    let store = JsonFileStore::new(temp_dir.path().join("storage.json"));
    HistoryLedger::new(Arc::new(store))
}

fn identity(uid: &str) -> Identity {
    Identity::new(uid).unwrap()
}

#[test]
fn test_capacity_keeps_fifty_most_recent() {
    let temp_dir = TempDir::new().unwrap();
    let ledger = file_ledger(&temp_dir);
    let user = identity("google|1");

    for i in 0..60 {
        ledger.record_result(Some(&user), NewHistoryEntry::new("Test", format!("result {i}")));
    }

    let items = ledger.list_results(Some(&user));
    assert_eq!(items.len(), HISTORY_CAPACITY);
    let expected: Vec<String> = (10..60).rev().map(|i| format!("result {i}")).collect();
    let actual: Vec<String> = items.into_iter().map(|item| item.result).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_identities_are_isolated() {
    let temp_dir = TempDir::new().unwrap();
    let ledger = file_ledger(&temp_dir);
    let a = identity("alice");
    let b = identity("bob");

    ledger.record_result(Some(&b), NewHistoryEntry::new("Test", "bob's"));
    let before = ledger.list_results(Some(&b));

    ledger.record_result(Some(&a), NewHistoryEntry::new("Test", "alice's"));
    ledger.clear_results(Some(&a));
    ledger.record_result(Some(&a), NewHistoryEntry::new("Test", "alice again"));

    assert_eq!(ledger.list_results(Some(&b)), before);
    assert_eq!(ledger.list_results(Some(&a)).len(), 1);
}

#[test]
fn test_delete_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let ledger = file_ledger(&temp_dir);
    let user = identity("alice");

    ledger.record_result(Some(&user), NewHistoryEntry::new("Test", "keep"));
    ledger.record_result(Some(&user), NewHistoryEntry::new("Test", "drop"));
    let target = ledger.list_results(Some(&user))[0].id.clone();

    ledger.delete_result(Some(&user), &target);
    let after_first = ledger.list_results(Some(&user));
    ledger.delete_result(Some(&user), &target);
    let after_second = ledger.list_results(Some(&user));

    assert_eq!(after_first, after_second);
    assert_eq!(after_second.len(), 1);
    assert_eq!(after_second[0].result, "keep");
}

#[test]
fn test_clear_is_total() {
    let temp_dir = TempDir::new().unwrap();
    let ledger = file_ledger(&temp_dir);
    let user = identity("alice");

    for i in 0..3 {
        ledger.record_result(Some(&user), NewHistoryEntry::new("Test", format!("{i}")));
    }
    ledger.clear_results(Some(&user));
    assert!(ledger.list_results(Some(&user)).is_empty());

    ledger.clear_results(Some(&user));
    ledger.record_result(Some(&user), NewHistoryEntry::new("Test", "fresh"));

    let items = ledger.list_results(Some(&user));
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].result, "fresh");
}

#[test]
fn test_history_survives_restart() {
    let temp_dir = TempDir::new().unwrap();
    let user = identity("alice");

    file_ledger(&temp_dir).record_result(Some(&user), NewHistoryEntry::new("Test", "persisted"));

    let items = file_ledger(&temp_dir).list_results(Some(&user));
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].result, "persisted");
}

#[test]
fn test_concurrent_records_are_not_lost() {
    let ledger = Arc::new(HistoryLedger::new(Arc::new(MemoryStore::new())));
    let user = identity("alice");

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let ledger = ledger.clone();
            let user = user.clone();
            std::thread::spawn(move || {
                for i in 0..5 {
                    ledger.record_result(Some(&user), NewHistoryEntry::new("Test", format!("{t}-{i}")));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(ledger.list_results(Some(&user)).len(), 40);
}
