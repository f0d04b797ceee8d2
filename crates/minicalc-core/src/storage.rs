//! Key-value persistence trait.
//!
//! Models a durable, synchronous, string-keyed store scoped to one device
//! profile (the role local storage plays in a browser). Components own the
//! keys they write; the store itself knows nothing about their layout.

use crate::error::Result;

/// A synchronous string-keyed store.
///
/// Implementations must be safe to share between threads. Each method is a
/// single logical operation: a `set` either replaces the whole value or
/// fails without a partially-written state being visible.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
