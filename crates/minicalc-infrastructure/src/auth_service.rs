//! Placeholder identity provider.
//!
//! Stores the signed-in user in the key-value store and tells interested
//! parties when it changes. There is no real authentication here: any user
//! handed to [`AuthService::sign_in`] is trusted. The uid is only ever used
//! as a history partition key.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, Weak};

use minicalc_core::error::Result;
use minicalc_core::storage::KeyValueStore;
use minicalc_core::user::User;
use rand::Rng;
use rand::distributions::Alphanumeric;

/// Key holding the signed-in user's JSON.
pub const USER_KEY: &str = "mini_calculator_user";

/// Observer invoked with the new signed-in user (`None` after sign-out).
pub type AuthCallback = Arc<dyn Fn(Option<&User>) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    subscribers: HashMap<u64, AuthCallback>,
}

/// Handle returned by [`AuthService::subscribe`].
///
/// Dropping it (or calling [`Subscription::unsubscribe`]) removes exactly this
/// observer; others keep receiving notifications.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry.lock().unwrap_or_else(PoisonError::into_inner);
            registry.subscribers.remove(&self.id);
        }
    }
}

pub struct AuthService {
    store: Arc<dyn KeyValueStore>,
    registry: Arc<Mutex<Registry>>,
}

impl AuthService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            registry: Arc::new(Mutex::new(Registry::default())),
        }
    }

    /// Persists `user` as the signed-in user and notifies every subscriber.
    pub fn sign_in(&self, user: User) -> Result<User> {
        let raw = serde_json::to_string(&user)?;
        self.store.set(USER_KEY, &raw)?;
        tracing::info!(uid = %user.uid, "signed in");
        self.notify(Some(&user));
        Ok(user)
    }

    /// Forgets the signed-in user and notifies every subscriber with `None`.
    pub fn sign_out(&self) -> Result<()> {
        self.store.remove(USER_KEY)?;
        tracing::info!("signed out");
        self.notify(None);
        Ok(())
    }

    /// The stored user, or `None` if nobody is signed in or the stored value
    /// cannot be read.
    pub fn current_user(&self) -> Option<User> {
        let raw = match self.store.get(USER_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read signed-in user");
                return None;
            }
        };
        serde_json::from_str(&raw)
            .inspect_err(|e| tracing::warn!(error = %e, "ignoring unreadable signed-in user"))
            .ok()
    }

    /// Registers `callback` and immediately invokes it with the current user.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(Option<&User>) + Send + Sync + 'static,
    {
        let callback: AuthCallback = Arc::new(callback);
        let id = {
            let mut registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
            let id = registry.next_id;
            registry.next_id += 1;
            registry.subscribers.insert(id, callback.clone());
            id
        };

        callback(self.current_user().as_ref());

        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .subscribers
            .len()
    }

    fn notify(&self, user: Option<&User>) {
        // Callbacks run outside the lock so they may subscribe or unsubscribe.
        let callbacks: Vec<AuthCallback> = {
            let registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
            registry.subscribers.values().cloned().collect()
        };
        for callback in callbacks {
            callback(user);
        }
    }
}

/// Builds a placeholder "Google" user the way the sign-in page does.
pub fn mock_google_user() -> User {
    let random_id: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .map(|c| char::from(c).to_ascii_lowercase())
        .take(7)
        .collect();

    let mut chars = random_id.chars();
    let display = match chars.next() {
        Some(first) => format!("{}{}", first.to_ascii_uppercase(), chars.as_str()),
        None => String::new(),
    };

    User {
        uid: format!("google|{}", chrono::Utc::now().timestamp_millis()),
        email: Some(format!("user.{random_id}@example.com")),
        display_name: Some(format!("User {display}")),
        photo_url: Some(format!("https://i.pravatar.cc/150?u={random_id}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn service() -> (Arc<MemoryStore>, AuthService) {
        let store = Arc::new(MemoryStore::new());
        (store.clone(), AuthService::new(store))
    }

    fn recorder() -> (Arc<Mutex<Vec<Option<String>>>>, impl Fn(Option<&User>) + Send + Sync) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |user: Option<&User>| {
            sink.lock().unwrap().push(user.map(|u| u.uid.clone()));
        })
    }

    #[test]
    fn test_sign_in_and_out_roundtrip() {
        let (store, auth) = service();
        let user = mock_google_user();

        auth.sign_in(user.clone()).unwrap();
        assert_eq!(auth.current_user(), Some(user));
        assert!(store.get(USER_KEY).unwrap().is_some());

        auth.sign_out().unwrap();
        assert_eq!(auth.current_user(), None);
    }

    #[test]
    fn test_subscribe_fires_immediately_with_stored_user() {
        let (_, auth) = service();
        let user = auth.sign_in(mock_google_user()).unwrap();

        let (seen, callback) = recorder();
        let _sub = auth.subscribe(callback);

        assert_eq!(*seen.lock().unwrap(), vec![Some(user.uid)]);
    }

    #[test]
    fn test_multiple_subscribers_all_notified() {
        let (_, auth) = service();
        let (first, cb1) = recorder();
        let (second, cb2) = recorder();
        let _s1 = auth.subscribe(cb1);
        let _s2 = auth.subscribe(cb2);

        let user = auth.sign_in(mock_google_user()).unwrap();
        auth.sign_out().unwrap();

        let expected = vec![None, Some(user.uid), None];
        assert_eq!(*first.lock().unwrap(), expected);
        assert_eq!(*second.lock().unwrap(), expected);
    }

    #[test]
    fn test_unsubscribe_removes_only_that_observer() {
        let (_, auth) = service();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let kept = auth.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let (dropped_seen, cb) = recorder();
        let dropped = auth.subscribe(cb);
        assert_eq!(auth.subscriber_count(), 2);

        dropped.unsubscribe();
        assert_eq!(auth.subscriber_count(), 1);

        auth.sign_in(mock_google_user()).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(dropped_seen.lock().unwrap().len(), 1);
        drop(kept);
        assert_eq!(auth.subscriber_count(), 0);
    }

    #[test]
    fn test_corrupt_stored_user_reads_as_signed_out() {
        let (store, auth) = service();
        store.set(USER_KEY, "{ broken").unwrap();
        assert_eq!(auth.current_user(), None);
    }

    #[test]
    fn test_mock_google_user_shape() {
        let user = mock_google_user();
        assert!(user.uid.starts_with("google|"));
        let email = user.email.unwrap();
        assert!(email.starts_with("user.") && email.ends_with("@example.com"));
        let name = user.display_name.unwrap();
        assert!(name.starts_with("User "));
        assert_eq!(name.len(), "User ".len() + 7);
    }
}
