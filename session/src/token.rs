//! Persisted bearer-token slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser keeps exactly one token per profile under [`TOKEN_STORAGE_KEY`].
//! Only the auth context (`login`/`logout`) and the resolver's 401 handling
//! write it. Expiry is never tracked locally; a stale token is discovered by
//! the backend rejecting it.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Canonical storage key for the session token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Keys earlier builds wrote the token under; read once and migrated.
pub const LEGACY_TOKEN_KEYS: &[&str] = &["jwt"];

/// Single-slot token persistence.
pub trait TokenStore {
    /// Current token, if any.
    fn get(&self) -> Option<String>;
    /// Replace the stored token.
    fn set(&self, token: &str);
    /// Remove the stored token.
    fn clear(&self);
}

/// Durable string key-value backend (`localStorage` in the browser).
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// [`TokenStore`] over any [`KeyValueStore`], with legacy-key migration.
#[derive(Clone, Debug, Default)]
pub struct StorageTokenStore<B> {
    backend: B,
}

impl<B: KeyValueStore> StorageTokenStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    fn migrate_legacy(&self) -> Option<String> {
        for key in LEGACY_TOKEN_KEYS {
            let Some(token) = self.backend.get_item(key).filter(|t| !t.is_empty()) else {
                continue;
            };
            log::info!("migrating session token from legacy key '{key}'");
            self.backend.set_item(TOKEN_STORAGE_KEY, &token);
            self.backend.remove_item(key);
            return Some(token);
        }
        None
    }
}

impl<B: KeyValueStore> TokenStore for StorageTokenStore<B> {
    fn get(&self) -> Option<String> {
        self.backend
            .get_item(TOKEN_STORAGE_KEY)
            .filter(|t| !t.is_empty())
            .or_else(|| self.migrate_legacy())
    }

    fn set(&self, token: &str) {
        self.backend.set_item(TOKEN_STORAGE_KEY, token);
    }

    fn clear(&self) {
        self.backend.remove_item(TOKEN_STORAGE_KEY);
        for key in LEGACY_TOKEN_KEYS {
            self.backend.remove_item(key);
        }
    }
}

/// In-memory [`KeyValueStore`] for server rendering and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}
