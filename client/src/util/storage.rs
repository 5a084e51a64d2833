//! Browser `localStorage` backend for the session token store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session::StorageTokenStore` owns the key names and legacy migration; this
//! type only moves strings in and out of `window.localStorage`. Storage may be
//! missing (private mode, SSR), in which case reads are empty and writes drop
//! with a warning.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::fmt::Debug;

use session::KeyValueStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Log a failed storage write. Returns whether the write went through.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn write_ok<E: Debug>(action: &str, key: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            log::warn!("localStorage {action} for {key} failed: {err:?}");
            false
        }
    }
}

/// `window.localStorage`, or nothing outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; session will not persist");
                return;
            };
            write_ok("write", key, storage.set_item(key, value));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                write_ok("remove", key, storage.remove_item(key));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}
