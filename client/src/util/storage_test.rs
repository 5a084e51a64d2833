#![cfg(not(feature = "hydrate"))]

use super::*;
use session::{StorageTokenStore, TokenStore};

#[test]
fn reads_are_empty_outside_the_browser() {
    assert_eq!(BrowserStorage.get_item("token"), None);
}

#[test]
fn writes_are_noops_but_callable() {
    BrowserStorage.set_item("token", "abc123");
    BrowserStorage.remove_item("token");
    assert_eq!(BrowserStorage.get_item("token"), None);
}

#[test]
fn token_store_over_browser_storage_is_empty_on_server() {
    let store = StorageTokenStore::new(BrowserStorage);
    store.set("abc123");
    assert_eq!(store.get(), None);
    store.clear();
}

#[test]
fn failed_write_is_reported() {
    assert!(!write_ok("write", "oti_token", Err::<(), _>("QuotaExceededError")));
}

#[test]
fn successful_write_is_reported() {
    assert!(write_ok::<&str>("remove", "oti_token", Ok(())));
}
