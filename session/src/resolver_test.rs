use super::*;
use crate::test_support::{MockApi, TestStore, user};
use crate::token::{MemoryStore, StorageTokenStore};

fn store_with(token: Option<&str>) -> TestStore {
    let store = StorageTokenStore::new(MemoryStore::default());
    if let Some(token) = token {
        store.set(token);
    }
    store
}

#[tokio::test]
async fn no_token_skips_backend() {
    let api = MockApi::default();
    let store = store_with(None);

    let outcome = SessionResolver::new(&store, &api).resolve().await;

    assert_eq!(outcome, Resolution::NoToken);
    assert_eq!(api.profile_calls(), 0);
}

#[tokio::test]
async fn ok_profile_resolves_user() {
    let api = MockApi::default();
    api.respond("abc123", Ok(user("1", "A")));
    let store = store_with(Some("abc123"));

    let found = SessionResolver::new(&store, &api).resolve().await;

    assert_eq!(found, Resolution::Authenticated(user("1", "A")));
    assert_eq!(api.profile_calls(), 1);
}

#[tokio::test]
async fn unauthorized_clears_token() {
    let api = MockApi::default();
    api.respond("expired", Err(ApiError::Unauthorized));
    let store = store_with(Some("expired"));

    let outcome = SessionResolver::new(&store, &api).resolve().await;

    assert_eq!(outcome, Resolution::Rejected);
    assert_eq!(store.get(), None);
}

#[tokio::test]
async fn network_failure_keeps_token() {
    let api = MockApi::default();
    api.respond("abc123", Err(ApiError::Network("offline".to_owned())));
    let store = store_with(Some("abc123"));

    let outcome = SessionResolver::new(&store, &api).resolve().await;

    assert!(matches!(outcome, Resolution::Unavailable(ApiError::Network(_))));
    assert_eq!(store.get().as_deref(), Some("abc123"));
}

#[tokio::test]
async fn server_error_keeps_token() {
    let api = MockApi::default();
    api.respond("abc123", Err(ApiError::Unavailable { status: 502 }));
    let store = store_with(Some("abc123"));

    let outcome = SessionResolver::new(&store, &api).resolve().await;

    assert_eq!(outcome.into_user(), None);
    assert_eq!(store.get().as_deref(), Some("abc123"));
}

#[tokio::test]
async fn rejection_does_not_clear_a_replaced_token() {
    let api = MockApi::default();
    api.respond("old", Err(ApiError::Unauthorized));
    let release = api.gate("old");
    let store = store_with(Some("old"));

    let resolver = SessionResolver::new(&store, &api);
    let (outcome, ()) = tokio::join!(resolver.resolve(), async {
        store.set("new");
        let _ = release.send(());
    });

    assert_eq!(outcome, Resolution::Rejected);
    assert_eq!(store.get().as_deref(), Some("new"));
}
