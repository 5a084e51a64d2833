use super::*;
use crate::test_support::{MockApi, context, user};
use crate::user::{Role, TechnicalDivision};

// =============================================================
// AuthState transitions
// =============================================================

#[test]
fn default_state_is_initializing() {
    assert_eq!(AuthState::default().phase(), SessionPhase::Initializing);
}

#[test]
fn stale_ticket_is_ignored() {
    let mut state = AuthState::default();
    let first = state.begin_resolution();
    let second = state.begin_resolution();

    assert!(!state.settle(first, Some(user("1", "Old"))));
    assert_eq!(state.phase(), SessionPhase::Initializing);
    assert!(state.settle(second, None));
    assert_eq!(state.phase(), SessionPhase::Anonymous);
}

#[test]
fn sign_out_invalidates_in_flight_ticket() {
    let mut state = AuthState::default();
    let ticket = state.begin_resolution();
    state.sign_out();

    assert!(!state.settle(ticket, Some(user("1", "A"))));
    assert_eq!(state.phase(), SessionPhase::Anonymous);
}

#[test]
fn replace_user_requires_authenticated() {
    let mut state = AuthState::anonymous();
    assert!(!state.replace_user(user("1", "A")));

    let mut state = AuthState::authenticated(user("1", "A"));
    assert!(state.replace_user(user("1", "B")));
    assert_eq!(state.user.map(|u| u.name), Some("B".to_owned()));
}

// =============================================================
// AuthContext lifecycle
// =============================================================

#[tokio::test]
async fn login_then_store_holds_token() {
    let api = MockApi::default();
    api.respond("t-1", Ok(user("1", "A")));
    let ctx = context(&api);

    ctx.login("t-1").await;

    assert_eq!(ctx.store.get().as_deref(), Some("t-1"));
}

#[tokio::test]
async fn initialize_without_token_is_anonymous_and_offline() {
    let api = MockApi::default();
    let ctx = context(&api);

    ctx.initialize().await;

    assert_eq!(ctx.phase(), SessionPhase::Anonymous);
    assert_eq!(api.profile_calls(), 0);
}

#[tokio::test]
async fn initialize_with_valid_token_authenticates_exact_user() {
    let api = MockApi::default();
    let profile: User = serde_json::from_value(serde_json::json!({
        "id": "1",
        "name": "A",
        "email": "a@x.com",
        "role": "Member",
        "mainDivision": "frontend"
    }))
    .unwrap();
    api.respond("abc123", Ok(profile));
    let ctx = context(&api);
    ctx.store.set("abc123");

    ctx.initialize().await;

    let expected = User {
        id: "1".to_owned(),
        name: "A".to_owned(),
        email: "a@x.com".to_owned(),
        role: Role::Member,
        main_division: Some(TechnicalDivision::FrontendDevelopment),
        managerial_division: None,
        available_times: Vec::new(),
    };
    assert_eq!(ctx.phase(), SessionPhase::Authenticated(expected));
}

#[tokio::test]
async fn expired_token_is_anonymous_and_cleared() {
    let api = MockApi::default();
    api.respond("expired", Err(ApiError::Unauthorized));
    let ctx = context(&api);
    ctx.store.set("expired");

    ctx.initialize().await;

    assert_eq!(ctx.phase(), SessionPhase::Anonymous);
    assert_eq!(ctx.store.get(), None);
    assert_eq!(
        crate::guard::route_guard(&ctx.state()),
        crate::guard::GuardDecision::Redirect(crate::nav::Navigation::soft(crate::nav::SIGN_IN_ROUTE))
    );
}

#[tokio::test]
async fn network_error_is_anonymous_but_keeps_token() {
    let api = MockApi::default();
    api.respond("abc123", Err(ApiError::Network("offline".to_owned())));
    let ctx = context(&api);
    ctx.store.set("abc123");

    ctx.initialize().await;
    assert_eq!(ctx.phase(), SessionPhase::Anonymous);
    assert_eq!(ctx.store.get().as_deref(), Some("abc123"));

    // Next cycle retries with the same token.
    api.respond("abc123", Ok(user("1", "A")));
    ctx.initialize().await;
    assert_eq!(ctx.phase(), SessionPhase::Authenticated(user("1", "A")));
}

#[tokio::test]
async fn logout_is_synchronous_and_offline() {
    let api = MockApi::default();
    api.respond("abc123", Ok(user("1", "A")));
    let ctx = context(&api);
    ctx.login("abc123").await;
    let calls_before = api.profile_calls();

    ctx.logout();

    assert_eq!(ctx.phase(), SessionPhase::Anonymous);
    assert_eq!(ctx.store.get(), None);
    assert_eq!(api.profile_calls(), calls_before);
}

#[tokio::test]
async fn login_passes_through_initializing() {
    let api = MockApi::default();
    api.respond("abc123", Ok(user("1", "A")));
    let release = api.gate("abc123");
    let ctx = context(&api);

    let observed = RefCell::new(None);
    tokio::join!(ctx.login("abc123"), async {
        *observed.borrow_mut() = Some(ctx.phase());
        let _ = release.send(());
    });

    assert_eq!(observed.into_inner(), Some(SessionPhase::Initializing));
    assert_eq!(ctx.phase(), SessionPhase::Authenticated(user("1", "A")));
}

#[tokio::test]
async fn superseded_login_result_is_discarded() {
    let api = MockApi::default();
    api.respond("old", Ok(user("1", "Old")));
    api.respond("new", Ok(user("2", "New")));
    let release_old = api.gate("old");
    let ctx = context(&api);

    tokio::join!(ctx.login("old"), ctx.login("new"), async {
        tokio::task::yield_now().await;
        let _ = release_old.send(());
    });

    assert_eq!(ctx.phase(), SessionPhase::Authenticated(user("2", "New")));
    assert_eq!(ctx.store.get().as_deref(), Some("new"));
}

#[tokio::test]
async fn logout_during_resolution_wins() {
    let api = MockApi::default();
    api.respond("abc123", Ok(user("1", "A")));
    let release = api.gate("abc123");
    let ctx = context(&api);

    tokio::join!(ctx.login("abc123"), async {
        ctx.logout();
        let _ = release.send(());
    });

    assert_eq!(ctx.phase(), SessionPhase::Anonymous);
    assert_eq!(ctx.store.get(), None);
}

#[tokio::test]
async fn sign_in_failure_leaves_session_untouched() {
    let api = MockApi::default();
    api.on_sign_in(Err(ApiError::Rejected { status: 401, message: "Invalid credentials".to_owned() }));
    let ctx = context(&api);
    ctx.initialize().await;

    let req = SignInRequest::from_form("a@x.com", "bad").unwrap();
    let err = ctx.sign_in(&req).await.unwrap_err();

    assert_eq!(err.user_message(), "Invalid credentials");
    assert_eq!(ctx.phase(), SessionPhase::Anonymous);
    assert_eq!(api.profile_calls(), 0);
}

#[tokio::test]
async fn sign_in_success_logs_in() {
    let api = MockApi::default();
    api.on_sign_in(Ok("fresh".to_owned()));
    api.respond("fresh", Ok(user("7", "Ann")));
    let ctx = context(&api);

    let req = SignInRequest::from_form("ann@x.com", "pw").unwrap();
    ctx.sign_in(&req).await.unwrap();

    assert_eq!(ctx.phase(), SessionPhase::Authenticated(user("7", "Ann")));
    assert_eq!(ctx.store.get().as_deref(), Some("fresh"));
}

#[tokio::test]
async fn sign_up_success_logs_in() {
    let api = MockApi::default();
    api.on_sign_up(Ok("new-account".to_owned()));
    api.respond("new-account", Ok(user("8", "Bo")));
    let ctx = context(&api);

    let req = SignUpRequest::from_form("Bo", "bo@x.com", "pw", "pw").unwrap();
    ctx.sign_up(&req).await.unwrap();

    assert_eq!(ctx.phase(), SessionPhase::Authenticated(user("8", "Bo")));
}

#[tokio::test]
async fn sign_in_reports_profile_fetch_failure() {
    let api = MockApi::default();
    api.on_sign_in(Ok("fresh".to_owned()));
    api.respond("fresh", Err(ApiError::Network("offline".to_owned())));
    let ctx = context(&api);

    let req = SignInRequest::from_form("ann@x.com", "pw").unwrap();
    let err = ctx.sign_in(&req).await.unwrap_err();

    assert_eq!(err, ApiError::Network("offline".to_owned()));
    assert_eq!(err.user_message(), ApiError::Unavailable { status: 503 }.user_message());
    assert_eq!(ctx.phase(), SessionPhase::Anonymous);
    assert_eq!(ctx.store.get().as_deref(), Some("fresh"));
}

#[tokio::test]
async fn sign_up_reports_refused_fresh_token() {
    let api = MockApi::default();
    api.on_sign_up(Ok("new-account".to_owned()));
    api.respond("new-account", Err(ApiError::Unauthorized));
    let ctx = context(&api);

    let req = SignUpRequest::from_form("Bo", "bo@x.com", "pw", "pw").unwrap();

    assert_eq!(ctx.sign_up(&req).await, Err(ApiError::Unauthorized));
    assert_eq!(ctx.phase(), SessionPhase::Anonymous);
    assert_eq!(ctx.store.get(), None);
}

#[tokio::test]
async fn sign_up_reports_server_error_on_profile() {
    let api = MockApi::default();
    api.on_sign_up(Ok("new-account".to_owned()));
    api.respond("new-account", Err(ApiError::Unavailable { status: 502 }));
    let ctx = context(&api);

    let req = SignUpRequest::from_form("Bo", "bo@x.com", "pw", "pw").unwrap();

    assert_eq!(ctx.sign_up(&req).await, Err(ApiError::Unavailable { status: 502 }));
    assert_eq!(ctx.phase(), SessionPhase::Anonymous);
}

#[tokio::test]
async fn login_returns_the_resolution() {
    let api = MockApi::default();
    api.respond("t-1", Ok(user("1", "A")));
    let ctx = context(&api);

    assert_eq!(ctx.login("t-1").await, Resolution::Authenticated(user("1", "A")));
    assert_eq!(ctx.login("unknown").await, Resolution::Rejected);
}

#[tokio::test]
async fn update_profile_replaces_user() {
    let api = MockApi::default();
    let mut incomplete = user("1", "A");
    incomplete.main_division = None;
    api.respond("abc123", Ok(incomplete));
    api.on_update(Ok(user("1", "A")));
    let ctx = context(&api);
    ctx.login("abc123").await;

    let update = ProfileUpdate {
        main_division: TechnicalDivision::BackendDevelopment,
        managerial_division: None,
        available_times: Vec::new(),
    };
    ctx.update_profile(&update).await.unwrap();

    assert_eq!(ctx.phase(), SessionPhase::Authenticated(user("1", "A")));
    assert_eq!(api.updates(), vec![("abc123".to_owned(), update)]);
}

#[tokio::test]
async fn update_profile_rejected_signs_out() {
    let api = MockApi::default();
    api.respond("abc123", Ok(user("1", "A")));
    api.on_update(Err(ApiError::Unauthorized));
    let ctx = context(&api);
    ctx.login("abc123").await;

    let update = ProfileUpdate {
        main_division: TechnicalDivision::UiUx,
        managerial_division: None,
        available_times: Vec::new(),
    };
    assert_eq!(ctx.update_profile(&update).await, Err(ApiError::Unauthorized));
    assert_eq!(ctx.phase(), SessionPhase::Anonymous);
    assert_eq!(ctx.store.get(), None);
}

#[tokio::test]
async fn update_profile_without_token_is_unauthorized() {
    let api = MockApi::default();
    let ctx = context(&api);
    let update = ProfileUpdate {
        main_division: TechnicalDivision::UiUx,
        managerial_division: None,
        available_times: Vec::new(),
    };
    assert_eq!(ctx.update_profile(&update).await, Err(ApiError::Unauthorized));
    assert!(api.updates().is_empty());
}
