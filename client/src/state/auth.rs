//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and user-aware components read `RwSignal<AuthState>` from
//! context to render reactively; anything that changes the session (sign-in,
//! logout, profile save) goes through the [`PortalAuth`] context so the token
//! store and the signal never disagree.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use session::{AuthContext, PortalConfig, SessionCell, StorageTokenStore};

use crate::net::api::HttpPortalApi;
use crate::util::storage::BrowserStorage;

pub use session::AuthState;

/// [`SessionCell`] backed by a Leptos signal.
#[derive(Clone, Copy, Debug)]
pub struct AuthSignal(pub RwSignal<AuthState>);

impl SessionCell for AuthSignal {
    fn snapshot(&self) -> AuthState {
        self.0.try_get_untracked().unwrap_or_default()
    }

    fn modify(&self, f: impl FnOnce(&mut AuthState)) {
        // A disposed signal means the app itself has been torn down.
        let _ = self.0.try_update(f);
    }
}

/// The browser's session context: signal state, `localStorage` token and the
/// HTTP backend.
pub type PortalAuth = AuthContext<AuthSignal, StorageTokenStore<BrowserStorage>, HttpPortalApi>;

/// Build the session context and provide both it and its signal to the tree.
///
/// The signal starts in the initializing state; the caller starts resolution
/// with [`AuthContext::initialize`] once the app is mounted in the browser.
pub fn provide_auth() -> PortalAuth {
    let state = RwSignal::new(AuthState::default());
    let auth = AuthContext::new(
        AuthSignal(state),
        StorageTokenStore::new(BrowserStorage),
        HttpPortalApi::new(PortalConfig::from_build_env()),
    );
    provide_context(state);
    provide_context(auth.clone());
    auth
}
