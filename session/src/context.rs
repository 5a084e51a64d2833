//! Auth context: the page-lifetime session state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `AuthContext` is constructed at the application root and injected into
//! every consumer (route guards, navigation, role gates, the OAuth callback).
//! Consumers read [`AuthState`]; none of them touch the token store directly.
//!
//! STATES
//! ======
//! `Initializing` (loading, no user) → `Authenticated(user)` | `Anonymous`.
//! `login` re-enters `Initializing`; `logout` goes straight to `Anonymous`.
//!
//! CONCURRENCY
//! ===========
//! Every resolution takes a generation ticket. A completion whose ticket is no
//! longer current is dropped, so overlapping `login` calls are last-wins and an
//! in-flight resolution can never undo a `logout`.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::api::PortalApi;
use crate::error::ApiError;
use crate::forms::{ProfileUpdate, SignInRequest, SignUpRequest};
use crate::resolver::{Resolution, SessionResolver};
use crate::token::TokenStore;
use crate::user::User;

/// Externally observable session phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Initializing,
    Authenticated(User),
    Anonymous,
}

/// Identifies one resolution cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolutionTicket(u64);

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    generation: u64,
}

impl Default for AuthState {
    /// A fresh page starts out resolving.
    fn default() -> Self {
        Self { user: None, loading: true, generation: 0 }
    }
}

impl AuthState {
    /// A settled state with no user.
    #[must_use]
    pub fn anonymous() -> Self {
        Self { user: None, loading: false, generation: 0 }
    }

    /// A settled state for `user`.
    #[must_use]
    pub fn authenticated(user: User) -> Self {
        Self { user: Some(user), loading: false, generation: 0 }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match (&self.user, self.loading) {
            (_, true) => SessionPhase::Initializing,
            (Some(user), false) => SessionPhase::Authenticated(user.clone()),
            (None, false) => SessionPhase::Anonymous,
        }
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        !self.loading
    }

    /// Enter `Initializing` and hand out the ticket for this cycle.
    pub fn begin_resolution(&mut self) -> ResolutionTicket {
        self.generation += 1;
        self.loading = true;
        self.user = None;
        ResolutionTicket(self.generation)
    }

    /// Apply a resolution outcome if `ticket` is still current.
    ///
    /// Returns `false` when the outcome was stale and ignored.
    pub fn settle(&mut self, ticket: ResolutionTicket, user: Option<User>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.loading = false;
        self.user = user;
        true
    }

    /// Drop to `Anonymous` and invalidate any in-flight resolution.
    pub fn sign_out(&mut self) {
        self.generation += 1;
        self.loading = false;
        self.user = None;
    }

    /// Swap in a freshly saved profile. Only meaningful while authenticated.
    pub fn replace_user(&mut self, user: User) -> bool {
        if self.loading || self.user.is_none() {
            return false;
        }
        self.user = Some(user);
        true
    }
}

/// Where the auth state lives.
///
/// Natively this is an `Rc<RefCell<AuthState>>`; in the browser the client
/// wraps a Leptos `RwSignal` so views re-render on change.
pub trait SessionCell: Clone {
    /// Current state without subscribing.
    fn snapshot(&self) -> AuthState;
    /// Mutate in place, notifying observers.
    fn modify(&self, f: impl FnOnce(&mut AuthState));
}

impl SessionCell for Rc<RefCell<AuthState>> {
    fn snapshot(&self) -> AuthState {
        self.borrow().clone()
    }

    fn modify(&self, f: impl FnOnce(&mut AuthState)) {
        f(&mut *self.borrow_mut());
    }
}

/// Session operations over a state cell, a token store and the REST backend.
#[derive(Clone, Debug)]
pub struct AuthContext<C, S, A> {
    cell: C,
    store: S,
    api: A,
}

impl<C, S, A> AuthContext<C, S, A>
where
    C: SessionCell,
    S: TokenStore,
    A: PortalApi,
{
    pub fn new(cell: C, store: S, api: A) -> Self {
        Self { cell, store, api }
    }

    pub fn cell(&self) -> &C {
        &self.cell
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    #[must_use]
    pub fn state(&self) -> AuthState {
        self.cell.snapshot()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.state().phase()
    }

    /// Mount-time resolution from whatever token is already stored.
    pub async fn initialize(&self) {
        self.resolve_into_state().await;
    }

    /// Persist `token` and resolve the user it belongs to.
    pub async fn login(&self, token: &str) -> Resolution {
        self.store.set(token);
        self.resolve_into_state().await
    }

    /// Forget the token and the user. No network call.
    pub fn logout(&self) {
        self.store.clear();
        self.cell.modify(AuthState::sign_out);
        log::info!("signed out");
    }

    /// Email/password sign-in followed by [`login`](Self::login).
    ///
    /// # Errors
    ///
    /// A credential refusal is returned unchanged and leaves the session
    /// untouched. A token that does not lead to a profile is an error as well:
    /// the fetch error if the backend failed, `Unauthorized` if it refused the
    /// token.
    pub async fn sign_in(&self, request: &SignInRequest) -> Result<(), ApiError> {
        let token = self.api.sign_in(request).await?;
        established(self.login(&token).await)
    }

    /// Account creation followed by [`login`](Self::login).
    ///
    /// # Errors
    ///
    /// Same as [`sign_in`](Self::sign_in).
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<(), ApiError> {
        let token = self.api.sign_up(request).await?;
        established(self.login(&token).await)
    }

    /// Save profile fields and adopt the returned profile.
    ///
    /// # Errors
    ///
    /// `Unauthorized` when there is no token or the backend rejects it (the
    /// session is then signed out); other errors leave the session as is.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        let token = self.store.get().ok_or(ApiError::Unauthorized)?;
        match self.api.update_profile(&token, update).await {
            Ok(user) => {
                self.cell.modify(|s| {
                    s.replace_user(user.clone());
                });
                Ok(user)
            }
            Err(err) if err.is_unauthorized() => {
                self.logout();
                Err(ApiError::Unauthorized)
            }
            Err(err) => Err(err),
        }
    }

    async fn resolve_into_state(&self) -> Resolution {
        let mut ticket = ResolutionTicket::default();
        self.cell.modify(|s| ticket = s.begin_resolution());

        let resolution = SessionResolver::new(&self.store, &self.api).resolve().await;

        let mut applied = false;
        self.cell.modify(|s| applied = s.settle(ticket, resolution.clone().into_user()));
        if !applied {
            log::debug!("discarded stale session resolution");
        }
        resolution
    }
}

/// Turn the resolution that follows a fresh token into a form result.
fn established(resolution: Resolution) -> Result<(), ApiError> {
    match resolution {
        Resolution::Authenticated(_) => Ok(()),
        Resolution::Unavailable(err) => Err(err),
        Resolution::NoToken | Resolution::Rejected => Err(ApiError::Unauthorized),
    }
}
