//! One-shot "who am I" resolution from the stored token.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use crate::api::PortalApi;
use crate::error::ApiError;
use crate::token::TokenStore;
use crate::user::User;

/// Outcome of a single resolution attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Nothing stored; the backend was not called.
    NoToken,
    Authenticated(User),
    /// The backend rejected the token; it has been cleared.
    Rejected,
    /// Transient failure; the token was kept for the next attempt.
    Unavailable(ApiError),
}

impl Resolution {
    #[must_use]
    pub fn into_user(self) -> Option<User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::NoToken | Self::Rejected | Self::Unavailable(_) => None,
        }
    }
}

/// Resolves the current user from whatever token the store holds.
pub struct SessionResolver<'a, S, A> {
    store: &'a S,
    api: &'a A,
}

impl<'a, S: TokenStore, A: PortalApi> SessionResolver<'a, S, A> {
    pub fn new(store: &'a S, api: &'a A) -> Self {
        Self { store, api }
    }

    /// Issue at most one profile request.
    pub async fn resolve(&self) -> Resolution {
        let Some(token) = self.store.get() else {
            log::debug!("no stored session token");
            return Resolution::NoToken;
        };

        match self.api.fetch_profile(&token).await {
            Ok(user) => {
                log::debug!("session resolved for user {}", user.id);
                Resolution::Authenticated(user)
            }
            Err(err) if err.is_unauthorized() => {
                // A newer login may have replaced the token while this request
                // was in flight; only drop the one the backend refused.
                if self.store.get().as_deref() == Some(token.as_str()) {
                    self.store.clear();
                }
                log::info!("stored session token rejected; cleared");
                Resolution::Rejected
            }
            Err(err) => {
                log::warn!("session resolution failed: {err}");
                Resolution::Unavailable(err)
            }
        }
    }
}
