//! Completion of the third-party (Google) sign-in handshake.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity provider sends the browser back to `/auth/callback` either with
//! `?token=` already set by the backend, or with the provider's own parameters
//! that the backend must exchange. This is the one place session bootstrap and
//! first-run onboarding meet: a new account without a technical division gets
//! the profile-completion form instead of the dashboard.

#[cfg(test)]
#[path = "oauth_test.rs"]
mod oauth_test;

use std::time::Duration;

use crate::api::PortalApi;
use crate::context::{AuthContext, SessionCell, SessionPhase};
use crate::resolver::Resolution;
use crate::token::TokenStore;
use crate::user::User;

/// How long a callback error stays on screen before going back to sign-in.
pub const CALLBACK_ERROR_DISPLAY: Duration = Duration::from_millis(2500);

const MISSING_TOKEN: &str = "Sign-in did not return a session. Please try again.";
const SESSION_NOT_ESTABLISHED: &str = "Sign-in could not be completed. Please try again.";

/// Where the callback page goes next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// Session established and profile complete.
    Home,
    /// Session established; show the inline profile-completion form.
    CompleteProfile(User),
    /// Show the message, then return to sign-in.
    Failed(String),
}

/// Pull a non-empty `token` parameter out of a query string (leading `?`
/// optional, values URL-decoded).
#[must_use]
pub fn token_from_query(query: &str) -> Option<String> {
    let query = query.trim_start_matches('?');
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).ok()?;
    pairs
        .into_iter()
        .find(|(key, _)| key == "token")
        .map(|(_, value)| value.trim().to_owned())
        .filter(|token| !token.is_empty())
}

/// Turn the callback query into a session.
pub async fn complete_callback<C, S, A>(auth: &AuthContext<C, S, A>, query: &str) -> CallbackOutcome
where
    C: SessionCell,
    S: TokenStore,
    A: PortalApi,
{
    let token = match token_from_query(query) {
        Some(token) => token,
        None if query.trim_start_matches('?').is_empty() => {
            log::warn!("oauth callback reached without parameters");
            return CallbackOutcome::Failed(MISSING_TOKEN.to_owned());
        }
        None => match auth.api().exchange_oauth(query).await {
            Ok(token) if !token.trim().is_empty() => token,
            Ok(_) => return CallbackOutcome::Failed(MISSING_TOKEN.to_owned()),
            Err(err) => {
                log::warn!("oauth exchange failed: {err}");
                return CallbackOutcome::Failed(err.user_message());
            }
        },
    };

    if let Resolution::Unavailable(err) = auth.login(&token).await {
        return CallbackOutcome::Failed(err.user_message());
    }
    outcome_for(&auth.phase())
}

/// Routing decision for a settled session.
#[must_use]
pub fn outcome_for(phase: &SessionPhase) -> CallbackOutcome {
    match phase {
        SessionPhase::Authenticated(user) if user.needs_profile_completion() => {
            CallbackOutcome::CompleteProfile(user.clone())
        }
        SessionPhase::Authenticated(_) => CallbackOutcome::Home,
        SessionPhase::Initializing | SessionPhase::Anonymous => {
            CallbackOutcome::Failed(SESSION_NOT_ESTABLISHED.to_owned())
        }
    }
}
