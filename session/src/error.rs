//! Error taxonomy for calls against the portal REST backend.
//!
//! ERROR HANDLING
//! ==============
//! Every variant is local to the operation that produced it. Only
//! `Unauthorized` changes session state (token cleared, user demoted); the rest
//! are rendered inline through [`ApiError::user_message`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

const GENERIC_UNAVAILABLE: &str = "Unable to reach the server. Please try again.";

/// Errors produced by the REST adapter.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The bearer token was rejected (HTTP 401 on an authenticated call).
    #[error("session token rejected")]
    Unauthorized,

    /// The backend refused the request with a client error and a message.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The backend answered with a server error.
    #[error("backend unavailable: status {status}")]
    Unavailable { status: u16 },

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),

    /// The response body did not match the expected shape.
    #[error("response parse failed: {0}")]
    Decode(String),
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl ApiError {
    /// Classify a non-success response to an authenticated request.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => Self::Unauthorized,
            500..=599 => Self::Unavailable { status },
            _ => Self::Rejected { status, message: error_message(status, body) },
        }
    }

    /// Classify a non-success response to a credential submission.
    ///
    /// Sign-in and sign-up answer bad credentials with 4xx (often 401); those
    /// are form errors, not a dead session.
    #[must_use]
    pub fn from_credential_status(status: u16, body: &str) -> Self {
        match status {
            500..=599 => Self::Unavailable { status },
            _ => Self::Rejected { status, message: error_message(status, body) },
        }
    }

    /// Whether this error means the stored token is no longer valid.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Text suitable for an inline form error.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized => "Your session has expired. Please sign in again.".to_owned(),
            Self::Rejected { message, .. } => message.clone(),
            Self::Unavailable { .. } | Self::Network(_) | Self::Decode(_) => GENERIC_UNAVAILABLE.to_owned(),
        }
    }
}

/// Pull `message` (or `error`) out of a JSON error body, falling back to a
/// status-derived text.
fn error_message(status: u16, body: &str) -> String {
    let parsed = serde_json::from_str::<ErrorBody>(body).unwrap_or_default();
    parsed
        .message
        .or(parsed.error)
        .map(|m| m.trim().to_owned())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("request failed: {status}"))
}
