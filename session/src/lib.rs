//! Session lifecycle core for the OTI Connect portal client.
//!
//! This crate owns everything about "who is signed in" that does not depend on
//! a UI framework: the persisted bearer token, profile resolution against the
//! backend, the auth state machine, route/role guard decisions and the OAuth
//! callback flow. The `client` crate binds these to Leptos signals, browser
//! storage and `gloo-net`.

pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod forms;
pub mod guard;
pub mod nav;
pub mod oauth;
pub mod resolver;
pub mod token;
pub mod user;

#[cfg(test)]
mod test_support;

pub use api::PortalApi;
pub use config::PortalConfig;
pub use context::{AuthContext, AuthState, SessionCell, SessionPhase};
pub use error::ApiError;
pub use guard::{AccessRule, GuardDecision};
pub use nav::Navigation;
pub use resolver::{Resolution, SessionResolver};
pub use token::{KeyValueStore, MemoryStore, StorageTokenStore, TokenStore};
pub use user::{Availability, ManagerialDivision, Role, TechnicalDivision, User};
