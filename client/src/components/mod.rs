//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session from Leptos context: `RwSignal<AuthState>` for
//! rendering and `PortalAuth` for anything that changes the session.

pub mod main_nav;
pub mod profile_form;
pub mod require_auth;
pub mod require_role;
