//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session state machine itself lives in the `session` crate; this layer
//! only adapts it to Leptos signals and context.

pub mod auth;
