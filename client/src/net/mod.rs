//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the browser implementation of the session crate's `PortalApi`
//! contract; wire types are shared from `session::forms` and `session::user`.

pub mod api;
