//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates access control to
//! the `RequireAuth`/`RequireRole` components.

pub mod auth_callback;
pub mod dashboard;
pub mod home;
pub mod internal_affairs;
pub mod profile;
pub mod signin;
pub mod signup;
pub mod unauthorized;
