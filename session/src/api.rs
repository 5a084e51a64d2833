//! REST contract consumed by the session layer.
//!
//! The browser implementation lives in `client::net::api` (gloo-net); tests
//! script it in memory. Futures are `?Send` because everything runs on the
//! single WASM event loop.

use async_trait::async_trait;

use crate::error::ApiError;
use crate::forms::{ProfileUpdate, SignInRequest, SignUpRequest};
use crate::user::User;

#[async_trait(?Send)]
pub trait PortalApi {
    /// `POST /auth/signup`; returns the issued token.
    async fn sign_up(&self, request: &SignUpRequest) -> Result<String, ApiError>;

    /// `POST /auth/signin`; returns the issued token.
    async fn sign_in(&self, request: &SignInRequest) -> Result<String, ApiError>;

    /// `GET /auth/me` with `Authorization: Bearer <token>`.
    async fn fetch_profile(&self, token: &str) -> Result<User, ApiError>;

    /// `GET /auth/google/callback?<query>`; trades the provider's query string
    /// for a session token.
    async fn exchange_oauth(&self, query: &str) -> Result<String, ApiError>;

    /// `PUT /profile` with the bearer token; returns the updated profile.
    async fn update_profile(&self, token: &str, update: &ProfileUpdate) -> Result<User, ApiError>;
}
