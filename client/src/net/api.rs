//! REST client for the OTI Connect backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a network error since these endpoints
//! are only meaningful in the browser, where the token lives.
//!
//! ERROR HANDLING
//! ==============
//! Every failure maps onto `session::ApiError` so the session layer can tell
//! a rejected token (401, clear it) from an unreachable backend (keep it).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use session::forms::{ProfileUpdate, SignInRequest, SignUpRequest};
use session::{ApiError, PortalApi, PortalConfig, User};

#[cfg(any(test, feature = "hydrate"))]
use session::forms::TokenResponse;
#[cfg(feature = "hydrate")]
use session::config::{CURRENT_USER_PATH, PROFILE_PATH, SIGN_IN_PATH, SIGN_UP_PATH};

/// [`PortalApi`] over `fetch`, rooted at the configured backend URL.
#[derive(Clone, Debug)]
pub struct HttpPortalApi {
    config: PortalConfig,
}

impl HttpPortalApi {
    pub fn new(config: PortalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// A `{ token }` body is only useful with a non-blank token in it.
#[cfg(any(test, feature = "hydrate"))]
fn issued_token(body: TokenResponse) -> Result<String, ApiError> {
    body.token
        .map(|token| token.trim().to_owned())
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::Decode("response did not include a token".to_owned()))
}

#[cfg(feature = "hydrate")]
fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(not(feature = "hydrate"))]
fn not_in_browser() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

/// Decode a 2xx JSON body, or classify the failure with `on_error`.
#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
    on_error: fn(u16, &str) -> ApiError,
) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(on_error(status, &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl PortalApi for HttpPortalApi {
    async fn sign_up(&self, request: &SignUpRequest) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.config.url(SIGN_UP_PATH))
                .json(request)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            issued_token(read_json(resp, ApiError::from_credential_status).await?)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(not_in_browser())
        }
    }

    async fn sign_in(&self, request: &SignInRequest) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.config.url(SIGN_IN_PATH))
                .json(request)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            issued_token(read_json(resp, ApiError::from_credential_status).await?)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(not_in_browser())
        }
    }

    async fn fetch_profile(&self, token: &str) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.config.url(CURRENT_USER_PATH))
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(network)?;
            read_json(resp, ApiError::from_status).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(not_in_browser())
        }
    }

    async fn exchange_oauth(&self, query: &str) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.config.oauth_exchange_url(query))
                .send()
                .await
                .map_err(network)?;
            issued_token(read_json(resp, ApiError::from_credential_status).await?)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = query;
            Err(not_in_browser())
        }
    }

    async fn update_profile(&self, token: &str, update: &ProfileUpdate) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::put(&self.config.url(PROFILE_PATH))
                .header("Authorization", &bearer(token))
                .json(update)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            read_json(resp, ApiError::from_status).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, update);
            Err(not_in_browser())
        }
    }
}
