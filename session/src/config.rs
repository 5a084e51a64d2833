//! Backend location and endpoint paths.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Environment variable naming the backend base URL.
pub const API_URL_ENV: &str = "OTI_CONNECT_API_URL";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

pub const SIGN_UP_PATH: &str = "/auth/signup";
pub const SIGN_IN_PATH: &str = "/auth/signin";
pub const GOOGLE_START_PATH: &str = "/auth/google";
pub const GOOGLE_CALLBACK_PATH: &str = "/auth/google/callback";
pub const CURRENT_USER_PATH: &str = "/auth/me";
pub const PROFILE_PATH: &str = "/profile";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortalConfig {
    pub api_base_url: String,
}

impl PortalConfig {
    /// Build from an optional raw base URL; blank falls back to the default.
    #[must_use]
    pub fn new(raw: Option<&str>) -> Self {
        let api_base_url = raw
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { api_base_url }
    }

    /// Read `OTI_CONNECT_API_URL` from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(std::env::var(API_URL_ENV).ok().as_deref())
    }

    /// Use the value baked in at compile time. The WASM bundle has no process
    /// environment, so this is what the browser build calls.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(option_env!("OTI_CONNECT_API_URL"))
    }

    /// Absolute URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }

    /// Where the browser goes (full page load) to start Google sign-in.
    #[must_use]
    pub fn google_sign_in_url(&self) -> String {
        self.url(GOOGLE_START_PATH)
    }

    /// Callback exchange URL carrying the provider's query string verbatim.
    #[must_use]
    pub fn oauth_exchange_url(&self, query: &str) -> String {
        let query = query.trim_start_matches('?');
        if query.is_empty() {
            self.url(GOOGLE_CALLBACK_PATH)
        } else {
            format!("{}?{query}", self.url(GOOGLE_CALLBACK_PATH))
        }
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self::new(None)
    }
}
