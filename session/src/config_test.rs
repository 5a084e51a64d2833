use super::*;

#[test]
fn new_defaults_when_missing_or_blank() {
    assert_eq!(PortalConfig::new(None).api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(PortalConfig::new(Some("   ")).api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn new_trims_trailing_slashes() {
    let cfg = PortalConfig::new(Some("https://api.example.test/"));
    assert_eq!(cfg.api_base_url, "https://api.example.test");
}

#[test]
fn url_joins_base_and_path() {
    let cfg = PortalConfig::new(Some("https://api.example.test"));
    assert_eq!(cfg.url(CURRENT_USER_PATH), "https://api.example.test/auth/me");
    assert_eq!(cfg.google_sign_in_url(), "https://api.example.test/auth/google");
}

#[test]
fn oauth_exchange_url_keeps_query_verbatim() {
    let cfg = PortalConfig::new(Some("https://api.example.test"));
    assert_eq!(
        cfg.oauth_exchange_url("?code=4%2F0A&scope=email"),
        "https://api.example.test/auth/google/callback?code=4%2F0A&scope=email"
    );
    assert_eq!(cfg.oauth_exchange_url(""), "https://api.example.test/auth/google/callback");
}

// Only this test touches OTI_CONNECT_API_URL.
#[test]
fn from_env_reads_variable() {
    unsafe { std::env::set_var(API_URL_ENV, "https://env.example.test/") };
    assert_eq!(PortalConfig::from_env().api_base_url, "https://env.example.test");
    unsafe { std::env::remove_var(API_URL_ENV) };
}
