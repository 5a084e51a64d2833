//! Carrying out a [`Navigation`] in the browser.
//!
//! Soft targets stay inside the router; hard targets (the Google sign-in start
//! URL) leave the app with a full page load.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos_router::NavigateOptions;
use session::Navigation;

/// Full page load to `url`. No-op outside the browser.
pub fn hard_redirect(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(url).is_err() {
                log::warn!("hard redirect to {url} failed");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Follow a redirect, replacing the current history entry on soft targets so
/// the back button does not bounce through the guard again.
pub fn follow_redirect<F>(navigate: &F, target: &Navigation)
where
    F: Fn(&str, NavigateOptions),
{
    match target {
        Navigation::Soft(path) => navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() }),
        Navigation::Hard(url) => hard_redirect(url),
    }
}
