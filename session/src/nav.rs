//! In-app routes, navigation primitives and role-gated nav links.
//!
//! DESIGN
//! ======
//! Leaving for the identity provider needs a full page load; everything else is
//! an in-app router push. The two are separate variants so call sites cannot
//! mix them up.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::context::AuthState;
use crate::guard::AccessRule;

pub const ROOT_ROUTE: &str = "/";
pub const SIGN_IN_ROUTE: &str = "/signin";
pub const SIGN_UP_ROUTE: &str = "/signup";
pub const CALLBACK_ROUTE: &str = "/auth/callback";
pub const HOME_ROUTE: &str = "/dashboard";
pub const INTERNAL_AFFAIRS_ROUTE: &str = "/internal-affairs";
pub const PROFILE_ROUTE: &str = "/profile";
pub const UNAUTHORIZED_ROUTE: &str = "/unauthorized";

/// Every path the router declares.
pub const APP_ROUTES: &[&str] = &[
    ROOT_ROUTE,
    SIGN_IN_ROUTE,
    SIGN_UP_ROUTE,
    CALLBACK_ROUTE,
    HOME_ROUTE,
    INTERNAL_AFFAIRS_ROUTE,
    PROFILE_ROUTE,
    UNAUTHORIZED_ROUTE,
];

/// A navigation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Router push within the app.
    Soft(String),
    /// Full page load, possibly to another origin.
    Hard(String),
}

impl Navigation {
    #[must_use]
    pub fn soft(path: &str) -> Self {
        Self::Soft(path.to_owned())
    }

    #[must_use]
    pub fn hard(url: &str) -> Self {
        Self::Hard(url.to_owned())
    }

    #[must_use]
    pub fn target(&self) -> &str {
        match self {
            Self::Soft(target) | Self::Hard(target) => target,
        }
    }
}

/// A header navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

const DASHBOARD_LINK: NavItem = NavItem { href: HOME_ROUTE, label: "Dashboard" };
const INTERNAL_AFFAIRS_LINK: NavItem = NavItem { href: INTERNAL_AFFAIRS_ROUTE, label: "Internal Affairs" };
const PROFILE_LINK: NavItem = NavItem { href: PROFILE_ROUTE, label: "Profile" };

/// Links shown to the current visitor. Empty until a user is resolved.
#[must_use]
pub fn nav_items(state: &AuthState) -> Vec<NavItem> {
    let Some(user) = state.user.as_ref().filter(|_| state.is_settled()) else {
        return Vec::new();
    };
    let mut items = vec![DASHBOARD_LINK];
    if AccessRule::INTERNAL_AFFAIRS.admits(user) {
        items.push(INTERNAL_AFFAIRS_LINK);
    }
    items.push(PROFILE_LINK);
    items
}
