//! Route guard and role gate decisions.
//!
//! Both are pure functions of [`AuthState`]; the client turns the decision into
//! a placeholder, a redirect, or the wrapped view. Neither ever redirects while
//! the session is still resolving.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::context::{AuthState, SessionPhase};
use crate::nav::{Navigation, SIGN_IN_ROUTE, UNAUTHORIZED_ROUTE};
use crate::user::{Role, TechnicalDivision, User};

/// What a guarded view should do right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still resolving: show a placeholder, do not redirect.
    Wait,
    Redirect(Navigation),
    Render,
}

/// Allow-list for a role-gated view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessRule {
    /// Compare `user.role`.
    Roles(&'static [Role]),
    /// Compare `user.mainDivision`.
    MainDivisions(&'static [TechnicalDivision]),
}

impl AccessRule {
    /// Leadership and Internal Affairs staff.
    pub const INTERNAL_AFFAIRS: Self =
        Self::Roles(&[Role::DivisionHead, Role::Ceo, Role::Cfo, Role::InternalAffairs]);

    /// Exact membership; no hierarchy.
    #[must_use]
    pub fn admits(&self, user: &User) -> bool {
        match self {
            Self::Roles(allowed) => allowed.contains(&user.role),
            Self::MainDivisions(allowed) => user.main_division.is_some_and(|d| allowed.contains(&d)),
        }
    }
}

/// Must be signed in.
#[must_use]
pub fn route_guard(state: &AuthState) -> GuardDecision {
    match state.phase() {
        SessionPhase::Initializing => GuardDecision::Wait,
        SessionPhase::Anonymous => GuardDecision::Redirect(Navigation::soft(SIGN_IN_ROUTE)),
        SessionPhase::Authenticated(_) => GuardDecision::Render,
    }
}

/// Must be signed in and admitted by `rule`.
#[must_use]
pub fn role_gate(state: &AuthState, rule: AccessRule) -> GuardDecision {
    match state.phase() {
        SessionPhase::Initializing => GuardDecision::Wait,
        SessionPhase::Anonymous => GuardDecision::Redirect(Navigation::soft(SIGN_IN_ROUTE)),
        SessionPhase::Authenticated(user) if rule.admits(&user) => GuardDecision::Render,
        SessionPhase::Authenticated(_) => GuardDecision::Redirect(Navigation::soft(UNAUTHORIZED_ROUTE)),
    }
}

/// Fires a redirect at most once per mounted view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RedirectLatch {
    fired: bool,
}

impl RedirectLatch {
    /// Returns the navigation to perform, or `None` if nothing should happen
    /// (no redirect decided, or one was already issued).
    pub fn take(&mut self, decision: &GuardDecision) -> Option<Navigation> {
        match decision {
            GuardDecision::Redirect(target) if !self.fired => {
                self.fired = true;
                Some(target.clone())
            }
            _ => None,
        }
    }
}
