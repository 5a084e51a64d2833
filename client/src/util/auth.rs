//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RequireAuth` and `RequireRole` apply identical redirect behavior: once the
//! session settles on a redirect decision, navigate exactly once.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use session::GuardDecision;
use session::guard::RedirectLatch;

use crate::state::auth::AuthState;
use crate::util::navigation::follow_redirect;

/// Navigate whenever `decide` settles on a redirect, at most once per mount.
pub fn install_guard_redirect<D, F>(auth: RwSignal<AuthState>, decide: D, navigate: F)
where
    D: Fn(&AuthState) -> GuardDecision + 'static,
    F: Fn(&str, NavigateOptions) + 'static,
{
    let latch = StoredValue::new(RedirectLatch::default());
    Effect::new(move || {
        let decision = auth.with(|state| decide(state));
        let target = latch.try_update_value(|latch| latch.take(&decision)).flatten();
        if let Some(target) = target {
            follow_redirect(&navigate, &target);
        }
    });
}
