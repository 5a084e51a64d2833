//! Role gate wrapper for pages restricted to an allow-list.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::AccessRule;
use session::guard::role_gate;

use crate::components::require_auth::guarded_view;
use crate::state::auth::AuthState;
use crate::util::auth::install_guard_redirect;

/// Render `children` only for users `rule` admits. Signed-in users outside
/// the allow-list go to `/unauthorized`; anonymous visitors go to sign-in.
#[component]
pub fn RequireRole(rule: AccessRule, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_guard_redirect(auth, move |state| role_gate(state, rule), use_navigate());
    guarded_view(auth, move |state| role_gate(state, rule), children)
}
