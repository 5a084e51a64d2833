//! Route guard wrapper for signed-in-only pages.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::GuardDecision;
use session::guard::route_guard;

use crate::state::auth::AuthState;
use crate::util::auth::install_guard_redirect;

/// Render `children` once a user is resolved; show a placeholder while the
/// session is initializing; send anonymous visitors to sign-in.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_guard_redirect(auth, route_guard, use_navigate());
    guarded_view(auth, route_guard, children)
}

/// Shared rendering for guard wrappers. Nothing protected is rendered unless
/// the decision is `Render`.
pub(crate) fn guarded_view<D>(auth: RwSignal<AuthState>, decide: D, children: ChildrenFn) -> impl IntoView
where
    D: Fn(&AuthState) -> GuardDecision + Send + Sync + 'static,
{
    let decision = Memo::new(move |_| auth.with(|state| decide(state)));
    move || match decision.get() {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Wait => view! { <p class="guard-loading">"Loading..."</p> }.into_any(),
        GuardDecision::Redirect(_) => ().into_any(),
    }
}
