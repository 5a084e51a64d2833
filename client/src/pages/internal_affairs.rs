//! Internal Affairs workspace, restricted to leadership and IA staff.

use leptos::prelude::*;
use session::AccessRule;

use crate::components::require_role::RequireRole;
use crate::state::auth::AuthState;

#[component]
pub fn InternalAffairsPage() -> impl IntoView {
    view! {
        <RequireRole rule=AccessRule::INTERNAL_AFFAIRS>
            <InternalAffairsContent/>
        </RequireRole>
    }
}

#[component]
fn InternalAffairsContent() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let viewer = move || auth.with(|state| state.user.as_ref().map(|u| format!("Signed in as {} ({})", u.name, u.role)));

    view! {
        <section class="internal-affairs-page">
            <header class="internal-affairs-page__header">
                <h1>"Internal Affairs"</h1>
                <p class="internal-affairs-page__viewer">{viewer}</p>
            </header>
            <p>"Member records, division rosters and feedback escalations are managed here."</p>
        </section>
    }
}
