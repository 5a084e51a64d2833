//! Public landing page.

use leptos::prelude::*;
use session::SessionPhase;
use session::nav::{HOME_ROUTE, SIGN_IN_ROUTE, SIGN_UP_ROUTE};

use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let actions = move || match auth.with(AuthState::phase) {
        SessionPhase::Initializing => ().into_any(),
        SessionPhase::Authenticated(_) => view! {
            <a href=HOME_ROUTE class="btn btn--primary">"Go to dashboard"</a>
        }
        .into_any(),
        SessionPhase::Anonymous => view! {
            <a href=SIGN_IN_ROUTE class="btn btn--primary">"Sign In"</a>
            <a href=SIGN_UP_ROUTE class="btn">"Create an account"</a>
        }
        .into_any(),
    };

    view! {
        <section class="home-page">
            <h1>"OTI Connect"</h1>
            <p class="home-page__tagline">"Calendar, room booking and feedback for OTI members."</p>
            <div class="home-page__actions">{actions}</div>
        </section>
    }
}
