//! Sign-in page supporting email + password and Google.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::forms::SignInRequest;
use session::nav::{HOME_ROUTE, SIGN_UP_ROUTE};

use crate::state::auth::{AuthState, PortalAuth};
use crate::util::navigation::hard_redirect;

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let portal = expect_context::<PortalAuth>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Signed-in visitors, including right after a successful submit, land on
    // the dashboard.
    Effect::new(move || {
        if auth.with(|state| state.is_settled() && state.user.is_some()) {
            navigate(HOME_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let google_url = portal.api().config().google_sign_in_url();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match SignInRequest::from_form(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let portal = portal.clone();
            leptos::task::spawn_local(async move {
                match portal.sign_in(&request).await {
                    Ok(()) => info.set(String::new()),
                    Err(err) => info.set(err.user_message()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&portal, request);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"OTI Connect"</h1>
                <p class="auth-card__subtitle">"Sign in to your account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <div class="auth-divider"></div>
                <button class="btn" type="button" on:click=move |_| hard_redirect(&google_url)>
                    "Continue with Google"
                </button>
                <p class="auth-card__footer">
                    "No account yet? "
                    <a href=SIGN_UP_ROUTE>"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
