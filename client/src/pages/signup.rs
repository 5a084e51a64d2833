//! Two-step registration: credentials, then the profile-completion form for
//! accounts that still lack a technical division.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::forms::SignUpRequest;
use session::nav::{HOME_ROUTE, SIGN_IN_ROUTE};

use crate::components::profile_form::ProfileCompletionForm;
use crate::state::auth::PortalAuth;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SignUpStep {
    Credentials,
    Profile,
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let portal = expect_context::<PortalAuth>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let step = RwSignal::new(SignUpStep::Credentials);

    let navigate_home = navigate.clone();
    let on_saved = Callback::new(move |()| navigate_home(HOME_ROUTE, NavigateOptions::default()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match SignUpRequest::from_form(&name.get(), &email.get(), &password.get(), &confirm.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let portal = portal.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match portal.sign_up(&request).await {
                    Ok(()) => {
                        info.set(String::new());
                        let incomplete = portal.state().user.as_ref().is_some_and(session::User::needs_profile_completion);
                        if incomplete {
                            step.set(SignUpStep::Profile);
                        } else {
                            navigate(HOME_ROUTE, NavigateOptions::default());
                        }
                    }
                    Err(err) => info.set(err.user_message()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&portal, &navigate, request);
    };

    let credentials = move || {
        let on_submit = on_submit.clone();
        view! {
            <form class="auth-form" on:submit=on_submit>
                <input
                    class="auth-input"
                    type="text"
                    placeholder="Full name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
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
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Confirm password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Create Account"
                </button>
            </form>
            <p class="auth-card__footer">
                "Already registered? "
                <a href=SIGN_IN_ROUTE>"Sign in"</a>
            </p>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Join OTI Connect"</h1>
                {move || match step.get() {
                    SignUpStep::Credentials => credentials().into_any(),
                    SignUpStep::Profile => {
                        view! {
                            <p class="auth-card__subtitle">"Tell us where you work"</p>
                            <ProfileCompletionForm on_saved=on_saved/>
                        }
                            .into_any()
                    }
                }}
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
