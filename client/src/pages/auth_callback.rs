//! Landing page for the Google sign-in redirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider returns here with either `?token=` or its own parameters for
//! the backend to exchange. The page turns that into a session, then either
//! goes to the dashboard, shows the profile-completion form for a new account,
//! or shows the error briefly before returning to sign-in. Work that finishes
//! after the visitor has left the page is dropped.

#[cfg(test)]
#[path = "auth_callback_test.rs"]
mod auth_callback_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use session::nav::HOME_ROUTE;
use session::oauth::CallbackOutcome;

use crate::components::profile_form::ProfileCompletionForm;
use crate::state::auth::PortalAuth;

#[derive(Clone, Debug, PartialEq, Eq)]
enum CallbackView {
    Working,
    CompleteProfile,
    Failed(String),
}

/// What to show for an outcome that keeps the visitor on this page.
fn view_for(outcome: &CallbackOutcome) -> Option<CallbackView> {
    match outcome {
        CallbackOutcome::Home => None,
        CallbackOutcome::CompleteProfile(_) => Some(CallbackView::CompleteProfile),
        CallbackOutcome::Failed(message) => Some(CallbackView::Failed(message.clone())),
    }
}

fn replace() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let portal = expect_context::<PortalAuth>();
    let navigate = use_navigate();
    let location = use_location();
    let status = RwSignal::new(CallbackView::Working);

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        use session::nav::SIGN_IN_ROUTE;
        use session::oauth::{CALLBACK_ERROR_DISPLAY, complete_callback};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        let query = location.search.get_untracked();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = complete_callback(&portal, &query).await;
            if !alive_task.load(Ordering::Relaxed) {
                return;
            }
            match view_for(&outcome) {
                None => navigate(HOME_ROUTE, replace()),
                Some(CallbackView::Failed(message)) => {
                    status.set(CallbackView::Failed(message));
                    gloo_timers::future::sleep(CALLBACK_ERROR_DISPLAY).await;
                    if alive_task.load(Ordering::Relaxed) {
                        navigate(SIGN_IN_ROUTE, replace());
                    }
                }
                Some(next) => status.set(next),
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (&portal, &location);

    let on_saved = Callback::new(move |()| navigate(HOME_ROUTE, replace()));

    view! {
        <div class="auth-page">
            <div class="auth-card">
                {move || match status.get() {
                    CallbackView::Working => {
                        view! { <p class="auth-card__subtitle">"Completing sign-in..."</p> }.into_any()
                    }
                    CallbackView::CompleteProfile => {
                        view! {
                            <h1>"Complete your profile"</h1>
                            <ProfileCompletionForm on_saved=on_saved/>
                        }
                            .into_any()
                    }
                    CallbackView::Failed(message) => {
                        view! {
                            <p class="auth-message auth-message--error">{message}</p>
                            <p class="auth-card__subtitle">"Returning to sign in..."</p>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
