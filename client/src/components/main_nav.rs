//! Site header: brand, role-aware links and the account controls.
//!
//! Links come from `session::nav::nav_items`, so the Internal Affairs entry is
//! shown under exactly the same rule the role gate enforces.

#[cfg(test)]
#[path = "main_nav_test.rs"]
mod main_nav_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use session::SessionPhase;
use session::nav::{ROOT_ROUTE, SIGN_IN_ROUTE, SIGN_UP_ROUTE, nav_items};

use crate::state::auth::{AuthState, PortalAuth};
use crate::util::navigation::hard_redirect;

/// Whether `href` should be highlighted for the current `path`.
fn is_active(path: &str, href: &str) -> bool {
    path == href || path.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn MainNav() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let portal = expect_context::<PortalAuth>();
    let navigate = use_navigate();
    let location = use_location();
    let menu_open = RwSignal::new(false);

    // Collapse the mobile menu after every route change.
    let pathname = location.pathname;
    Effect::new(move || {
        pathname.track();
        menu_open.set(false);
    });

    let google_url = portal.api().config().google_sign_in_url();

    let on_sign_out = move |_: leptos::ev::MouseEvent| {
        portal.logout();
        menu_open.set(false);
        navigate(SIGN_IN_ROUTE, NavigateOptions::default());
    };

    let links = move || {
        let path = pathname.get();
        nav_items(&auth.get())
            .into_iter()
            .map(|item| {
                let class = if is_active(&path, item.href) {
                    "main-nav__link main-nav__link--active"
                } else {
                    "main-nav__link"
                };
                view! { <a href=item.href class=class>{item.label}</a> }
            })
            .collect_view()
    };

    let account = move || match auth.get().phase() {
        SessionPhase::Initializing => ().into_any(),
        SessionPhase::Authenticated(user) => {
            let on_sign_out = on_sign_out.clone();
            view! {
                <div class="main-nav__account">
                    <span class="main-nav__avatar" title=user.name.clone()>{user.initials()}</span>
                    <button class="btn" on:click=on_sign_out>"Sign Out"</button>
                </div>
            }
            .into_any()
        }
        SessionPhase::Anonymous => {
            let google_url = google_url.clone();
            view! {
                <div class="main-nav__account">
                    <button class="btn btn--primary" on:click=move |_| hard_redirect(&google_url)>
                        "Sign In"
                    </button>
                    <a href=SIGN_UP_ROUTE class="btn">"Sign Up"</a>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <header class="main-nav">
            <a href=ROOT_ROUTE class="main-nav__brand">"OTI Connect"</a>
            <button
                class="main-nav__toggle"
                aria-label="Toggle menu"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "Menu"
            </button>
            <nav class=move || if menu_open.get() { "main-nav__links main-nav__links--open" } else { "main-nav__links" }>
                {links}
            </nav>
            {account}
        </header>
    }
}
