//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::main_nav::MainNav;
use crate::pages::{
    auth_callback::AuthCallbackPage, dashboard::DashboardPage, home::HomePage,
    internal_affairs::InternalAffairsPage, profile::ProfilePage, signin::SignInPage, signup::SignUpPage,
    unauthorized::UnauthorizedPage,
};
use crate::state::auth::provide_auth;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session contexts, starts the one-time session bootstrap and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = provide_auth();

    // Resolve the persisted token exactly once per page load.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        auth.initialize().await;
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = auth;

    view! {
        <Stylesheet id="leptos" href="/pkg/oti-connect.css"/>
        <Title text="OTI Connect"/>

        <Router>
            <MainNav/>
            <main class="portal-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("signin") view=SignInPage/>
                    <Route path=StaticSegment("signup") view=SignUpPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("callback")) view=AuthCallbackPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("internal-affairs") view=InternalAffairsPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                </Routes>
            </main>
        </Router>
    }
}
