//! Landing page for signed-in users the role gate turned away.

use leptos::prelude::*;
use session::nav::HOME_ROUTE;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <section class="unauthorized-page">
            <h1>"Access Denied"</h1>
            <p>"You do not have permission to view this page."</p>
            <a href=HOME_ROUTE class="btn">"Back to dashboard"</a>
        </section>
    }
}
