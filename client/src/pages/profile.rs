//! Profile page: the saved profile plus the completion form for changes.

use leptos::prelude::*;

use crate::components::profile_form::ProfileCompletionForm;
use crate::components::require_auth::RequireAuth;
use crate::pages::dashboard::profile_rows;
use crate::state::auth::AuthState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <RequireAuth>
            <ProfileContent/>
        </RequireAuth>
    }
}

#[component]
fn ProfileContent() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let saved = RwSignal::new(false);

    let rows = move || {
        auth.with(|state| state.user.as_ref().map(profile_rows).unwrap_or_default())
            .into_iter()
            .map(|(label, value)| {
                view! {
                    <div class="profile-page__row">
                        <dt>{label}</dt>
                        <dd>{value}</dd>
                    </div>
                }
            })
            .collect_view()
    };

    let on_saved = Callback::new(move |()| saved.set(true));

    view! {
        <section class="profile-page">
            <header class="profile-page__header">
                <h1>"Profile"</h1>
            </header>
            <dl class="profile-page__summary">{rows}</dl>
            <h2>"Update divisions and availability"</h2>
            <ProfileCompletionForm on_saved=on_saved/>
            <Show when=move || saved.get()>
                <p class="profile-page__message">"Profile saved."</p>
            </Show>
        </section>
    }
}
