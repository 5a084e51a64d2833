//! Member dashboard: the authenticated landing route.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use session::{Availability, User};

use crate::components::require_auth::RequireAuth;
use crate::state::auth::AuthState;

const NOT_SET: &str = "Not set";

fn availability_summary(slots: &[Availability]) -> String {
    if slots.is_empty() {
        return NOT_SET.to_owned();
    }
    slots.iter().map(|slot| slot.label()).collect::<Vec<_>>().join(", ")
}

/// Label/value rows for the profile summary card.
pub(crate) fn profile_rows(user: &User) -> Vec<(&'static str, String)> {
    vec![
        ("Email", user.email.clone()),
        ("Role", user.role.to_string()),
        ("Technical division", user.main_division.map_or_else(|| NOT_SET.to_owned(), |d| d.label().to_owned())),
        (
            "Managerial division",
            user.managerial_division.map_or_else(|| NOT_SET.to_owned(), |d| d.label().to_owned()),
        ),
        ("Availability", availability_summary(&user.available_times)),
    ]
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <DashboardContent/>
        </RequireAuth>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let greeting = move || {
        auth.with(|state| state.user.as_ref().map_or_else(|| "Welcome".to_owned(), |u| format!("Welcome, {}", u.name)))
    };
    let rows = move || {
        auth.with(|state| state.user.as_ref().map(profile_rows).unwrap_or_default())
            .into_iter()
            .map(|(label, value)| {
                view! {
                    <div class="dashboard-page__row">
                        <dt>{label}</dt>
                        <dd>{value}</dd>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <section class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{greeting}</h1>
            </header>
            <dl class="dashboard-page__profile">{rows}</dl>
        </section>
    }
}
