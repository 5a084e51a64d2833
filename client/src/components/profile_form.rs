//! First-run profile completion: technical division, optional managerial
//! division and weekly availability.
//!
//! Shared by the sign-up flow, the OAuth callback page and the profile page.
//! Saving goes through `PortalAuth::update_profile`, which swaps the saved
//! profile into the session so guards and the header pick it up immediately.

use leptos::prelude::*;
use session::forms::ProfileDraft;
use session::{Availability, ManagerialDivision, TechnicalDivision};

use crate::state::auth::PortalAuth;

#[component]
pub fn ProfileCompletionForm(on_saved: Callback<()>) -> impl IntoView {
    let portal = expect_context::<PortalAuth>();
    let draft = RwSignal::new(ProfileDraft::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let update = match draft.get().finish() {
            Ok(update) => update,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Saving profile...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let portal = portal.clone();
            leptos::task::spawn_local(async move {
                match portal.update_profile(&update).await {
                    Ok(_) => on_saved.run(()),
                    Err(err) => {
                        info.set(err.user_message());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&portal, update);
    };

    view! {
        <form class="profile-form" on:submit=on_submit>
            <label class="profile-form__field">
                <span>"Technical division"</span>
                <select
                    class="profile-form__select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.main_division = value.parse::<TechnicalDivision>().ok());
                    }
                >
                    <option value="">"Select technical division"</option>
                    {TechnicalDivision::ALL
                        .iter()
                        .map(|division| view! { <option value=division.slug()>{division.label()}</option> })
                        .collect_view()}
                </select>
            </label>
            <label class="profile-form__field">
                <span>"Managerial division (optional)"</span>
                <select
                    class="profile-form__select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.managerial_division = value.parse::<ManagerialDivision>().ok());
                    }
                >
                    <option value="">"None"</option>
                    {ManagerialDivision::ALL
                        .iter()
                        .map(|division| view! { <option value=division.slug()>{division.label()}</option> })
                        .collect_view()}
                </select>
            </label>
            <fieldset class="profile-form__availability">
                <legend>"Availability"</legend>
                {Availability::ALL
                    .iter()
                    .map(|&slot| {
                        view! {
                            <label class="profile-form__check">
                                <input
                                    type="checkbox"
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        draft.update(|d| d.toggle_availability(slot, checked));
                                    }
                                />
                                {slot.label()}
                            </label>
                        }
                    })
                    .collect_view()}
            </fieldset>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                "Save Profile"
            </button>
            <Show when=move || !info.get().is_empty()>
                <p class="profile-form__message">{move || info.get()}</p>
            </Show>
        </form>
    }
}
