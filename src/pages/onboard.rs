//! Onboarding: collect gift preferences once after signup.
//!
//! The unsent form is mirrored to storage on every change so a reload does
//! not lose it.

#[cfg(test)]
#[path = "onboard_test.rs"]
mod onboard_test;

use leptos::prelude::*;

use crate::app::Services;
use crate::components::chips_input::ChipsInput;
use crate::state::notice::NoticeState;
use crate::state::preferences::{PreferenceErrors, PreferencesDraft};

/// Pause before leaving so the success notice is seen.
pub const REDIRECT_DELAY_MS: u32 = 1200;

/// Human-readable list of missing fields.
pub fn error_lines(errors: PreferenceErrors) -> Vec<&'static str> {
    let mut lines = Vec::new();
    if errors.likes {
        lines.push("Add at least one thing you like.");
    }
    if errors.color {
        lines.push("Favorite color is required.");
    }
    if errors.animal {
        lines.push("Favorite animal is required.");
    }
    lines
}

#[component]
pub fn OnboardPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let redirect = super::use_redirect();

    let initial = PreferencesDraft::load(services.storage.as_ref());
    let likes = RwSignal::new(initial.likes);
    let dislikes = RwSignal::new(initial.dislikes);
    let allergies = RwSignal::new(initial.allergies);
    let color = RwSignal::new(initial.color);
    let animal = RwSignal::new(initial.animal);
    let errors = RwSignal::new(None::<PreferenceErrors>);
    let busy = RwSignal::new(false);

    let draft = move || PreferencesDraft {
        likes: likes.get(),
        dislikes: dislikes.get(),
        allergies: allergies.get(),
        color: color.get(),
        animal: animal.get(),
    };

    let storage = services.storage.clone();
    Effect::new(move || {
        let current = draft();
        if !busy.get_untracked() {
            current.save(storage.as_ref());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let current = draft();
        if let Some(found) = current.validate() {
            errors.set(Some(found));
            return;
        }
        errors.set(None);
        busy.set(true);

        let services = services.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let outcome = crate::state::preferences::submit_onboarding(
                &services.api,
                &services.session,
                services.storage.as_ref(),
                &current,
            )
            .await;
            if super::resolve(outcome, notices, redirect).is_some() {
                crate::components::notice_banner::notify(
                    notices,
                    crate::state::notice::NoticeKind::Success,
                    "Preferences saved!",
                );
                crate::util::browser::sleep(REDIRECT_DELAY_MS).await;
                redirect.set(Some(crate::routes::AppRoute::Dashboard));
            } else {
                busy.set(false);
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = (services, redirect, current, notices);
    };

    view! {
        <div class="onboard-page">
            <h1>"Your gift preferences"</h1>
            <p class="onboard-page__hint">"Help your Secret Santa pick something you will love."</p>
            <form class="prefs-form" on:submit=on_submit>
                <ChipsInput label="Likes" items=likes placeholder="Type and press Enter"/>
                <ChipsInput label="Dislikes" items=dislikes/>
                <ChipsInput label="Allergies" items=allergies/>
                <label class="prefs-form__label">
                    "Favorite color"
                    <input
                        class="prefs-form__input"
                        type="text"
                        prop:value=move || color.get()
                        on:input=move |ev| color.set(event_target_value(&ev))
                    />
                </label>
                <label class="prefs-form__label">
                    "Favorite animal"
                    <input
                        class="prefs-form__input"
                        type="text"
                        prop:value=move || animal.get()
                        on:input=move |ev| animal.set(event_target_value(&ev))
                    />
                </label>
                <ul class="prefs-form__errors">
                    {move || {
                        errors
                            .get()
                            .map(error_lines)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|line| view! { <li>{line}</li> })
                            .collect::<Vec<_>>()
                    }}
                </ul>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Save preferences"
                </button>
            </form>
        </div>
    }
}
