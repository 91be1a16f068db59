//! Profile: name, email and gift preferences in one form.

use leptos::prelude::*;

use crate::app::Services;
use crate::components::chips_input::ChipsInput;
use crate::components::loading::Loading;
use crate::net::types::Preferences;
use crate::state::notice::NoticeState;
use crate::state::preferences::ProfileForm;
use crate::state::session::Session;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let services = expect_context::<Services>();
    let session = expect_context::<RwSignal<Session>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let redirect = super::use_redirect();

    let (initial_name, initial_email) =
        session.get_untracked().current_user.map(|u| (u.name, u.email)).unwrap_or_default();
    let name = RwSignal::new(initial_name);
    let email = RwSignal::new(initial_email);
    let likes = RwSignal::new(Vec::<String>::new());
    let dislikes = RwSignal::new(Vec::<String>::new());
    let allergies = RwSignal::new(Vec::<String>::new());
    let color = RwSignal::new(String::new());
    let animal = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);

    {
        let services = services.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let outcome = crate::state::preferences::load_own_preferences(&services.api, &services.session).await;
            if let Some(prefs) = super::resolve(outcome, notices, redirect) {
                likes.set(prefs.likes);
                dislikes.set(prefs.dislikes);
                allergies.set(prefs.allergies);
                color.set(prefs.favorite_color.unwrap_or_default());
                animal.set(prefs.favorite_animal.unwrap_or_default());
            }
            loading.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = services;
            loading.set(false);
        }
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = ProfileForm {
            name: name.get(),
            email: email.get(),
            preferences: Preferences {
                likes: likes.get(),
                dislikes: dislikes.get(),
                allergies: allergies.get(),
                favorite_color: Some(color.get().trim().to_owned()).filter(|c| !c.is_empty()),
                favorite_animal: Some(animal.get().trim().to_owned()).filter(|a| !a.is_empty()),
                bio: None,
            },
        };
        if let Err(msg) = form.validate() {
            error.set(Some(msg));
            return;
        }
        error.set(None);
        busy.set(true);

        let services = services.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let outcome = crate::state::preferences::save_profile(&services.api, &services.session, &form).await;
            busy.set(false);
            if super::resolve(outcome, notices, redirect).is_some() {
                crate::components::notice_banner::notify(
                    notices,
                    crate::state::notice::NoticeKind::Success,
                    "Profile saved.",
                );
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = (services, form);
    };

    view! {
        <div class="profile-page">
            <h1>"Your profile"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <Loading/> }>
                <form class="prefs-form" on:submit=on_submit.clone()>
                    <label class="prefs-form__label">
                        "Name"
                        <input
                            class="prefs-form__input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="prefs-form__label">
                        "Email"
                        <input
                            class="prefs-form__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <ChipsInput label="Likes" items=likes/>
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
                    <Show when=move || error.get().is_some()>
                        <p class="prefs-form__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Save"
                    </button>
                </form>
            </Show>
        </div>
    }
}
