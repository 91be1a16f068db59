use leptos::prelude::*;

use crate::net::types::Preferences;

/// Read-only view of someone's gift preferences, shown as a dialog.
#[component]
pub fn PreferencesCard(#[prop(into)] name: String, prefs: Preferences, on_close: Callback<()>) -> impl IntoView {
    let row = |title: &'static str, values: Vec<String>| {
        let text = if values.is_empty() { "Nothing listed".to_owned() } else { values.join(", ") };
        view! {
            <div class="prefs-card__row">
                <span class="prefs-card__title">{title}</span>
                <span class="prefs-card__value">{text}</span>
            </div>
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog prefs-card" on:click=move |ev| ev.stop_propagation()>
                <h2>{format!("{name}'s preferences")}</h2>
                {row("Likes", prefs.likes)}
                {row("Dislikes", prefs.dislikes)}
                {row("Allergies", prefs.allergies)}
                {row("Favorite color", prefs.favorite_color.into_iter().collect())}
                {row("Favorite animal", prefs.favorite_animal.into_iter().collect())}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
