//! Free-text list input: type, press Enter, get a chip.

use leptos::prelude::*;

use crate::state::preferences::push_chip;

pub const MAX_CHIPS: usize = 20;

#[component]
pub fn ChipsInput(
    #[prop(into)] label: String,
    items: RwSignal<Vec<String>>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let pending = RwSignal::new(String::new());

    let add = move || {
        let raw = pending.get_untracked();
        if raw.trim().is_empty() {
            return;
        }
        items.update(|list| {
            push_chip(list, &raw, MAX_CHIPS);
        });
        pending.set(String::new());
    };

    view! {
        <div class="chips">
            <label class="chips__label">{label}</label>
            <ul class="chips__list">
                <For each=move || items.get() key=|item| item.clone() let:item>
                    <li class="chip">
                        <span>{item.clone()}</span>
                        <button
                            class="chip__remove"
                            type="button"
                            aria-label="Remove"
                            on:click=move |_| {
                                items.update(|list| list.retain(|x| *x != item));
                            }
                        >
                            "✕"
                        </button>
                    </li>
                </For>
            </ul>
            <input
                class="chips__input"
                type="text"
                placeholder=placeholder.unwrap_or_default()
                prop:value=move || pending.get()
                on:input=move |ev| pending.set(event_target_value(&ev))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        add();
                    }
                }
                on:blur=move |_| add()
            />
        </div>
    }
}
