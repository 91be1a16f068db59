//! Toast-style notices rendered above the routed page.

use leptos::prelude::*;

use crate::state::notice::{NoticeKind, NoticeState};

const AUTO_DISMISS_MS: u32 = 4000;

/// Queue a notice and schedule its removal.
pub fn notify(notices: RwSignal<NoticeState>, kind: NoticeKind, text: impl Into<String>) {
    let mut id = 0;
    notices.update(|n| id = n.push(kind, text));
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        crate::util::browser::sleep(AUTO_DISMISS_MS).await;
        notices.update(|n| n.dismiss(id));
    });
    #[cfg(not(feature = "csr"))]
    let _ = (id, AUTO_DISMISS_MS);
}

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notices" aria-live="polite">
            <For each=move || notices.get().items key=|n| n.id let:notice>
                <div class=format!("notice {}", notice.kind.css_modifier())>
                    <span class="notice__text">{notice.text.clone()}</span>
                    <button
                        class="notice__close"
                        aria-label="Dismiss"
                        on:click=move |_| notices.update(|n| n.dismiss(notice.id))
                    >
                        "✕"
                    </button>
                </div>
            </For>
        </div>
    }
}
