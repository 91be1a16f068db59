//! Join a game by its short code.
//!
//! The code may arrive as `/game/join/:code` or `/game/join?code=`; the path
//! parameter wins when both are present.

#[cfg(test)]
#[path = "join_game_test.rs"]
mod join_game_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::app::Services;
use crate::routes::AppRoute;
use crate::state::games::JoinResult;
use crate::state::notice::NoticeState;

pub const MIN_CODE_LEN: usize = 4;
pub const MAX_CODE_LEN: usize = 6;

/// Keep ASCII alphanumerics, uppercase, cap at `MAX_CODE_LEN`.
pub fn format_code(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_alphanumeric).map(|c| c.to_ascii_uppercase()).take(MAX_CODE_LEN).collect()
}

pub fn validate_code(code: &str) -> Result<(), &'static str> {
    if code.len() < MIN_CODE_LEN {
        return Err("Codes are at least 4 characters.");
    }
    Ok(())
}

/// Pick the pre-filled code from the path parameter or the query string.
pub fn initial_code(param: Option<String>, query: Option<String>) -> String {
    param.or(query).map(|c| format_code(&c)).unwrap_or_default()
}

pub fn join_message(result: &JoinResult) -> &'static str {
    match result {
        JoinResult::Joined { .. } => "You joined the game!",
        JoinResult::AlreadyMember { .. } => "You are already in this game.",
    }
}

#[component]
pub fn JoinGamePage() -> impl IntoView {
    let services = expect_context::<Services>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let redirect = super::use_redirect();
    let params = use_params_map();
    let query = use_query_map();

    let code = RwSignal::new(initial_code(
        params.with_untracked(|p| p.get("code")),
        query.with_untracked(|q| q.get("code")),
    ));
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let value = code.get();
        if let Err(msg) = validate_code(&value) {
            error.set(Some(msg.to_owned()));
            return;
        }
        error.set(None);
        busy.set(true);

        let services = services.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let outcome = crate::state::games::join_by_code(&services.api, &services.session, &value).await;
            busy.set(false);
            match outcome {
                crate::state::request::ScreenOutcome::Failed(err) => error.set(Some(err.to_string())),
                other => {
                    if let Some(result) = super::resolve(other, notices, redirect) {
                        crate::components::notice_banner::notify(
                            notices,
                            crate::state::notice::NoticeKind::Success,
                            join_message(&result),
                        );
                        let (JoinResult::Joined { code } | JoinResult::AlreadyMember { code }) = result;
                        redirect.set(Some(AppRoute::Lobby { code }));
                    }
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = (services, value, notices, redirect);
    };

    view! {
        <div class="join-game-page">
            <h1>"Join a game"</h1>
            <form class="game-form" on:submit=on_submit>
                <input
                    class="game-form__input game-form__input--code"
                    type="text"
                    maxlength="6"
                    placeholder="ABC123"
                    prop:value=move || code.get()
                    on:input=move |ev| code.set(format_code(&event_target_value(&ev)))
                />
                <Show when=move || error.get().is_some()>
                    <p class="game-form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="game-form__actions">
                    <a class="btn" href=AppRoute::Dashboard.path()>
                        "Cancel"
                    </a>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Join"
                    </button>
                </div>
            </form>
        </div>
    }
}
