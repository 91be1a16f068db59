//! New game form.

#[cfg(test)]
#[path = "create_game_test.rs"]
mod create_game_test;

use leptos::prelude::*;

use crate::app::Services;
use crate::components::chips_input::ChipsInput;
use crate::net::types::CreateGameRequest;
use crate::routes::AppRoute;
use crate::state::notice::NoticeState;
use crate::state::preferences::clean_list;

pub const DEFAULT_WEEKS: &str = "4";
pub const DEFAULT_REMINDER_DAYS: &str = "2";

/// Raw form fields as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateGameForm {
    pub name: String,
    pub weeks: String,
    pub reminder_days: String,
    pub players: Vec<String>,
}

impl CreateGameForm {
    /// Validate and build the request body.
    pub fn to_request(&self) -> Result<CreateGameRequest, &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Game name is required.");
        }
        let weeks = match self.weeks.trim().parse::<u32>() {
            Ok(w) if w >= 1 => w,
            _ => return Err("Duration must be at least 1 week."),
        };
        let Ok(reminder_days) = self.reminder_days.trim().parse::<u32>() else {
            return Err("Reminder days must be 0 or more.");
        };
        let players = clean_list(&self.players);
        if players.is_empty() {
            return Err("Add at least one player.");
        }
        Ok(CreateGameRequest { name: name.to_owned(), weeks, reminder_days, players })
    }
}

#[component]
pub fn CreateGamePage() -> impl IntoView {
    let services = expect_context::<Services>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let redirect = super::use_redirect();

    let name = RwSignal::new(String::new());
    let weeks = RwSignal::new(DEFAULT_WEEKS.to_owned());
    let reminder_days = RwSignal::new(DEFAULT_REMINDER_DAYS.to_owned());
    let players = RwSignal::new(Vec::<String>::new());
    let error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = CreateGameForm {
            name: name.get(),
            weeks: weeks.get(),
            reminder_days: reminder_days.get(),
            players: players.get(),
        };
        let request = match form.to_request() {
            Ok(request) => request,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        let services = services.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let outcome = crate::state::games::create_game(&services.api, &services.session, &request).await;
            busy.set(false);
            if let Some(game) = super::resolve(outcome, notices, redirect) {
                log::info!("created game {}", game.id);
                redirect.set(Some(AppRoute::Lobby { code: game.code }));
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = (services, request, notices, redirect);
    };

    view! {
        <div class="create-game-page">
            <h1>"Create a game"</h1>
            <form class="game-form" on:submit=on_submit>
                <label class="game-form__label">
                    "Name"
                    <input
                        class="game-form__input"
                        type="text"
                        placeholder="Office party 2026"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="game-form__label">
                    "Duration (weeks)"
                    <input
                        class="game-form__input"
                        type="number"
                        min="1"
                        prop:value=move || weeks.get()
                        on:input=move |ev| weeks.set(event_target_value(&ev))
                    />
                </label>
                <label class="game-form__label">
                    "Reminder (days before)"
                    <input
                        class="game-form__input"
                        type="number"
                        min="0"
                        prop:value=move || reminder_days.get()
                        on:input=move |ev| reminder_days.set(event_target_value(&ev))
                    />
                </label>
                <ChipsInput label="Players" items=players placeholder="Player name, then Enter"/>
                <Show when=move || error.get().is_some()>
                    <p class="game-form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="game-form__actions">
                    <a class="btn" href=AppRoute::Dashboard.path()>
                        "Cancel"
                    </a>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Create"
                    </button>
                </div>
            </form>
        </div>
    }
}
