//! Dashboard: the caller's games with join/create entry points.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. Fetches `my games` once on mount; a re-fetch
//! (after leaving a game) supersedes any fetch still in flight, and screen
//! teardown cancels the outstanding one.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::app::Services;
use crate::components::loading::Loading;
use crate::components::onboarding_alert::OnboardingAlert;
use crate::net::types::Game;
use crate::routes::AppRoute;
use crate::state::games::GamesState;
use crate::state::notice::NoticeState;
use crate::state::session::Session;
use crate::util::latest::RequestGeneration;

/// Whether to nag about preferences.
pub fn needs_onboarding(session: &Session) -> bool {
    session.current_user.as_ref().is_some_and(|u| !u.onboarded)
}

/// Where a game card leads: admins land on the admin view.
pub fn game_link(game: &Game, user_id: &str) -> AppRoute {
    if game.is_admin(user_id) {
        AppRoute::LobbyAdmin { code: game.code.clone() }
    } else {
        AppRoute::Lobby { code: game.code.clone() }
    }
}

pub fn leave_prompt(game_name: &str) -> String {
    format!("Leave \"{game_name}\"? You will need the code to join again.")
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let session = expect_context::<RwSignal<Session>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let redirect = super::use_redirect();
    let games = RwSignal::new(GamesState { loading: true, ..GamesState::default() });
    let generation = RequestGeneration::new();

    let reload = {
        let services = services.clone();
        let generation = generation.clone();
        move || {
            games.update(|g| g.loading = true);
            let services = services.clone();
            let generation = generation.clone();
            #[cfg(feature = "csr")]
            leptos::task::spawn_local(async move {
                let outcome =
                    crate::state::games::load_my_games(&services.api, &services.session, &generation).await;
                let mut route = None;
                games.update(|g| route = g.apply(outcome));
                if route.is_some() {
                    redirect.set(route);
                }
            });
            #[cfg(not(feature = "csr"))]
            let _ = (services, generation, redirect);
        }
    };
    reload();

    {
        let generation = generation.clone();
        on_cleanup(move || generation.cancel());
    }

    let on_leave = Callback::new({
        let services = services.clone();
        let reload = reload.clone();
        move |game: Game| {
            if !crate::util::browser::confirm(&leave_prompt(&game.name)) {
                return;
            }
            let services = services.clone();
            let reload = reload.clone();
            #[cfg(feature = "csr")]
            leptos::task::spawn_local(async move {
                let outcome = crate::state::games::leave_game(&services.api, &services.session, &game.id).await;
                if super::resolve(outcome, notices, redirect).is_some() {
                    games.update(|g| g.remove(&game.id));
                    crate::components::notice_banner::notify(
                        notices,
                        crate::state::notice::NoticeKind::Info,
                        format!("You left {}.", game.name),
                    );
                    reload();
                }
            });
            #[cfg(not(feature = "csr"))]
            let _ = (services, reload, game);
        }
    });

    let user_id = move || session.get().user_id().to_owned();

    view! {
        <div class="dashboard-page">
            <Show when=move || needs_onboarding(&session.get())>
                <OnboardingAlert/>
            </Show>
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__title">"My games"</span>
                <span class="toolbar__spacer"></span>
                <a class="btn" href=AppRoute::JoinGame { code: None }.path()>
                    "Join game"
                </a>
                <a class="btn btn--primary" href=AppRoute::CreateGame.path()>
                    "+ New game"
                </a>
            </header>
            <Show when=move || games.get().error.is_some()>
                <p class="dashboard-page__error">{move || games.get().error.unwrap_or_default()}</p>
            </Show>
            <Show when=move || !games.get().loading fallback=|| view! { <Loading label="Loading games..."/> }>
                <Show
                    when=move || !games.get().items.is_empty()
                    fallback=|| view! { <p class="dashboard-page__empty">"You are not in any games yet."</p> }
                >
                    <div class="dashboard-page__cards">
                        <For each=move || games.get().items key=|g| g.id.clone() let:game>
                            <GameCard game=game.clone() href=game_link(&game, &user_id()).path() on_leave=on_leave/>
                        </For>
                    </div>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn GameCard(game: Game, href: String, on_leave: Callback<Game>) -> impl IntoView {
    let players = game.players.len();
    let name = game.name.clone();
    let code = game.code.clone();
    view! {
        <div class="game-card">
            <a class="game-card__link" href=href>
                <span class="game-card__name">{name}</span>
                <span class="game-card__code">{code}</span>
                <span class="game-card__meta">{format!("{players} players")}</span>
            </a>
            <button class="btn btn--danger game-card__leave" on:click=move |_| on_leave.run(game.clone())>
                "Leave"
            </button>
        </div>
    }
}
