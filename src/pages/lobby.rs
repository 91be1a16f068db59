//! Player view of a game lobby.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both lobby views share `use_lobby_game`, which loads the game for the
//! `:code` parameter (re-loading if it changes) and applies a view-specific
//! redirect once the roster is known.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::app::Services;
use crate::components::loading::Loading;
use crate::components::preferences_card::PreferencesCard;
use crate::net::types::{Game, Player, Preferences};
use crate::routes::AppRoute;
use crate::state::lobby::{initials, player_view_redirect};
use crate::state::notice::NoticeState;
use crate::state::session::Session;
use crate::util::latest::RequestGeneration;

/// Loaded game plus its loading flag.
#[derive(Clone, Copy)]
pub(crate) struct LobbyGame {
    pub game: RwSignal<Option<Game>>,
    pub loading: RwSignal<bool>,
}

pub(crate) fn use_lobby_game(
    redirect: RwSignal<Option<AppRoute>>,
    view_redirect: fn(&Game, &str) -> Option<AppRoute>,
) -> LobbyGame {
    let services = expect_context::<Services>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let params = use_params_map();
    let lobby = LobbyGame { game: RwSignal::new(None), loading: RwSignal::new(true) };
    let generation = RequestGeneration::new();

    {
        let generation = generation.clone();
        Effect::new(move || {
            let code = params.with(|p| p.get("code")).unwrap_or_default();
            lobby.loading.set(true);
            let services = services.clone();
            let generation = generation.clone();
            #[cfg(feature = "csr")]
            leptos::task::spawn_local(async move {
                let outcome =
                    crate::state::lobby::load_game(&services.api, &services.session, &generation, &code).await;
                if matches!(outcome, crate::state::request::ScreenOutcome::Stale) {
                    return;
                }
                lobby.loading.set(false);
                if let Some(game) = super::resolve(outcome, notices, redirect) {
                    let me = services.session.snapshot().user_id().to_owned();
                    if let Some(route) = view_redirect(&game, &me) {
                        redirect.set(Some(route));
                        return;
                    }
                    lobby.game.set(Some(game));
                }
            });
            #[cfg(not(feature = "csr"))]
            let _ = (code, services, generation, notices, redirect, view_redirect);
        });
    }
    on_cleanup(move || generation.cancel());

    lobby
}

/// Fetch and show one player's preferences.
pub(crate) fn show_preferences(
    services: &Services,
    notices: RwSignal<NoticeState>,
    redirect: RwSignal<Option<AppRoute>>,
    viewing: RwSignal<Option<(String, Preferences)>>,
    player: Player,
) {
    let services = services.clone();
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let outcome = crate::state::lobby::player_preferences(&services.api, &services.session, &player.id).await;
        if let Some(prefs) = super::resolve(outcome, notices, redirect) {
            viewing.set(Some((player.name, prefs)));
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = (services, notices, redirect, viewing, player);
}

#[component]
pub(crate) fn GameSummary(game: Game) -> impl IntoView {
    view! {
        <div class="lobby-summary">
            <h1 class="lobby-summary__name">{game.name.clone()}</h1>
            <span class="lobby-summary__code">{format!("Code: {}", game.code)}</span>
            <span class="lobby-summary__meta">
                {format!("{} weeks, reminder {} days before", game.number_of_weeks, game.reminder_day_before)}
            </span>
        </div>
    }
}

#[component]
pub(crate) fn Avatar(#[prop(into)] name: String) -> impl IntoView {
    view! { <span class="avatar" aria-hidden="true">{initials(&name)}</span> }
}

#[component]
pub fn LobbyPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let session = expect_context::<RwSignal<Session>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let redirect = super::use_redirect();
    let lobby = use_lobby_game(redirect, player_view_redirect);
    let viewing = RwSignal::new(None::<(String, Preferences)>);

    let is_admin = move || lobby.game.get().is_some_and(|g| g.is_admin(session.get().user_id()));

    let on_view = Callback::new({
        let services = services.clone();
        move |player: Player| show_preferences(&services, notices, redirect, viewing, player)
    });

    let on_leave = {
        let services = services.clone();
        move |_| {
            let Some(game) = lobby.game.get_untracked() else {
                return;
            };
            if !crate::util::browser::confirm(&super::dashboard::leave_prompt(&game.name)) {
                return;
            }
            let services = services.clone();
            #[cfg(feature = "csr")]
            leptos::task::spawn_local(async move {
                let outcome = crate::state::games::leave_game(&services.api, &services.session, &game.id).await;
                if super::resolve(outcome, notices, redirect).is_some() {
                    redirect.set(Some(AppRoute::Dashboard));
                }
            });
            #[cfg(not(feature = "csr"))]
            let _ = services;
        }
    };

    view! {
        <div class="lobby-page">
            <Show when=move || !lobby.loading.get() fallback=|| view! { <Loading label="Loading game..."/> }>
                {move || {
                    lobby
                        .game
                        .get()
                        .map(|game| {
                            let code = game.code.clone();
                            view! {
                                <GameSummary game=game.clone()/>
                                <Show when=is_admin>
                                    <a class="btn" href=AppRoute::LobbyAdmin { code: code.clone() }.path()>
                                        "Admin view"
                                    </a>
                                </Show>
                                <ul class="roster">
                                    {game
                                        .players
                                        .into_iter()
                                        .map(|player| {
                                            let name = player.name.clone();
                                            view! {
                                                <li class="roster__item">
                                                    <Avatar name=name.clone()/>
                                                    <span class="roster__name">{name}</span>
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| on_view.run(player.clone())
                                                    >
                                                        "Preferences"
                                                    </button>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                        })
                }}
                <button class="btn btn--danger" on:click=on_leave.clone()>
                    "Leave game"
                </button>
            </Show>
            {move || {
                viewing
                    .get()
                    .map(|(name, prefs)| {
                        view! {
                            <PreferencesCard name=name prefs=prefs on_close=Callback::new(move |()| viewing.set(None))/>
                        }
                    })
            }}
        </div>
    }
}
