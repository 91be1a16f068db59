//! Admin view of a game lobby: invite, draw, roster management.
//!
//! Roster edits go through the optimistic helpers in `state::lobby`, writing
//! straight into the page's game signal.

use leptos::prelude::*;

use crate::app::Services;
use crate::components::loading::Loading;
use crate::components::notice_banner::notify;
use crate::components::preferences_card::PreferencesCard;
use crate::net::types::{Ack, Player, Preferences};
use crate::pages::lobby::{Avatar, GameSummary, show_preferences, use_lobby_game};
use crate::routes::AppRoute;
use crate::state::lobby::{admin_view_redirect, can_remove, filter_players, invite_link};
use crate::state::notice::{NoticeKind, NoticeState};
use crate::state::session::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RosterAction {
    Remove,
    Promote,
    Revoke,
}

impl RosterAction {
    fn done_message(self) -> &'static str {
        match self {
            Self::Remove => "Player removed.",
            Self::Promote => "Player is now an admin.",
            Self::Revoke => "Admin rights revoked.",
        }
    }
}

#[component]
pub fn LobbyAdminPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let session = expect_context::<RwSignal<Session>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let redirect = super::use_redirect();
    let lobby = use_lobby_game(redirect, admin_view_redirect);
    let viewing = RwSignal::new(None::<(String, Preferences)>);
    let query = RwSignal::new(String::new());
    let drawing = RwSignal::new(false);

    let me = move || session.get().user_id().to_owned();

    let on_view = Callback::new({
        let services = services.clone();
        move |player: Player| show_preferences(&services, notices, redirect, viewing, player)
    });

    let on_roster = Callback::new({
        let services = services.clone();
        move |(action, player_id): (RosterAction, String)| {
            let services = services.clone();
            #[cfg(feature = "csr")]
            leptos::task::spawn_local(async move {
                let cell = lobby.game;
                let (api, session) = (&services.api, &services.session);
                let outcome = match action {
                    RosterAction::Remove => crate::state::lobby::remove_player(api, session, &cell, &player_id).await,
                    RosterAction::Promote => crate::state::lobby::add_admin(api, session, &cell, &player_id).await,
                    RosterAction::Revoke => crate::state::lobby::revoke_admin(api, session, &cell, &player_id).await,
                };
                if let Some(ack) = super::resolve(outcome, notices, redirect) {
                    let Ack { message } = ack;
                    notify(notices, NoticeKind::Success, message.unwrap_or_else(|| action.done_message().to_owned()));
                }
            });
            #[cfg(not(feature = "csr"))]
            let _ = (services, action, player_id);
        }
    });

    let on_copy = move |_| {
        let Some(game) = lobby.game.get_untracked() else {
            return;
        };
        let link = invite_link(&crate::util::browser::origin(), &game.code);
        if crate::util::browser::copy_to_clipboard(&link) {
            notify(notices, NoticeKind::Info, "Invite link copied.");
        } else {
            notify(notices, NoticeKind::Info, link);
        }
    };

    let on_draw = {
        let services = services.clone();
        move |_| {
            if drawing.get_untracked() {
                return;
            }
            let Some(game) = lobby.game.get_untracked() else {
                return;
            };
            if !crate::util::browser::confirm("Draw names now? Everyone will be assigned a giftee.") {
                return;
            }
            drawing.set(true);
            let services = services.clone();
            #[cfg(feature = "csr")]
            leptos::task::spawn_local(async move {
                let outcome = crate::state::lobby::draw(&services.api, &services.session, &game.id).await;
                drawing.set(false);
                if let Some(ack) = super::resolve(outcome, notices, redirect) {
                    notify(notices, NoticeKind::Success, ack.message.unwrap_or_else(|| "Names drawn!".to_owned()));
                }
            });
            #[cfg(not(feature = "csr"))]
            let _ = (services, game);
        }
    };

    let roster = move || {
        let Some(game) = lobby.game.get() else {
            return Vec::new();
        };
        let me = me();
        filter_players(&game.players, &query.get())
            .into_iter()
            .map(|player| {
                let id = player.id.clone();
                let is_admin = game.is_admin(&id);
                let removable = can_remove(&game, &id, &me);
                let is_me = id == me;
                let player = player.clone();
                let name = player.name.clone();
                let email = player.email.clone();
                let (remove_id, admin_id) = (id.clone(), id);
                view! {
                    <li class="roster__item" class:roster__item--admin=is_admin>
                        <Avatar name=name.clone()/>
                        <span class="roster__name">{name}</span>
                        <span class="roster__email">{email}</span>
                        <button class="btn btn--small" on:click=move |_| on_view.run(player.clone())>
                            "Preferences"
                        </button>
                        <Show when=move || !is_me>
                            <button
                                class="btn btn--small"
                                on:click={
                                    let admin_id = admin_id.clone();
                                    move |_| {
                                        let action = if is_admin { RosterAction::Revoke } else { RosterAction::Promote };
                                        on_roster.run((action, admin_id.clone()));
                                    }
                                }
                            >
                                {if is_admin { "Revoke admin" } else { "Make admin" }}
                            </button>
                        </Show>
                        <Show when=move || removable>
                            <button
                                class="btn btn--small btn--danger"
                                on:click={
                                    let remove_id = remove_id.clone();
                                    move |_| on_roster.run((RosterAction::Remove, remove_id.clone()))
                                }
                            >
                                "Remove"
                            </button>
                        </Show>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="lobby-page lobby-page--admin">
            <Show when=move || !lobby.loading.get() fallback=|| view! { <Loading label="Loading game..."/> }>
                {move || lobby.game.get().map(|game| {
                    let code = game.code.clone();
                    view! {
                        <GameSummary game=game/>
                        <a class="btn" href=AppRoute::Lobby { code }.path()>
                            "Player view"
                        </a>
                    }
                })}
                <div class="lobby-page__actions toolbar">
                    <button class="btn" on:click=on_copy>
                        "Copy invite link"
                    </button>
                    <button class="btn btn--primary" on:click=on_draw.clone() disabled=move || drawing.get()>
                        "Draw names"
                    </button>
                </div>
                <input
                    class="roster__search"
                    type="search"
                    placeholder="Search players"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <ul class="roster">{roster}</ul>
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
