//! Lobby roster state and admin actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both lobby views load the game by code and decide from the roster whether
//! the viewer belongs on the admin view, the player view, or the join screen.
//! Roster edits are optimistic: the cell is updated first and the edit is
//! undone when the server refuses. Undo touches only the one player or admin
//! id the edit changed, so overlapping edits do not clobber each other.

#[cfg(test)]
#[path = "lobby_test.rs"]
mod lobby_test;

use crate::net::api::ApiClient;
use crate::net::error::DomainRequestError;
use crate::net::types::{Ack, Game, Player, Preferences};
use crate::routes::AppRoute;
use crate::state::request::{ScreenOutcome, settle, settle_latest};
use crate::state::session::SessionStore;
use crate::util::latest::RequestGeneration;
use crate::util::optimistic::{StateCell, optimistic};

/// How the viewer relates to a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LobbyRole {
    Admin,
    Player,
    Outsider,
}

pub fn role_of(game: &Game, user_id: &str) -> LobbyRole {
    if game.is_admin(user_id) {
        LobbyRole::Admin
    } else if game.is_player(user_id) {
        LobbyRole::Player
    } else {
        LobbyRole::Outsider
    }
}

/// Where the admin view sends a viewer, if elsewhere.
pub fn admin_view_redirect(game: &Game, user_id: &str) -> Option<AppRoute> {
    match role_of(game, user_id) {
        LobbyRole::Admin => None,
        _ => Some(AppRoute::Lobby { code: game.code.clone() }),
    }
}

/// Where the player view sends a viewer, if elsewhere.
pub fn player_view_redirect(game: &Game, user_id: &str) -> Option<AppRoute> {
    match role_of(game, user_id) {
        LobbyRole::Outsider => Some(AppRoute::JoinGame { code: Some(game.code.clone()) }),
        _ => None,
    }
}

pub const CANNOT_REMOVE_MESSAGE: &str = "You cannot remove an admin or yourself.";
pub const CANNOT_REVOKE_SELF_MESSAGE: &str = "You cannot remove yourself from the admins.";

pub fn can_remove(game: &Game, player_id: &str, me: &str) -> bool {
    player_id != me && !game.is_admin(player_id)
}

/// Players matching a case-insensitive name/email filter.
pub fn filter_players<'a>(players: &'a [Player], query: &str) -> Vec<&'a Player> {
    let needle = query.trim().to_lowercase();
    players
        .iter()
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle) || p.email.to_lowercase().contains(&needle))
        .collect()
}

/// Up to two initials for an avatar.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect();
    if letters.is_empty() { "?".to_owned() } else { letters }
}

/// Shareable join link for `code` under `origin`.
pub fn invite_link(origin: &str, code: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), AppRoute::JoinGame { code: Some(code.to_owned()) }.path())
}

pub async fn load_game(
    api: &ApiClient,
    session: &SessionStore,
    generation: &RequestGeneration,
    code: &str,
) -> ScreenOutcome<Game> {
    let ticket = generation.begin();
    let result = api.game_by_code(code).await;
    settle_latest(session, generation, ticket, result)
}

fn missing_game() -> ScreenOutcome<Ack> {
    ScreenOutcome::Failed(DomainRequestError::NotFound("The game is no longer loaded.".to_owned()))
}

/// Remove `player_id` from the roster, optimistically.
pub async fn remove_player<C>(api: &ApiClient, session: &SessionStore, cell: &C, player_id: &str) -> ScreenOutcome<Ack>
where
    C: StateCell<Option<Game>> + ?Sized,
{
    let Some(game) = cell.load() else {
        return missing_game();
    };
    if !can_remove(&game, player_id, session.snapshot().user_id()) {
        return ScreenOutcome::Failed(DomainRequestError::ValidationFailed(CANNOT_REMOVE_MESSAGE.to_owned()));
    }
    let removed = game.players.iter().position(|p| p.id == player_id).map(|at| (at, game.players[at].clone()));
    let result = optimistic(
        cell,
        |g: &mut Option<Game>| {
            if let Some(g) = g {
                g.players.retain(|p| p.id != player_id);
            }
        },
        |g: &mut Option<Game>| {
            if let (Some(g), Some((at, player))) = (g, removed) {
                if !g.is_player(&player.id) {
                    let at = at.min(g.players.len());
                    g.players.insert(at, player);
                }
            }
        },
        api.remove_player(&game.id, player_id),
    )
    .await;
    settle(session, result)
}

/// Promote `player_id` to admin, optimistically.
pub async fn add_admin<C>(api: &ApiClient, session: &SessionStore, cell: &C, player_id: &str) -> ScreenOutcome<Ack>
where
    C: StateCell<Option<Game>> + ?Sized,
{
    let Some(game) = cell.load() else {
        return missing_game();
    };
    let was_admin = game.is_admin(player_id);
    let result = optimistic(
        cell,
        |g: &mut Option<Game>| {
            if let Some(g) = g {
                let mut ids = g.admin_ids();
                if !ids.iter().any(|id| id == player_id) {
                    ids.push(player_id.to_owned());
                }
                g.set_admin_ids(ids);
            }
        },
        |g: &mut Option<Game>| {
            if let Some(g) = g.as_mut().filter(|_| !was_admin) {
                let mut ids = g.admin_ids();
                ids.retain(|id| id != player_id);
                g.set_admin_ids(ids);
            }
        },
        api.add_admin(&game.id, player_id),
    )
    .await;
    settle(session, result)
}

/// Revoke `player_id`'s admin rights, optimistically. Admins cannot revoke
/// themselves.
pub async fn revoke_admin<C>(api: &ApiClient, session: &SessionStore, cell: &C, player_id: &str) -> ScreenOutcome<Ack>
where
    C: StateCell<Option<Game>> + ?Sized,
{
    let Some(game) = cell.load() else {
        return missing_game();
    };
    if player_id == session.snapshot().user_id() {
        return ScreenOutcome::Failed(DomainRequestError::ValidationFailed(CANNOT_REVOKE_SELF_MESSAGE.to_owned()));
    }
    let was_admin = game.is_admin(player_id);
    let result = optimistic(
        cell,
        |g: &mut Option<Game>| {
            if let Some(g) = g {
                let mut ids = g.admin_ids();
                ids.retain(|id| id != player_id);
                g.set_admin_ids(ids);
            }
        },
        |g: &mut Option<Game>| {
            if let Some(g) = g.as_mut().filter(|_| was_admin) {
                if !g.is_admin(player_id) {
                    let mut ids = g.admin_ids();
                    ids.push(player_id.to_owned());
                    g.set_admin_ids(ids);
                }
            }
        },
        api.remove_admin(&game.id, player_id),
    )
    .await;
    settle(session, result)
}

pub async fn draw(api: &ApiClient, session: &SessionStore, game_id: &str) -> ScreenOutcome<Ack> {
    settle(session, api.draw(game_id).await)
}

pub async fn player_preferences(api: &ApiClient, session: &SessionStore, player_id: &str) -> ScreenOutcome<Preferences> {
    settle(session, api.preferences(player_id).await)
}
