//! Game-list, create and join flows.
//!
//! DESIGN
//! ======
//! Pages own the signals; these functions own the request sequencing and the
//! session convention so they can be driven from tests without a DOM.

#[cfg(test)]
#[path = "games_test.rs"]
mod games_test;

use crate::net::api::ApiClient;
use crate::net::error::DomainRequestError;
use crate::net::types::{Ack, CreateGameRequest, Game};
use crate::routes::AppRoute;
use crate::state::request::{ScreenOutcome, settle, settle_latest};
use crate::state::session::SessionStore;
use crate::util::latest::RequestGeneration;

/// Dashboard game list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GamesState {
    pub items: Vec<Game>,
    pub loading: bool,
    pub error: Option<String>,
}

impl GamesState {
    /// Fold a list-fetch outcome into the state. Returns the redirect to
    /// follow, if any.
    pub fn apply(&mut self, outcome: ScreenOutcome<Vec<Game>>) -> Option<AppRoute> {
        match outcome {
            ScreenOutcome::Stale => return None,
            ScreenOutcome::Done(items) => {
                self.items = items;
                self.error = None;
            }
            ScreenOutcome::Failed(err) => self.error = Some(err.to_string()),
            ScreenOutcome::Redirect(route) => {
                self.loading = false;
                return Some(route);
            }
        }
        self.loading = false;
        None
    }

    pub fn remove(&mut self, game_id: &str) {
        self.items.retain(|g| g.id != game_id);
    }
}

/// Fetch the caller's games; superseded fetches resolve to `Stale`.
pub async fn load_my_games(
    api: &ApiClient,
    session: &SessionStore,
    generation: &RequestGeneration,
) -> ScreenOutcome<Vec<Game>> {
    let ticket = generation.begin();
    let result = api.my_games().await;
    settle_latest(session, generation, ticket, result)
}

pub async fn leave_game(api: &ApiClient, session: &SessionStore, game_id: &str) -> ScreenOutcome<Ack> {
    settle(session, api.leave_game(game_id).await)
}

pub async fn create_game(
    api: &ApiClient,
    session: &SessionStore,
    request: &CreateGameRequest,
) -> ScreenOutcome<Game> {
    settle(session, api.create_game(request).await)
}

/// Result of joining by code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JoinResult {
    Joined { code: String },
    AlreadyMember { code: String },
}

pub const INVALID_CODE_MESSAGE: &str = "Invalid code or game not found.";

/// Resolve `code` to a game and join it. A 409 from the join call means the
/// user is already on the roster, which still counts as success.
pub async fn join_by_code(api: &ApiClient, session: &SessionStore, code: &str) -> ScreenOutcome<JoinResult> {
    let game = match settle(session, api.game_by_code(code).await) {
        ScreenOutcome::Done(game) => game,
        ScreenOutcome::Failed(DomainRequestError::NotFound(_)) => {
            return ScreenOutcome::Failed(DomainRequestError::NotFound(INVALID_CODE_MESSAGE.to_owned()));
        }
        ScreenOutcome::Failed(err) => return ScreenOutcome::Failed(err),
        ScreenOutcome::Redirect(route) => return ScreenOutcome::Redirect(route),
        ScreenOutcome::Stale => return ScreenOutcome::Stale,
    };
    match settle(session, api.join_game(&game.id).await) {
        ScreenOutcome::Done(_) => ScreenOutcome::Done(JoinResult::Joined { code: game.code }),
        ScreenOutcome::Failed(DomainRequestError::Conflict(_)) => {
            ScreenOutcome::Done(JoinResult::AlreadyMember { code: game.code })
        }
        ScreenOutcome::Failed(err) => ScreenOutcome::Failed(err),
        ScreenOutcome::Redirect(route) => ScreenOutcome::Redirect(route),
        ScreenOutcome::Stale => ScreenOutcome::Stale,
    }
}
