//! REST client for game and user endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! Screens call these helpers with the token supplied by an injected
//! `TokenSource` (the session store in the app). A missing token fails fast
//! with `Unauthorized` without touching the network.
//!
//! ERROR HANDLING
//! ==============
//! Every non-2xx is classified by `DomainRequestError::from_response`; the
//! per-endpoint fallback text applies only when the server sent no `message`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::error::DomainRequestError;
use super::transport::{ApiRequest, HttpMethod, Transport};
use super::types::{Ack, CreateGameRequest, DataEnvelope, Game, Preferences, ProfileUpdate, UserSummary};
use crate::config::AppConfig;

/// Read access to the current bearer token.
pub trait TokenSource: Send + Sync {
    fn token(&self) -> Option<String>;
}

fn game_action_path(game_id: &str, action: &str) -> String {
    format!("/game/{game_id}/{action}")
}

fn game_member_action_path(game_id: &str, action: &str, user_id: &str) -> String {
    format!("/game/{game_id}/{action}/{user_id}")
}

/// Codes are alphanumeric; anything else a user typed into the URL is
/// dropped rather than forwarded into the backend path.
fn game_by_code_path(code: &str) -> String {
    let code: String = code.chars().filter(char::is_ascii_alphanumeric).map(|c| c.to_ascii_uppercase()).collect();
    format!("/game/code/{code}")
}

fn preferences_path(user_id: &str) -> String {
    format!("/user/preferences/{user_id}")
}

#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    config: AppConfig,
    tokens: Arc<dyn TokenSource>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>, config: AppConfig, tokens: Arc<dyn TokenSource>) -> Self {
        Self { transport, config, tokens }
    }

    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
        fallback: &str,
    ) -> Result<String, DomainRequestError> {
        let token = self.tokens.token().ok_or(DomainRequestError::Unauthorized)?;
        let mut request = ApiRequest::new(method, self.config.endpoint(path)).bearer(&token);
        if let Some(body) = body {
            request = request.json(body);
        }
        let resp = self.transport.send(request).await?;
        if resp.is_success() {
            Ok(resp.body)
        } else {
            let err = DomainRequestError::from_response(&resp, fallback);
            log::warn!("{} {path} failed: {} ({err})", method.as_str(), resp.status);
            Err(err)
        }
    }

    async fn fetch_data<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
        fallback: &str,
    ) -> Result<T, DomainRequestError> {
        let raw = self.send(method, path, body, fallback).await?;
        serde_json::from_str::<DataEnvelope<T>>(&raw)
            .map(|envelope| envelope.data)
            .map_err(|e| {
                log::warn!("{path}: unreadable response: {e}");
                DomainRequestError::malformed()
            })
    }

    async fn acknowledge(&self, path: &str, fallback: &str) -> Result<Ack, DomainRequestError> {
        let raw = self.send(HttpMethod::Post, path, None, fallback).await?;
        Ok(serde_json::from_str(&raw).unwrap_or_default())
    }

    /// `POST /game/create`.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainRequestError`] on any failure.
    pub async fn create_game(&self, request: &CreateGameRequest) -> Result<Game, DomainRequestError> {
        let body = serde_json::to_value(request).map_err(|_| DomainRequestError::malformed())?;
        self.fetch_data(HttpMethod::Post, "/game/create", Some(body), "Could not create the game.").await
    }

    /// `GET /game/getmygames`.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainRequestError`] on any failure.
    pub async fn my_games(&self) -> Result<Vec<Game>, DomainRequestError> {
        self.fetch_data(HttpMethod::Get, "/game/getmygames", None, "Could not load your games.").await
    }

    /// `GET /game/code/:code`.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainRequestError`] on any failure.
    pub async fn game_by_code(&self, code: &str) -> Result<Game, DomainRequestError> {
        self.fetch_data(HttpMethod::Get, &game_by_code_path(code), None, "Invalid code or game not found.")
            .await
    }

    /// `POST /game/:id/join`.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainRequestError`]; `Conflict` means already a member.
    pub async fn join_game(&self, game_id: &str) -> Result<Ack, DomainRequestError> {
        self.acknowledge(&game_action_path(game_id, "join"), "Could not join the game.").await
    }

    /// `POST /game/:id/leave`.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainRequestError`] on any failure.
    pub async fn leave_game(&self, game_id: &str) -> Result<Ack, DomainRequestError> {
        self.acknowledge(&game_action_path(game_id, "leave"), "Could not leave the game.").await
    }

    /// `POST /game/:id/draw`. The pairing itself happens server-side.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainRequestError`] on any failure.
    pub async fn draw(&self, game_id: &str) -> Result<Ack, DomainRequestError> {
        self.acknowledge(&game_action_path(game_id, "draw"), "The draw failed.").await
    }

    /// `POST /game/:id/remove/:userId`.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainRequestError`] on any failure.
    pub async fn remove_player(&self, game_id: &str, user_id: &str) -> Result<Ack, DomainRequestError> {
        self.acknowledge(&game_member_action_path(game_id, "remove", user_id), "Could not remove the player.")
            .await
    }

    /// `POST /game/:id/admin/add/:userId`.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainRequestError`] on any failure.
    pub async fn add_admin(&self, game_id: &str, user_id: &str) -> Result<Ack, DomainRequestError> {
        self.acknowledge(&game_member_action_path(game_id, "admin/add", user_id), "Could not promote the player.")
            .await
    }

    /// `POST /game/:id/admin/remove/:userId`.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainRequestError`] on any failure.
    pub async fn remove_admin(&self, game_id: &str, user_id: &str) -> Result<Ack, DomainRequestError> {
        self.acknowledge(&game_member_action_path(game_id, "admin/remove", user_id), "Could not revoke the admin.")
            .await
    }

    /// `GET /user/preferences/:id`.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainRequestError`] on any failure.
    pub async fn preferences(&self, user_id: &str) -> Result<Preferences, DomainRequestError> {
        self.fetch_data(HttpMethod::Get, &preferences_path(user_id), None, "Could not load the profile.").await
    }

    /// `PUT /user/preferences/:id`. Returns the updated user when the backend
    /// echoes one.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainRequestError`] on any failure.
    pub async fn save_preferences(
        &self,
        user_id: &str,
        prefs: &Preferences,
    ) -> Result<Option<UserSummary>, DomainRequestError> {
        let body = serde_json::to_value(prefs).map_err(|_| DomainRequestError::malformed())?;
        let raw = self
            .send(HttpMethod::Put, &preferences_path(user_id), Some(body), "Could not save your preferences.")
            .await?;
        let value: Value = serde_json::from_str(&raw).unwrap_or(Value::Null);
        Ok(value
            .pointer("/data/user")
            .and_then(|u| serde_json::from_value(u.clone()).ok()))
    }

    /// `PATCH /user/me`.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainRequestError`] on any failure.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserSummary, DomainRequestError> {
        let body = json!({ "name": update.name, "email": update.email });
        self.fetch_data(HttpMethod::Patch, "/user/me", Some(body), "Could not update your profile.").await
    }
}
