//! Wire DTOs for the REST backend.
//!
//! DESIGN
//! ======
//! The backend is document-store shaped: ids arrive as `_id` on games and
//! players and as either `_id` or `id` on users, and fields are camelCase.
//! Everything optional on the wire has a serde default so partial documents
//! still deserialize.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user as the session sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub onboarded: bool,
}

/// Shallow update applied to the current user after a profile edit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub onboarded: Option<bool>,
}

impl UserPatch {
    pub fn apply(self, user: &mut UserSummary) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(onboarded) = self.onboarded {
            user.onboarded = onboarded;
        }
    }
}

/// Token and user returned together by signup/login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionBundle {
    pub token: String,
    pub user: UserSummary,
}

/// A roster member.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Admin reference used by older game documents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminRef {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// A Secret Santa game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub number_of_weeks: u32,
    #[serde(default)]
    pub reminder_day_before: u32,
    #[serde(default)]
    pub admin_ids: Vec<String>,
    #[serde(default)]
    pub admin_users: Vec<AdminRef>,
    #[serde(default)]
    pub players: Vec<Player>,
}

impl Game {
    /// Effective admin ids: `adminIds` when populated, else `adminUsers`.
    pub fn admin_ids(&self) -> Vec<String> {
        if self.admin_ids.is_empty() {
            self.admin_users.iter().map(|a| a.id.clone()).collect()
        } else {
            self.admin_ids.clone()
        }
    }

    /// Replace the admin list. `adminUsers` is cleared so an emptied list
    /// cannot fall back to stale entries.
    pub fn set_admin_ids(&mut self, ids: Vec<String>) {
        self.admin_ids = ids;
        self.admin_users.clear();
    }

    pub fn is_admin(&self, user_id: &str) -> bool {
        !user_id.is_empty() && self.admin_ids().iter().any(|id| id == user_id)
    }

    pub fn is_player(&self, user_id: &str) -> bool {
        !user_id.is_empty() && self.players.iter().any(|p| p.id == user_id)
    }
}

/// Gift preferences for one user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub dislikes: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_animal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Body of `POST /game/create`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    pub name: String,
    pub weeks: u32,
    pub reminder_days: u32,
    pub players: Vec<String>,
}

/// Body of `PATCH /user/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
}

/// `{ "data": T }` envelope used by game and user endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: T,
}

/// `{ "message": "..." }` acknowledgement returned by mutations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}
