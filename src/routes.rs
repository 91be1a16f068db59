//! Navigable screens and their paths.
//!
//! Path construction lives here so redirects and links never hand-format
//! URLs.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::util::auth::RouteRequirement;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Login/signup.
    Entry,
    Onboarding,
    Dashboard,
    Profile,
    CreateGame,
    JoinGame { code: Option<String> },
    Lobby { code: String },
    LobbyAdmin { code: String },
    NotFound,
}

impl AppRoute {
    pub fn path(&self) -> String {
        match self {
            Self::Entry => "/".to_owned(),
            Self::Onboarding => "/onboard".to_owned(),
            Self::Dashboard => "/dashboard".to_owned(),
            Self::Profile => "/profile".to_owned(),
            Self::CreateGame => "/game/create".to_owned(),
            Self::JoinGame { code: None } => "/game/join".to_owned(),
            Self::JoinGame { code: Some(code) } => format!("/game/join?code={code}"),
            Self::Lobby { code } => format!("/lobby/{code}"),
            Self::LobbyAdmin { code } => format!("/lobby/{code}/admin"),
            Self::NotFound => "/404".to_owned(),
        }
    }

    pub fn requirement(&self) -> RouteRequirement {
        match self {
            Self::Entry => RouteRequirement::GuestOnly,
            Self::NotFound => RouteRequirement::Public,
            _ => RouteRequirement::Authenticated,
        }
    }
}
