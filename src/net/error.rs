//! Typed failures for auth and domain requests.
//!
//! ERROR HANDLING
//! ==============
//! `Display` strings are user-facing: screens render them inline. Server
//! `message` bodies are carried verbatim; generic fallbacks apply only when the
//! server said nothing useful.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::transport::{ApiResponse, TransportError};

/// Failures of signup, login and current-user fetch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email or password.")]
    InvalidCredentials,
    #[error("An account with this email already exists.")]
    EmailTaken,
    #[error("Your session has expired. Please sign in again.")]
    Unauthorized,
    #[error("The server returned an unexpected response.")]
    MalformedResponse,
    #[error("Could not reach the server: {0}")]
    NetworkFailure(String),
    #[error("{0}")]
    SignupFailed(String),
    #[error("{0}")]
    LoginFailed(String),
}

impl From<TransportError> for AuthError {
    fn from(err: TransportError) -> Self {
        Self::NetworkFailure(err.0)
    }
}

/// Failures of authorized game/user requests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainRequestError {
    #[error("Your session has expired. Please sign in again.")]
    Unauthorized,
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    ValidationFailed(String),
    #[error("{message}")]
    ServerError { status: u16, message: String },
    #[error("Could not reach the server: {0}")]
    Network(String),
}

pub const GENERIC_REQUEST_FAILURE: &str = "Something went wrong. Please try again.";

impl DomainRequestError {
    /// Classify a non-2xx response. `fallback` is used when the body carries
    /// no `message`.
    pub fn from_response(resp: &ApiResponse, fallback: &str) -> Self {
        let message = resp.server_message().unwrap_or_else(|| fallback.to_owned());
        match resp.status {
            401 => Self::Unauthorized,
            404 => Self::NotFound(message),
            409 => Self::Conflict(message),
            400 | 422 => Self::ValidationFailed(message),
            status => Self::ServerError { status, message },
        }
    }

    /// The 2xx body could not be decoded.
    pub fn malformed() -> Self {
        Self::ServerError { status: 200, message: "The server returned an unexpected response.".to_owned() }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

impl From<TransportError> for DomainRequestError {
    fn from(err: TransportError) -> Self {
        Self::Network(err.0)
    }
}
