//! Auth gateway: signup, login and current-user fetch.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gateway only translates HTTP into typed outcomes. It never touches
//! session state; `SessionStore` decides what to commit or clear.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use serde::Deserialize;
use serde_json::json;

use super::error::AuthError;
use super::transport::{ApiRequest, ApiResponse, HttpMethod, Transport};
use super::types::{SessionBundle, UserSummary};
use crate::config::AppConfig;

pub(crate) const SIGNUP_PATH: &str = "/auth/signup";
pub(crate) const LOGIN_PATH: &str = "/auth/login";
pub(crate) const ME_PATH: &str = "/auth/me";

const SIGNUP_FALLBACK: &str = "Sign-up failed. Please try again.";
const LOGIN_FALLBACK: &str = "Sign-in failed. Please try again.";

#[derive(Debug, Deserialize)]
struct AuthBody {
    token: Option<String>,
    user: Option<UserSummary>,
}

#[derive(Debug, Deserialize)]
struct MeBody {
    #[serde(alias = "data")]
    user: UserSummary,
}

#[derive(Clone)]
pub struct AuthGateway {
    transport: Arc<dyn Transport>,
    config: AppConfig,
}

impl AuthGateway {
    pub fn new(transport: Arc<dyn Transport>, config: AppConfig) -> Self {
        Self { transport, config }
    }

    /// Create an account. Inputs are validated by the caller.
    ///
    /// # Errors
    ///
    /// `EmailTaken` on 409, `SignupFailed` on any other non-2xx,
    /// `MalformedResponse` when a 2xx body lacks the token or user.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<SessionBundle, AuthError> {
        let request = ApiRequest::new(HttpMethod::Post, self.config.endpoint(SIGNUP_PATH))
            .json(json!({ "name": name, "email": email, "password": password }));
        let resp = self.transport.send(request).await?;
        match resp.status {
            409 => Err(AuthError::EmailTaken),
            _ if resp.is_success() => session_bundle(&resp),
            _ => Err(AuthError::SignupFailed(resp.server_message().unwrap_or_else(|| SIGNUP_FALLBACK.to_owned()))),
        }
    }

    /// Exchange credentials for a session.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` on 401, `LoginFailed` on any other non-2xx,
    /// `MalformedResponse` when a 2xx body lacks the token or user.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionBundle, AuthError> {
        let request = ApiRequest::new(HttpMethod::Post, self.config.endpoint(LOGIN_PATH))
            .json(json!({ "email": email, "password": password }));
        let resp = self.transport.send(request).await?;
        match resp.status {
            401 => Err(AuthError::InvalidCredentials),
            _ if resp.is_success() => session_bundle(&resp),
            _ => Err(AuthError::LoginFailed(resp.server_message().unwrap_or_else(|| LOGIN_FALLBACK.to_owned()))),
        }
    }

    /// Resolve the user a token belongs to.
    ///
    /// # Errors
    ///
    /// `Unauthorized` on any non-2xx, `MalformedResponse` on an unreadable
    /// body, `NetworkFailure` when the request never completed.
    pub async fn fetch_current_user(&self, token: &str) -> Result<UserSummary, AuthError> {
        let request = ApiRequest::new(HttpMethod::Get, self.config.endpoint(ME_PATH)).bearer(token);
        let resp = self.transport.send(request).await?;
        if !resp.is_success() {
            return Err(AuthError::Unauthorized);
        }
        serde_json::from_str::<MeBody>(&resp.body)
            .map(|body| body.user)
            .map_err(|_| AuthError::MalformedResponse)
    }
}

fn session_bundle(resp: &ApiResponse) -> Result<SessionBundle, AuthError> {
    let body: AuthBody = serde_json::from_str(&resp.body).map_err(|_| AuthError::MalformedResponse)?;
    match (body.token, body.user) {
        (Some(token), Some(user)) if !token.is_empty() => Ok(SessionBundle { token, user }),
        _ => Err(AuthError::MalformedResponse),
    }
}
