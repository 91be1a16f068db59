//! Session store: the single source of truth for who is logged in.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one `SessionStore`, runs `initialize` once at boot and mirrors
//! every change into an `RwSignal<Session>` via `subscribe`. Screens read the
//! token through `TokenSource` and report request failures back through
//! `handle_request_error`; only this module writes the persisted token.
//!
//! INVARIANTS
//! ==========
//! - `Authenticated` implies both token and user are present.
//! - `Anonymous` implies no token, in memory or in storage.
//! - Writes are last-writer-wins; a boot validation that completes after a
//!   newer login is discarded.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, PoisonError};

use crate::net::api::TokenSource;
use crate::net::auth::AuthGateway;
use crate::net::error::{AuthError, DomainRequestError};
use crate::net::types::{SessionBundle, UserPatch, UserSummary};
use crate::routes::AppRoute;
use crate::util::storage::{KeyValueStore, TOKEN_KEY};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Uninitialized,
    Loading,
    Authenticated,
    Anonymous,
}

impl SessionStatus {
    /// Whether boot validation has finished.
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Authenticated | Self::Anonymous)
    }
}

/// Snapshot of the session handed to the UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub current_user: Option<UserSummary>,
    pub status: SessionStatus,
}

impl Session {
    fn authenticated(token: String, user: UserSummary) -> Self {
        Self { token: Some(token), current_user: Some(user), status: SessionStatus::Authenticated }
    }

    fn anonymous() -> Self {
        Self { token: None, current_user: None, status: SessionStatus::Anonymous }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    /// Current user id, or an empty string when nobody is logged in.
    pub fn user_id(&self) -> &str {
        self.current_user.as_ref().map_or("", |u| u.id.as_str())
    }
}

type Listener = Box<dyn Fn(&Session) + Send + Sync>;

struct Inner {
    storage: Arc<dyn KeyValueStore>,
    gateway: AuthGateway,
    session: Mutex<Session>,
    listeners: Mutex<Vec<Listener>>,
}

/// Cheap-to-clone handle to the shared session.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStore>, gateway: AuthGateway) -> Self {
        Self {
            inner: Arc::new(Inner {
                storage,
                gateway,
                session: Mutex::new(Session::default()),
                listeners: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn snapshot(&self) -> Session {
        self.inner.session.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn status(&self) -> SessionStatus {
        self.inner.session.lock().unwrap_or_else(PoisonError::into_inner).status
    }

    pub fn current_user(&self) -> Option<UserSummary> {
        self.inner.session.lock().unwrap_or_else(PoisonError::into_inner).current_user.clone()
    }

    /// Register a callback run after every change. Callbacks must not call
    /// `subscribe` themselves.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&Session) + Send + Sync + 'static,
    {
        self.inner.listeners.lock().unwrap_or_else(PoisonError::into_inner).push(Box::new(listener));
    }

    fn replace(&self, next: Session) {
        {
            let mut session = self.inner.session.lock().unwrap_or_else(PoisonError::into_inner);
            if *session == next {
                return;
            }
            *session = next.clone();
        }
        for listener in self.inner.listeners.lock().unwrap_or_else(PoisonError::into_inner).iter() {
            listener(&next);
        }
    }

    /// Hydrate from the persisted token. Settles to `Authenticated` or
    /// `Anonymous`; with no stored token no request is made.
    pub async fn initialize(&self) {
        let Some(token) = self.inner.storage.get(TOKEN_KEY).filter(|t| !t.is_empty()) else {
            log::debug!("session: no stored token");
            self.clear_session();
            return;
        };

        self.replace(Session { token: Some(token.clone()), current_user: None, status: SessionStatus::Loading });

        let result = self.inner.gateway.fetch_current_user(&token).await;
        if self.token().as_deref() != Some(token.as_str()) || self.status() != SessionStatus::Loading {
            log::debug!("session: boot validation superseded");
            return;
        }
        match result {
            Ok(user) => {
                log::debug!("session: restored user {}", user.id);
                self.replace(Session::authenticated(token, user));
            }
            Err(e) => {
                log::warn!("session: stored token rejected: {e}");
                self.clear_session();
            }
        }
    }

    /// Persist `token` and mark the session authenticated as `user`.
    pub fn commit_session(&self, token: &str, user: UserSummary) {
        self.inner.storage.set(TOKEN_KEY, token);
        log::debug!("session: authenticated as {}", user.id);
        self.replace(Session::authenticated(token.to_owned(), user));
    }

    /// Erase the token and become anonymous. Idempotent.
    pub fn clear_session(&self) {
        self.inner.storage.remove(TOKEN_KEY);
        self.replace(Session::anonymous());
    }

    /// Shallow-merge profile changes into the current user. No-op when
    /// nobody is logged in.
    pub fn update_current_user(&self, patch: UserPatch) {
        let mut next = self.snapshot();
        let Some(user) = next.current_user.as_mut() else {
            return;
        };
        patch.apply(user);
        self.replace(next);
    }

    /// Replace the current user wholesale, keeping the token.
    pub fn replace_current_user(&self, user: UserSummary) {
        let mut next = self.snapshot();
        if !next.is_authenticated() {
            return;
        }
        next.current_user = Some(user);
        self.replace(next);
    }

    /// Log in and commit the session. Session is left untouched on failure.
    ///
    /// # Errors
    ///
    /// Propagates the gateway's [`AuthError`].
    pub async fn login(&self, email: &str, password: &str) -> Result<UserSummary, AuthError> {
        let bundle = self.inner.gateway.login(email, password).await?;
        Ok(self.commit_bundle(bundle))
    }

    /// Create an account and commit the session. Session is left untouched on
    /// failure.
    ///
    /// # Errors
    ///
    /// Propagates the gateway's [`AuthError`].
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<UserSummary, AuthError> {
        let bundle = self.inner.gateway.signup(name, email, password).await?;
        Ok(self.commit_bundle(bundle))
    }

    fn commit_bundle(&self, bundle: SessionBundle) -> UserSummary {
        self.commit_session(&bundle.token, bundle.user.clone());
        bundle.user
    }

    /// Local-only logout; there is no server-side session to revoke.
    pub fn logout(&self) {
        log::debug!("session: logout");
        self.clear_session();
    }

    /// Re-fetch the current user. An unauthorized answer clears the session.
    ///
    /// # Errors
    ///
    /// `Unauthorized` when not logged in or the token was rejected, otherwise
    /// the gateway's error.
    pub async fn refresh_current_user(&self) -> Result<UserSummary, AuthError> {
        let token = self.token().ok_or(AuthError::Unauthorized)?;
        match self.inner.gateway.fetch_current_user(&token).await {
            Ok(user) => {
                if self.token().as_deref() == Some(token.as_str()) {
                    self.replace_current_user(user.clone());
                }
                Ok(user)
            }
            Err(AuthError::Unauthorized) => {
                self.clear_session();
                Err(AuthError::Unauthorized)
            }
            Err(e) => Err(e),
        }
    }

    /// Shared screen convention: an unauthorized failure ends the session and
    /// yields the route to redirect to. Other failures leave the session alone.
    pub fn handle_request_error(&self, err: &DomainRequestError) -> Option<AppRoute> {
        if err.is_unauthorized() {
            log::warn!("session: request rejected as unauthorized, signing out");
            self.clear_session();
            Some(AppRoute::Entry)
        } else {
            None
        }
    }
}

impl TokenSource for SessionStore {
    fn token(&self) -> Option<String> {
        self.inner.session.lock().unwrap_or_else(PoisonError::into_inner).token.clone()
    }
}
