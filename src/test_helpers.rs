//! Shared fixtures for unit tests.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use crate::config::AppConfig;
use crate::net::transport::{ApiRequest, ApiResponse, Transport, TransportError};
use crate::net::types::{Game, Player, UserSummary};

pub const BASE_URL: &str = "http://api.test";

pub fn config() -> AppConfig {
    AppConfig::with_base_url(BASE_URL)
}

/// Transport that replays scripted responses in order and records requests.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
    yielding: AtomicBool,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: serde_json::Value) -> &Self {
        let body = if body.is_null() { String::new() } else { body.to_string() };
        self.responses.lock().unwrap().push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    /// Make every `send` suspend once after taking its response, so joined
    /// requests interleave the way they do against a real server.
    pub fn yielding(&self) -> &Self {
        self.yielding.store(true, Ordering::SeqCst);
        self
    }

    pub fn fail(&self, detail: &str) -> &Self {
        self.responses.lock().unwrap().push_back(Err(TransportError(detail.to_owned())));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted response".to_owned())));
        if self.yielding.load(Ordering::SeqCst) {
            YieldOnce(false).await;
        }
        response
    }
}

/// Pending on the first poll, ready on the second.
struct YieldOnce(bool);

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

pub fn user(id: &str, name: &str, email: &str) -> UserSummary {
    UserSummary { id: id.to_owned(), name: name.to_owned(), email: email.to_owned(), onboarded: true }
}

pub fn player(id: &str, name: &str) -> Player {
    Player { id: id.to_owned(), name: name.to_owned(), email: format!("{}@example.com", name.to_lowercase()) }
}

pub fn game(admin_ids: &[&str], players: Vec<Player>) -> Game {
    Game {
        id: "g1".to_owned(),
        name: "Office 2026".to_owned(),
        code: "ABC123".to_owned(),
        number_of_weeks: 4,
        reminder_day_before: 2,
        admin_ids: admin_ids.iter().map(|s| (*s).to_owned()).collect(),
        admin_users: Vec::new(),
        players,
    }
}

pub fn game_json(game: &Game) -> serde_json::Value {
    serde_json::to_value(game).unwrap()
}

/// Logged-in session (token `T1`, user `u1`) and an API client reading its
/// token, both over `transport`.
pub fn signed_in(transport: &Arc<MockTransport>) -> (crate::state::session::SessionStore, crate::net::api::ApiClient) {
    use crate::app::Services;
    use crate::util::storage::MemoryStore;

    let services = Services::new(config(), transport.clone(), Arc::new(MemoryStore::new()));
    services.session.commit_session("T1", user("u1", "Alice", "alice@example.com"));
    (services.session, services.api)
}
