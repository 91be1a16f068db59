use super::*;
use crate::net::auth::AuthGateway;
use crate::state::session::SessionStatus;
use crate::test_helpers::{MockTransport, config, user};
use crate::util::storage::MemoryStore;
use std::sync::Arc;

fn logged_in_store() -> SessionStore {
    let store = SessionStore::new(
        Arc::new(MemoryStore::new()),
        AuthGateway::new(MockTransport::new(), config()),
    );
    store.commit_session("T1", user("1", "A", "a@b.com"));
    store
}

#[test]
fn settle_passes_success_through() {
    let store = logged_in_store();
    assert_eq!(settle(&store, Ok::<_, DomainRequestError>(3)), ScreenOutcome::Done(3));
}

#[test]
fn settle_unauthorized_redirects_and_clears() {
    let store = logged_in_store();
    let outcome: ScreenOutcome<()> = settle(&store, Err(DomainRequestError::Unauthorized));
    assert_eq!(outcome, ScreenOutcome::Redirect(AppRoute::Entry));
    assert_eq!(store.status(), SessionStatus::Anonymous);
}

#[test]
fn settle_other_errors_are_inline() {
    let store = logged_in_store();
    let err = DomainRequestError::ServerError { status: 500, message: "boom".to_owned() };
    let outcome: ScreenOutcome<()> = settle(&store, Err(err.clone()));
    assert_eq!(outcome, ScreenOutcome::Failed(err));
    assert_eq!(store.status(), SessionStatus::Authenticated);
}

#[test]
fn settle_latest_superseded_unauthorized_still_signs_out() {
    let store = logged_in_store();
    let generation = RequestGeneration::new();
    let stale = generation.begin();
    generation.begin();
    let outcome: ScreenOutcome<()> =
        settle_latest(&store, &generation, stale, Err(DomainRequestError::Unauthorized));
    assert_eq!(outcome, ScreenOutcome::Redirect(AppRoute::Entry));
    assert_eq!(store.status(), SessionStatus::Anonymous);
}

#[test]
fn settle_latest_drops_superseded_failures() {
    let store = logged_in_store();
    let generation = RequestGeneration::new();
    let stale = generation.begin();
    generation.begin();
    let outcome: ScreenOutcome<()> =
        settle_latest(&store, &generation, stale, Err(DomainRequestError::NotFound("gone".to_owned())));
    assert_eq!(outcome, ScreenOutcome::Stale);
    assert_eq!(store.status(), SessionStatus::Authenticated);
}

#[test]
fn map_transforms_only_done() {
    assert_eq!(ScreenOutcome::Done(2).map(|v| v * 10), ScreenOutcome::Done(20));
    assert_eq!(ScreenOutcome::<i32>::Stale.map(|v| v * 10), ScreenOutcome::Stale);
    assert_eq!(
        ScreenOutcome::<i32>::Redirect(AppRoute::Entry).map(|v| v * 10),
        ScreenOutcome::Redirect(AppRoute::Entry)
    );
}
