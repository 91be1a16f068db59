use super::*;
use crate::net::error::DomainRequestError;
use crate::net::transport::HttpMethod;
use crate::test_helpers::{MockTransport, signed_in};
use crate::util::storage::MemoryStore;
use futures::executor::block_on;
use serde_json::json;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn complete_draft() -> PreferencesDraft {
    PreferencesDraft {
        likes: strings(&["dark chocolate", "Manga"]),
        dislikes: strings(&["licorice"]),
        allergies: Vec::new(),
        color: " Lavender ".to_owned(),
        animal: "Otter".to_owned(),
    }
}

// =============================================================
// list cleaning
// =============================================================

#[test]
fn clean_list_trims_collapses_and_dedupes_case_insensitively() {
    let cleaned = clean_list(&strings(&["  dark   chocolate ", "Dark Chocolate", "", "   ", "tea"]));
    assert_eq!(cleaned, strings(&["dark chocolate", "tea"]));
}

#[test]
fn push_chip_rejects_blank_duplicates_and_overflow() {
    let mut list = strings(&["Tea"]);
    assert!(!push_chip(&mut list, "  ", 5));
    assert!(!push_chip(&mut list, "tea", 5));
    assert!(push_chip(&mut list, " green   apples ", 5));
    assert_eq!(list, strings(&["Tea", "green apples"]));
    assert!(!push_chip(&mut list, "coffee", 2));
}

// =============================================================
// validation
// =============================================================

#[test]
fn validate_requires_like_color_and_animal() {
    let errors = PreferencesDraft::default().validate().unwrap();
    assert_eq!(errors, PreferenceErrors { likes: true, color: true, animal: true });
    assert_eq!(complete_draft().validate(), None);
}

#[test]
fn validate_whitespace_only_likes_count_as_missing() {
    let draft = PreferencesDraft { likes: strings(&["   "]), ..complete_draft() };
    assert!(draft.validate().unwrap().likes);
}

#[test]
fn to_preferences_cleans_lists_and_trims_fields() {
    let prefs = complete_draft().to_preferences();
    assert_eq!(prefs.likes, strings(&["dark chocolate", "Manga"]));
    assert_eq!(prefs.favorite_color.as_deref(), Some("Lavender"));
    assert_eq!(prefs.favorite_animal.as_deref(), Some("Otter"));
}

#[test]
fn email_shape_check() {
    assert!(is_valid_email("a@b.com"));
    assert!(is_valid_email("  first.last@mail.example.org "));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("@b.com"));
    assert!(!is_valid_email("a b@c.com"));
    assert!(!is_valid_email("a@@b.com"));
    assert!(!is_valid_email("a@.com"));
}

#[test]
fn profile_form_validation_messages() {
    let form = ProfileForm { name: " ".to_owned(), email: "a@b.com".to_owned(), ..ProfileForm::default() };
    assert_eq!(form.validate(), Err("Name is required."));
    let form = ProfileForm { name: "A".to_owned(), email: "nope".to_owned(), ..ProfileForm::default() };
    assert_eq!(form.validate(), Err("Enter a valid email address."));
    let form = ProfileForm { name: "A".to_owned(), email: "a@b.com".to_owned(), ..ProfileForm::default() };
    assert_eq!(form.validate(), Ok(()));
}

// =============================================================
// draft persistence
// =============================================================

#[test]
fn draft_round_trips_through_store() {
    let store = MemoryStore::new();
    complete_draft().save(&store);
    assert_eq!(PreferencesDraft::load(&store), complete_draft());
    PreferencesDraft::clear(&store);
    assert_eq!(PreferencesDraft::load(&store), PreferencesDraft::default());
}

#[test]
fn partial_draft_fills_missing_fields_with_defaults() {
    let store = MemoryStore::with_item(PREFS_DRAFT_KEY, r#"{"likes":["tea"]}"#);
    let draft = PreferencesDraft::load(&store);
    assert_eq!(draft.likes, strings(&["tea"]));
    assert_eq!(draft.color, "");
}

// =============================================================
// submission
// =============================================================

#[test]
fn submit_onboarding_success_clears_draft_and_marks_onboarded() {
    let transport = MockTransport::new();
    transport.respond(200, json!({ "message": "saved" }));
    let (session, api) = signed_in(&transport);
    session.update_current_user(UserPatch { onboarded: Some(false), ..UserPatch::default() });
    let store = MemoryStore::new();
    complete_draft().save(&store);

    let outcome = block_on(submit_onboarding(&api, &session, &store, &complete_draft()));
    assert_eq!(outcome, ScreenOutcome::Done(()));
    assert_eq!(store.get(PREFS_DRAFT_KEY), None);
    assert!(session.current_user().unwrap().onboarded);

    let sent = transport.requests();
    assert_eq!(sent[0].method, HttpMethod::Put);
    assert_eq!(sent[0].url, "http://api.test/user/preferences/u1");
    assert_eq!(
        sent[0].body,
        Some(json!({
            "likes": ["dark chocolate", "Manga"],
            "dislikes": ["licorice"],
            "allergies": [],
            "favoriteColor": "Lavender",
            "favoriteAnimal": "Otter"
        }))
    );
}

#[test]
fn submit_onboarding_failure_keeps_draft() {
    let transport = MockTransport::new();
    transport.respond(422, json!({ "message": "likes required" }));
    let (session, api) = signed_in(&transport);
    let store = MemoryStore::new();
    complete_draft().save(&store);

    let outcome = block_on(submit_onboarding(&api, &session, &store, &complete_draft()));
    assert_eq!(outcome, ScreenOutcome::Failed(DomainRequestError::ValidationFailed("likes required".to_owned())));
    assert_eq!(PreferencesDraft::load(&store), complete_draft());
}

#[test]
fn submit_onboarding_uses_echoed_user() {
    let transport = MockTransport::new();
    transport.respond(
        200,
        json!({ "data": { "user": { "_id": "u1", "name": "Alice B.", "email": "alice@example.com" } } }),
    );
    let (session, api) = signed_in(&transport);
    let store = MemoryStore::new();

    block_on(submit_onboarding(&api, &session, &store, &complete_draft()));
    let current = session.current_user().unwrap();
    assert_eq!(current.name, "Alice B.");
    assert!(current.onboarded);
}

#[test]
fn save_profile_updates_session_user_then_preferences() {
    let transport = MockTransport::new();
    transport.respond(200, json!({ "data": { "_id": "u1", "name": "Ally", "email": "ally@example.com" } }));
    transport.respond(200, json!({}));
    let (session, api) = signed_in(&transport);
    let form = ProfileForm {
        name: " Ally ".to_owned(),
        email: "ally@example.com".to_owned(),
        preferences: Preferences { likes: strings(&["tea", "Tea"]), ..Preferences::default() },
    };

    assert_eq!(block_on(save_profile(&api, &session, &form)), ScreenOutcome::Done(()));
    let current = session.current_user().unwrap();
    assert_eq!(current.name, "Ally");
    assert_eq!(current.email, "ally@example.com");
    assert!(current.onboarded);

    let sent = transport.requests();
    assert_eq!(sent[0].body, Some(json!({ "name": "Ally", "email": "ally@example.com" })));
    assert_eq!(sent[1].body, Some(json!({ "likes": ["tea"], "dislikes": [], "allergies": [] })));
}

#[test]
fn save_profile_unauthorized_stops_and_redirects() {
    let transport = MockTransport::new();
    transport.respond(401, serde_json::Value::Null);
    let (session, api) = signed_in(&transport);
    let form = ProfileForm { name: "A".to_owned(), email: "a@b.com".to_owned(), ..ProfileForm::default() };
    assert_eq!(block_on(save_profile(&api, &session, &form)), ScreenOutcome::Redirect(AppRoute::Entry));
    assert_eq!(transport.request_count(), 1);
}
