use super::*;
use crate::test_helpers::{MockTransport, config, game, game_json, player};
use futures::executor::block_on;

struct FixedToken(Option<&'static str>);

impl TokenSource for FixedToken {
    fn token(&self) -> Option<String> {
        self.0.map(str::to_owned)
    }
}

fn client(transport: &Arc<MockTransport>, token: Option<&'static str>) -> ApiClient {
    ApiClient::new(transport.clone(), config(), Arc::new(FixedToken(token)))
}

#[test]
fn endpoint_paths_format_expected_routes() {
    assert_eq!(game_action_path("g1", "draw"), "/game/g1/draw");
    assert_eq!(game_member_action_path("g1", "admin/add", "u2"), "/game/g1/admin/add/u2");
    assert_eq!(game_by_code_path("ABC123"), "/game/code/ABC123");
    assert_eq!(preferences_path("u1"), "/user/preferences/u1");
}

#[test]
fn game_code_path_strips_separators_and_queries() {
    assert_eq!(game_by_code_path("ab/../c?x=1"), "/game/code/ABCX1");
    assert_eq!(game_by_code_path("zz%2Fzz"), "/game/code/ZZ2FZZ");
}

#[test]
fn missing_token_fails_without_network() {
    let transport = MockTransport::new();
    let err = block_on(client(&transport, None).my_games()).unwrap_err();
    assert_eq!(err, DomainRequestError::Unauthorized);
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn my_games_reads_data_array_with_bearer() {
    let transport = MockTransport::new();
    let g = game(&["u1"], vec![player("u1", "Alice")]);
    transport.respond(200, json!({ "data": [game_json(&g)] }));
    let games = block_on(client(&transport, Some("T1")).my_games()).unwrap();
    assert_eq!(games, vec![g]);
    let sent = transport.requests();
    assert_eq!(sent[0].url, "http://api.test/game/getmygames");
    assert_eq!(sent[0].bearer.as_deref(), Some("T1"));
}

#[test]
fn my_games_401_is_unauthorized() {
    let transport = MockTransport::new();
    transport.respond(401, json!({ "message": "jwt expired" }));
    let err = block_on(client(&transport, Some("T1")).my_games()).unwrap_err();
    assert_eq!(err, DomainRequestError::Unauthorized);
}

#[test]
fn game_by_code_404_uses_fallback_message() {
    let transport = MockTransport::new();
    transport.respond(404, serde_json::Value::Null);
    let err = block_on(client(&transport, Some("T1")).game_by_code("ZZZZ")).unwrap_err();
    assert_eq!(err, DomainRequestError::NotFound("Invalid code or game not found.".to_owned()));
    assert_eq!(transport.requests()[0].url, "http://api.test/game/code/ZZZZ");
}

#[test]
fn malformed_success_body_is_server_error() {
    let transport = MockTransport::new();
    transport.respond(200, json!({ "unexpected": true }));
    let err = block_on(client(&transport, Some("T1")).my_games()).unwrap_err();
    assert_eq!(err, DomainRequestError::malformed());
}

#[test]
fn remove_player_posts_member_path_and_reads_ack() {
    let transport = MockTransport::new();
    transport.respond(200, json!({ "message": "Player removed." }));
    let ack = block_on(client(&transport, Some("T1")).remove_player("g1", "u2")).unwrap();
    assert_eq!(ack.message.as_deref(), Some("Player removed."));
    let sent = transport.requests();
    assert_eq!(sent[0].method, HttpMethod::Post);
    assert_eq!(sent[0].url, "http://api.test/game/g1/remove/u2");
    assert_eq!(sent[0].body, None);
}

#[test]
fn acknowledgement_tolerates_empty_body() {
    let transport = MockTransport::new();
    transport.respond(204, serde_json::Value::Null);
    let ack = block_on(client(&transport, Some("T1")).draw("g1")).unwrap();
    assert_eq!(ack, Ack::default());
}

#[test]
fn join_conflict_carries_server_message() {
    let transport = MockTransport::new();
    transport.respond(409, json!({ "message": "Already joined" }));
    let err = block_on(client(&transport, Some("T1")).join_game("g1")).unwrap_err();
    assert_eq!(err, DomainRequestError::Conflict("Already joined".to_owned()));
}

#[test]
fn create_game_posts_body_and_returns_game() {
    let transport = MockTransport::new();
    let g = game(&["u1"], Vec::new());
    transport.respond(201, json!({ "data": game_json(&g) }));
    let request = CreateGameRequest {
        name: "Office 2026".to_owned(),
        weeks: 4,
        reminder_days: 2,
        players: vec!["Alice".to_owned()],
    };
    let created = block_on(client(&transport, Some("T1")).create_game(&request)).unwrap();
    assert_eq!(created.code, "ABC123");
    assert_eq!(
        transport.requests()[0].body,
        Some(json!({ "name": "Office 2026", "weeks": 4, "reminderDays": 2, "players": ["Alice"] }))
    );
}

#[test]
fn save_preferences_returns_echoed_user() {
    let transport = MockTransport::new();
    transport.respond(
        200,
        json!({ "data": { "user": { "_id": "u1", "name": "A", "email": "a@b.com", "onboarded": true } } }),
    );
    let prefs = Preferences { likes: vec!["tea".to_owned()], ..Preferences::default() };
    let user = block_on(client(&transport, Some("T1")).save_preferences("u1", &prefs)).unwrap();
    assert!(user.unwrap().onboarded);
    assert_eq!(transport.requests()[0].method, HttpMethod::Put);
}

#[test]
fn save_preferences_without_echo_returns_none() {
    let transport = MockTransport::new();
    transport.respond(200, json!({ "message": "ok" }));
    let user = block_on(client(&transport, Some("T1")).save_preferences("u1", &Preferences::default())).unwrap();
    assert_eq!(user, None);
}

#[test]
fn update_profile_patches_me() {
    let transport = MockTransport::new();
    transport.respond(200, json!({ "data": { "id": "u1", "name": "Ann", "email": "ann@b.com" } }));
    let update = ProfileUpdate { name: "Ann".to_owned(), email: "ann@b.com".to_owned() };
    let user = block_on(client(&transport, Some("T1")).update_profile(&update)).unwrap();
    assert_eq!(user.name, "Ann");
    let sent = transport.requests();
    assert_eq!(sent[0].method, HttpMethod::Patch);
    assert_eq!(sent[0].url, "http://api.test/user/me");
}
