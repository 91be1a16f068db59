use super::*;

fn game_json(admin_ids: &str, admin_users: &str) -> String {
    format!(
        r#"{{
            "_id": "g1",
            "name": "Office 2026",
            "code": "ABC123",
            "numberOfWeeks": 4,
            "reminderDayBefore": 2,
            "adminIds": {admin_ids},
            "adminUsers": {admin_users},
            "players": [
                {{ "_id": "u1", "name": "Alice", "email": "alice@example.com" }},
                {{ "_id": "u2", "name": "Bob", "email": "bob@example.com" }}
            ]
        }}"#
    )
}

#[test]
fn user_summary_accepts_underscore_id() {
    let user: UserSummary =
        serde_json::from_str(r#"{"_id":"1","name":"A","email":"a@b.com"}"#).unwrap();
    assert_eq!(user.id, "1");
    assert!(!user.onboarded);
}

#[test]
fn user_patch_merges_only_present_fields() {
    let mut user = UserSummary {
        id: "1".to_owned(),
        name: "A".to_owned(),
        email: "a@b.com".to_owned(),
        onboarded: false,
    };
    UserPatch { onboarded: Some(true), ..UserPatch::default() }.apply(&mut user);
    assert_eq!(user.name, "A");
    assert_eq!(user.email, "a@b.com");
    assert!(user.onboarded);
}

#[test]
fn game_decodes_camel_case_document() {
    let game: Game = serde_json::from_str(&game_json(r#"["u1"]"#, "[]")).unwrap();
    assert_eq!(game.id, "g1");
    assert_eq!(game.number_of_weeks, 4);
    assert_eq!(game.reminder_day_before, 2);
    assert_eq!(game.players.len(), 2);
}

#[test]
fn game_admin_ids_fall_back_to_admin_users() {
    let game: Game = serde_json::from_str(&game_json("[]", r#"[{"_id":"u2","name":"Bob"}]"#)).unwrap();
    assert_eq!(game.admin_ids(), vec!["u2".to_owned()]);
    assert!(game.is_admin("u2"));
    assert!(!game.is_admin("u1"));
}

#[test]
fn set_admin_ids_drops_legacy_admin_users() {
    let mut game: Game = serde_json::from_str(&game_json("[]", r#"[{"_id":"u2","name":"Bob"}]"#)).unwrap();
    game.set_admin_ids(Vec::new());
    assert!(game.admin_ids().is_empty());
    assert!(!game.is_admin("u2"));
}

#[test]
fn game_membership_ignores_empty_user_id() {
    let game: Game = serde_json::from_str(&game_json(r#"["u1"]"#, "[]")).unwrap();
    assert!(game.is_player("u2"));
    assert!(!game.is_player(""));
    assert!(!game.is_admin(""));
}

#[test]
fn preferences_skip_missing_optionals_when_serialized() {
    let prefs = Preferences { likes: vec!["tea".to_owned()], ..Preferences::default() };
    let value = serde_json::to_value(&prefs).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "likes": ["tea"], "dislikes": [], "allergies": [] })
    );
}

#[test]
fn create_game_request_uses_camel_case_keys() {
    let req = CreateGameRequest {
        name: "Family".to_owned(),
        weeks: 3,
        reminder_days: 1,
        players: vec!["Alice".to_owned()],
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "name": "Family", "weeks": 3, "reminderDays": 1, "players": ["Alice"] })
    );
}
