use super::*;

#[test]
fn error_lines_lists_each_missing_field() {
    let lines = error_lines(PreferenceErrors { likes: true, color: false, animal: true });
    assert_eq!(lines, vec!["Add at least one thing you like.", "Favorite animal is required."]);
}

#[test]
fn error_lines_empty_when_nothing_missing() {
    assert!(error_lines(PreferenceErrors::default()).is_empty());
}
