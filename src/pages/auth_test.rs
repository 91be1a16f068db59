use super::*;

#[test]
fn login_needs_email_and_password_only() {
    assert_eq!(validate_auth_form(AuthMode::Login, "", "a@b.com", "secret"), Ok(()));
}

#[test]
fn signup_requires_name() {
    assert_eq!(validate_auth_form(AuthMode::Signup, "  ", "a@b.com", "secret"), Err("Name is required."));
    assert_eq!(validate_auth_form(AuthMode::Signup, "Ann", "a@b.com", "secret"), Ok(()));
}

#[test]
fn rejects_malformed_email() {
    assert!(validate_auth_form(AuthMode::Login, "", "not-an-email", "secret").is_err());
}

#[test]
fn rejects_short_password() {
    assert_eq!(
        validate_auth_form(AuthMode::Login, "", "a@b.com", "12345"),
        Err("Password must be at least 6 characters.")
    );
}

#[test]
fn signup_lands_on_onboarding_and_login_on_dashboard() {
    assert_eq!(AuthMode::Signup.landing(), AppRoute::Onboarding);
    assert_eq!(AuthMode::Login.landing(), AppRoute::Dashboard);
    assert_eq!(AuthMode::Login.toggled(), AuthMode::Signup);
}
