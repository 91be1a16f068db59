pub mod chips_input;
pub mod header;
pub mod loading;
pub mod notice_banner;
pub mod onboarding_alert;
pub mod preferences_card;
pub mod route_gate;
