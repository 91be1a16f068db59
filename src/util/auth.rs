//! Route guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed page is wrapped in `RouteGate`, which applies `decide` to the
//! current session status. Keeping the decision a pure function makes the
//! gating rules testable without a router.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::routes::AppRoute;
use crate::state::session::SessionStatus;

/// What a screen demands of the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteRequirement {
    /// Only for logged-in users.
    Authenticated,
    /// Only for anonymous users (login/signup).
    GuestOnly,
    /// Anyone, once the session has settled.
    Public,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    /// Session still hydrating: show a neutral placeholder, do not redirect.
    Placeholder,
    Redirect(AppRoute),
}

/// Decide what to do with a navigation to a screen with `requirement`.
///
/// The attempted destination is never remembered: anonymous users always
/// land on the entry screen.
pub fn decide(status: SessionStatus, requirement: RouteRequirement) -> GuardDecision {
    match (status, requirement) {
        _ if !status.is_settled() => GuardDecision::Placeholder,
        (SessionStatus::Anonymous, RouteRequirement::Authenticated) => GuardDecision::Redirect(AppRoute::Entry),
        (SessionStatus::Authenticated, RouteRequirement::GuestOnly) => GuardDecision::Redirect(AppRoute::Dashboard),
        _ => GuardDecision::Render,
    }
}
