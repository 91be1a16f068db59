//! Outcome of a screen-initiated request after the shared failure convention
//! has been applied.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use crate::net::error::DomainRequestError;
use crate::routes::AppRoute;
use crate::state::session::SessionStore;
use crate::util::latest::RequestGeneration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenOutcome<T> {
    Done(T),
    /// Show inline; the session is untouched.
    Failed(DomainRequestError),
    /// The session ended; navigate away.
    Redirect(AppRoute),
    /// A newer request for the same resource was issued; ignore.
    Stale,
}

impl<T> ScreenOutcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ScreenOutcome<U> {
        match self {
            Self::Done(value) => ScreenOutcome::Done(f(value)),
            Self::Failed(err) => ScreenOutcome::Failed(err),
            Self::Redirect(route) => ScreenOutcome::Redirect(route),
            Self::Stale => ScreenOutcome::Stale,
        }
    }
}

/// Route `result` through the session: unauthorized clears it and redirects,
/// everything else is returned for inline display.
pub fn settle<T>(session: &SessionStore, result: Result<T, DomainRequestError>) -> ScreenOutcome<T> {
    match result {
        Ok(value) => ScreenOutcome::Done(value),
        Err(err) => match session.handle_request_error(&err) {
            Some(route) => ScreenOutcome::Redirect(route),
            None => ScreenOutcome::Failed(err),
        },
    }
}

/// Like [`settle`], but drops results whose `ticket` has been superseded.
/// A superseded 401 still ends the session: the token is dead either way.
pub fn settle_latest<T>(
    session: &SessionStore,
    generation: &RequestGeneration,
    ticket: u64,
    result: Result<T, DomainRequestError>,
) -> ScreenOutcome<T> {
    if generation.is_current(ticket) {
        return settle(session, result);
    }
    match result {
        Err(err) if err.is_unauthorized() => settle(session, Err(err)),
        _ => ScreenOutcome::Stale,
    }
}
