//! Optimistic mutations with rollback.
//!
//! Apply locally, send the request, undo that one edit when the request
//! fails. Roster edits in the lobby use this so the list updates
//! before the server answers.

#[cfg(test)]
#[path = "optimistic_test.rs"]
mod optimistic_test;

use std::future::Future;
use std::sync::{Mutex, PoisonError};

use leptos::prelude::{GetUntracked, RwSignal, Set};

use crate::net::error::DomainRequestError;

/// A readable/writable cell holding UI state.
pub trait StateCell<T> {
    fn load(&self) -> T;
    fn store(&self, value: T);
}

impl<T: Clone + Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn load(&self) -> T {
        self.get_untracked()
    }

    fn store(&self, value: T) {
        self.set(value);
    }
}

impl<T: Clone> StateCell<T> for Mutex<T> {
    fn load(&self) -> T {
        self.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn store(&self, value: T) {
        *self.lock().unwrap_or_else(PoisonError::into_inner) = value;
    }
}

/// Apply `apply` to the slot immediately, then await `request`. On failure
/// `revert` is applied to the slot's *current* value, so edits that landed in
/// the meantime (another optimistic edit, a reload) survive. With nothing else
/// in flight the slot ends up exactly as before.
///
/// # Errors
///
/// Returns the request's [`DomainRequestError`] after rolling back.
pub async fn optimistic<T, S, R, Fut>(
    slot: &S,
    apply: impl FnOnce(&mut T),
    revert: impl FnOnce(&mut T),
    request: Fut,
) -> Result<R, DomainRequestError>
where
    S: StateCell<T> + ?Sized,
    Fut: Future<Output = Result<R, DomainRequestError>>,
{
    let mut next = slot.load();
    apply(&mut next);
    slot.store(next);

    match request.await {
        Ok(value) => Ok(value),
        Err(err) => {
            log::debug!("optimistic update rolled back: {err}");
            let mut current = slot.load();
            revert(&mut current);
            slot.store(current);
            Err(err)
        }
    }
}
