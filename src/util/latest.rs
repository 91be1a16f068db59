//! Stale-response suppression for re-issued fetches.
//!
//! A screen calls `begin` before each request and checks `is_current` when the
//! response arrives; anything but the newest request's result is dropped.

#[cfg(test)]
#[path = "latest_test.rs"]
mod latest_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Clone, Debug, Default)]
pub struct RequestGeneration {
    current: Arc<AtomicU64>,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, superseding every earlier one.
    pub fn begin(&self) -> u64 {
        self.current.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.current.load(Ordering::SeqCst) == ticket
    }

    /// Supersede in-flight requests without starting a new one (screen
    /// teardown).
    pub fn cancel(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }
}
