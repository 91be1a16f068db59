//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and cross-screen
//! policies from page and component logic.

pub mod auth;
pub mod browser;
pub mod latest;
pub mod optimistic;
pub mod storage;
