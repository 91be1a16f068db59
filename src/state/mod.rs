//! Client-side state and the request flows that mutate it.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `games`, `lobby`, `preferences`) so
//! pages depend on small focused models. Flows are plain async functions over
//! injected clients, keeping them testable without a browser.

pub mod games;
pub mod lobby;
pub mod notice;
pub mod preferences;
pub mod request;
pub mod session;
