//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the HTTP seam, `auth` maps the identity endpoints, `api`
//! maps game/user endpoints, and `types`/`error` define the shared schema.

pub mod api;
pub mod auth;
pub mod error;
pub mod transport;
pub mod types;
