//! HTTP middleware for axum.
//!
//! This module contains middleware layers for cross-cutting concerns:
//!
//! - `auth` - Session gate and the authenticated-user extractor

pub mod auth;

pub use auth::{session_gate, AuthRejection, GateState, RequireAuth, LOGIN_PATH, PUBLIC_PATHS};
