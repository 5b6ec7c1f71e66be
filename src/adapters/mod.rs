//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - PostgreSQL repositories and pool setup
//! - `memory` - In-process repositories sharing one seeded table set
//! - `auth` - Password hashing, the configured account, login sessions
//! - `http` - axum routes, the session gate, the login form

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
