//! Accidents - traffic accident log with rule citations
//!
//! Records accidents, classifies them by type, and cites the violated rules.
//! Every page except the login form sits behind a session-cookie gate.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
