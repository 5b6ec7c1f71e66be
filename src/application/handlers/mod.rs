//! Application handlers.
//!
//! - `accident` - Accident service and reference-data lookups
//! - `auth` - Login and logout

pub mod accident;
pub mod auth;
