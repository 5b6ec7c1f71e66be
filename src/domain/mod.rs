//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, auth types, errors)
//! - `accident` - Accidents, accident types, rules, and row aggregation

pub mod accident;
pub mod foundation;
