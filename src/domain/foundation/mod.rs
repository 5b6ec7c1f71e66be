//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, authentication types, and error types
//! that form the vocabulary of the accidents domain.

mod auth;
mod errors;
mod ids;

pub use auth::{AuthError, AuthenticatedUser, Role, SessionToken, UserCredentials};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AccidentId, AccidentTypeId, RuleId};
