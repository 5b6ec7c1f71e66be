//! Accident repository port.
//!
//! Defines the contract for persisting and retrieving accidents together with
//! their rule citations. Implementations own the `accidents_rules` join rows:
//! callers only ever see an accident's `RuleSet`.
//!
//! # Design
//!
//! - **Absence is not an error**: lookups return `Option`, and update/delete
//!   report "no such row" as `false`
//! - **Replace-all children**: `update` rewrites every join row from the
//!   current rule set
//! - **Atomic writes**: each multi-statement write is all-or-nothing

use crate::domain::accident::{Accident, NewAccident};
use crate::domain::foundation::{AccidentId, DomainError};
use async_trait::async_trait;

/// Repository port for accident persistence.
#[async_trait]
pub trait AccidentRepository: Send + Sync {
    /// Save a new accident and its rule citations.
    ///
    /// Returns the accident with its storage-generated id.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure (nothing is written)
    async fn save(&self, accident: NewAccident) -> Result<Accident, DomainError>;

    /// Find an accident by its ID, with type and rules populated.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: AccidentId) -> Result<Option<Accident>, DomainError>;

    /// Overwrite an accident's columns and replace its rule citations.
    ///
    /// Returns `false` without touching join rows if no accident has this id.
    async fn update(&self, accident: &Accident) -> Result<bool, DomainError>;

    /// Delete an accident and its rule citations.
    ///
    /// Returns `false` if no accident had this id.
    async fn delete_by_id(&self, id: AccidentId) -> Result<bool, DomainError>;

    /// All accidents, in order of first appearance in the joined result.
    async fn find_all(&self) -> Result<Vec<Accident>, DomainError>;
}
