//! Accident type lookup port.
//!
//! Types are managed out-of-band (seeded by migrations); this port is
//! read-only.

use crate::domain::accident::AccidentType;
use crate::domain::foundation::{AccidentTypeId, DomainError};
use async_trait::async_trait;

/// Read-only access to accident classifications.
#[async_trait]
pub trait AccidentTypeRepository: Send + Sync {
    /// Every type, ordered by id.
    async fn find_all(&self) -> Result<Vec<AccidentType>, DomainError>;

    /// Returns `None` if no type has this id.
    async fn find_by_id(&self, id: AccidentTypeId) -> Result<Option<AccidentType>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accident_type_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn AccidentTypeRepository) {}
    }
}
