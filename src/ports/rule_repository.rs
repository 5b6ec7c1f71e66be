//! Rule lookup port.

use crate::domain::accident::Rule;
use crate::domain::foundation::{DomainError, RuleId};
use async_trait::async_trait;

/// Read-only access to the pre-seeded rules.
#[async_trait]
pub trait RuleRepository: Send + Sync {
    /// Every rule, ordered by id.
    async fn find_all(&self) -> Result<Vec<Rule>, DomainError>;

    /// The rules whose ids appear in `ids`, ordered by id.
    ///
    /// Unknown ids are simply absent from the result.
    async fn find_by_ids(&self, ids: &[RuleId]) -> Result<Vec<Rule>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn RuleRepository) {}
    }
}
