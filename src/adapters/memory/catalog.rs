//! In-memory implementations of the reference-data lookups.

use async_trait::async_trait;

use crate::domain::accident::{AccidentType, Rule};
use crate::domain::foundation::{AccidentTypeId, DomainError, RuleId};
use crate::ports::{AccidentTypeRepository, RuleRepository};

use super::database::InMemoryDatabase;

/// Accident type lookups backed by [`InMemoryDatabase`].
#[derive(Debug, Clone)]
pub struct InMemoryAccidentTypeRepository {
    db: InMemoryDatabase,
}

impl InMemoryAccidentTypeRepository {
    pub fn new(db: InMemoryDatabase) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccidentTypeRepository for InMemoryAccidentTypeRepository {
    async fn find_all(&self) -> Result<Vec<AccidentType>, DomainError> {
        let tables = self.db.tables.read().await;
        Ok(tables
            .accident_types
            .iter()
            .map(|(id, name)| AccidentType::new(*id, name.clone()))
            .collect())
    }

    async fn find_by_id(&self, id: AccidentTypeId) -> Result<Option<AccidentType>, DomainError> {
        let tables = self.db.tables.read().await;
        Ok(tables
            .accident_types
            .get(&id)
            .map(|name| AccidentType::new(id, name.clone())))
    }
}

/// Rule lookups backed by [`InMemoryDatabase`].
#[derive(Debug, Clone)]
pub struct InMemoryRuleRepository {
    db: InMemoryDatabase,
}

impl InMemoryRuleRepository {
    pub fn new(db: InMemoryDatabase) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RuleRepository for InMemoryRuleRepository {
    async fn find_all(&self) -> Result<Vec<Rule>, DomainError> {
        let tables = self.db.tables.read().await;
        Ok(tables
            .rules
            .iter()
            .map(|(id, name)| Rule::new(*id, name.clone()))
            .collect())
    }

    async fn find_by_ids(&self, ids: &[RuleId]) -> Result<Vec<Rule>, DomainError> {
        let tables = self.db.tables.read().await;
        Ok(tables
            .rules
            .iter()
            .filter(|(id, _)| ids.contains(id))
            .map(|(id, name)| Rule::new(*id, name.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn types_are_listed_in_id_order() {
        let db = InMemoryDatabase::seeded().await;
        let repo = InMemoryAccidentTypeRepository::new(db);

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();

        assert_eq!(names, vec!["Two cars", "Car and person", "Car and bicycle"]);
    }

    #[tokio::test]
    async fn unknown_type_is_absent() {
        let repo = InMemoryAccidentTypeRepository::new(InMemoryDatabase::seeded().await);
        assert!(repo.find_by_id(AccidentTypeId::new(10)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_by_ids_skips_unknown_ids() {
        let repo = InMemoryRuleRepository::new(InMemoryDatabase::seeded().await);

        let rules = repo
            .find_by_ids(&[RuleId::new(3), RuleId::new(1), RuleId::new(77)])
            .await
            .unwrap();

        let ids: Vec<i32> = rules.iter().map(|r| r.id.value()).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
