//! In-memory implementation of AccidentRepository.

use async_trait::async_trait;

use crate::domain::accident::{aggregate_rows, Accident, NewAccident, RuleSet};
use crate::domain::foundation::{AccidentId, AccidentTypeId, DomainError};
use crate::ports::AccidentRepository;

use super::database::{AccidentRecord, InMemoryDatabase, Tables};

/// Accident storage backed by [`InMemoryDatabase`].
///
/// Enforces the same foreign keys as the SQL schema; a write that would
/// violate one fails before anything is changed.
#[derive(Debug, Clone)]
pub struct InMemoryAccidentRepository {
    db: InMemoryDatabase,
}

impl InMemoryAccidentRepository {
    pub fn new(db: InMemoryDatabase) -> Self {
        Self { db }
    }
}

fn check_references(
    tables: &Tables,
    type_id: AccidentTypeId,
    rules: &RuleSet,
) -> Result<(), DomainError> {
    if !tables.accident_types.contains_key(&type_id) {
        return Err(DomainError::database(format!(
            "Foreign key violation: accident type {} does not exist",
            type_id
        )));
    }
    if let Some(missing) = rules.ids().find(|id| !tables.rules.contains_key(id)) {
        return Err(DomainError::database(format!(
            "Foreign key violation: rule {} does not exist",
            missing
        )));
    }
    Ok(())
}

#[async_trait]
impl AccidentRepository for InMemoryAccidentRepository {
    async fn save(&self, accident: NewAccident) -> Result<Accident, DomainError> {
        let mut tables = self.db.tables.write().await;
        check_references(&tables, accident.accident_type.id, &accident.rules)?;

        let id = tables.next_accident_id();
        tables.accidents.insert(
            id,
            AccidentRecord {
                name: accident.name.clone(),
                text: accident.text.clone(),
                address: accident.address.clone(),
                type_id: accident.accident_type.id,
            },
        );
        let links: Vec<_> = accident.rules.ids().map(|rule_id| (id, rule_id)).collect();
        tables.accidents_rules.extend(links);

        Ok(accident.into_accident(id))
    }

    async fn find_by_id(&self, id: AccidentId) -> Result<Option<Accident>, DomainError> {
        let tables = self.db.tables.read().await;
        let Some(record) = tables.accidents.get(&id) else {
            return Ok(None);
        };

        let rows = tables.rows_for(id, record);
        Ok(aggregate_rows(rows)?.into_iter().next())
    }

    async fn update(&self, accident: &Accident) -> Result<bool, DomainError> {
        let mut tables = self.db.tables.write().await;
        if !tables.accidents.contains_key(&accident.id) {
            return Ok(false);
        }
        check_references(&tables, accident.accident_type.id, &accident.rules)?;

        tables.accidents.insert(
            accident.id,
            AccidentRecord {
                name: accident.name.clone(),
                text: accident.text.clone(),
                address: accident.address.clone(),
                type_id: accident.accident_type.id,
            },
        );
        tables.accidents_rules.retain(|(accident_id, _)| *accident_id != accident.id);
        let links: Vec<_> = accident
            .rules
            .ids()
            .map(|rule_id| (accident.id, rule_id))
            .collect();
        tables.accidents_rules.extend(links);

        Ok(true)
    }

    async fn delete_by_id(&self, id: AccidentId) -> Result<bool, DomainError> {
        let mut tables = self.db.tables.write().await;
        tables.accidents_rules.retain(|(accident_id, _)| *accident_id != id);
        Ok(tables.accidents.remove(&id).is_some())
    }

    async fn find_all(&self) -> Result<Vec<Accident>, DomainError> {
        let tables = self.db.tables.read().await;
        let rows = tables
            .accidents
            .iter()
            .flat_map(|(id, record)| tables.rows_for(*id, record));

        aggregate_rows(rows)
    }
}
