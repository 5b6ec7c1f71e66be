//! In-memory tables mirroring the PostgreSQL schema.
//!
//! Holds `accident_types`, `accident_rules`, `accidents` and the
//! `accidents_rules` join table, and produces the same flattened join rows
//! the SQL adapter reads, so both adapters share the row aggregator.
//! Useful for testing and for running without a database.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::accident::AccidentRow;
use crate::domain::foundation::{AccidentId, AccidentTypeId, RuleId};

#[derive(Debug, Clone)]
pub(super) struct AccidentRecord {
    pub name: String,
    pub text: String,
    pub address: String,
    pub type_id: AccidentTypeId,
}

#[derive(Debug, Default)]
pub(super) struct Tables {
    pub accident_types: BTreeMap<AccidentTypeId, String>,
    pub rules: BTreeMap<RuleId, String>,
    pub accidents: BTreeMap<AccidentId, AccidentRecord>,
    pub accidents_rules: Vec<(AccidentId, RuleId)>,
    next_accident_id: i32,
    next_type_id: i32,
    next_rule_id: i32,
}

impl Tables {
    pub fn next_accident_id(&mut self) -> AccidentId {
        self.next_accident_id += 1;
        AccidentId::new(self.next_accident_id)
    }

    /// Left-joins one accident against its type and rules.
    pub fn rows_for(&self, id: AccidentId, record: &AccidentRecord) -> Vec<AccidentRow> {
        let type_name = self.accident_types.get(&record.type_id).cloned();
        let base = AccidentRow {
            accident_id: id,
            name: record.name.clone(),
            text: record.text.clone(),
            address: record.address.clone(),
            type_id: type_name.as_ref().map(|_| record.type_id),
            type_name,
            rule_id: None,
            rule_name: None,
        };

        let mut rule_ids: Vec<RuleId> = self
            .accidents_rules
            .iter()
            .filter(|(accident_id, _)| *accident_id == id)
            .map(|(_, rule_id)| *rule_id)
            .collect();
        rule_ids.sort();

        if rule_ids.is_empty() {
            return vec![base];
        }

        rule_ids
            .into_iter()
            .map(|rule_id| {
                let rule_name = self.rules.get(&rule_id).cloned();
                AccidentRow {
                    rule_id: rule_name.as_ref().map(|_| rule_id),
                    rule_name,
                    ..base.clone()
                }
            })
            .collect()
    }
}

/// Shared handle to the in-memory tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatabase {
    pub(super) tables: Arc<RwLock<Tables>>,
}

impl InMemoryDatabase {
    /// Create an empty database
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a database holding the same reference data as the seed migration.
    pub async fn seeded() -> Self {
        let db = Self::new();
        for name in ["Two cars", "Car and person", "Car and bicycle"] {
            db.insert_accident_type(name).await;
        }
        for name in ["Article 1", "Article 2", "Article 3"] {
            db.insert_rule(name).await;
        }
        db
    }

    /// Adds an accident type and returns its id.
    pub async fn insert_accident_type(&self, name: impl Into<String>) -> AccidentTypeId {
        let mut tables = self.tables.write().await;
        tables.next_type_id += 1;
        let id = AccidentTypeId::new(tables.next_type_id);
        tables.accident_types.insert(id, name.into());
        id
    }

    /// Adds a rule and returns its id.
    pub async fn insert_rule(&self, name: impl Into<String>) -> RuleId {
        let mut tables = self.tables.write().await;
        tables.next_rule_id += 1;
        let id = RuleId::new(tables.next_rule_id);
        tables.rules.insert(id, name.into());
        id
    }

    /// Number of rows in the `accidents_rules` join table.
    pub async fn join_row_count(&self) -> usize {
        self.tables.read().await.accidents_rules.len()
    }

    /// Number of rows in the `accidents` table.
    pub async fn accident_count(&self) -> usize {
        self.tables.read().await.accidents.len()
    }
}
