//! Folds flattened join rows into accidents.
//!
//! Accident queries join four tables:
//!
//! ```text
//! accidents ⟕ accident_types ⟕ accidents_rules ⟕ accident_rules
//! ```
//!
//! which yields one row per (accident, rule) pair, or a single row with null
//! rule columns for an accident that cites no rules. The aggregator turns
//! that back into one `Accident` per id with its rule set populated.
//!
//! Output order is the order in which each accident id first appears.

use std::collections::HashMap;

use crate::domain::foundation::{AccidentId, AccidentTypeId, DomainError, RuleId};

use super::{Accident, AccidentType, Rule, RuleSet};

/// One flattened row of the accident join.
///
/// Type and rule columns come from left joins and may be null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccidentRow {
    pub accident_id: AccidentId,
    pub name: String,
    pub text: String,
    pub address: String,
    pub type_id: Option<AccidentTypeId>,
    pub type_name: Option<String>,
    pub rule_id: Option<RuleId>,
    pub rule_name: Option<String>,
}

struct AccidentBuilder {
    id: AccidentId,
    name: String,
    text: String,
    address: String,
    accident_type: AccidentType,
    rules: RuleSet,
}

impl AccidentBuilder {
    fn build(self) -> Accident {
        Accident {
            id: self.id,
            name: self.name,
            text: self.text,
            address: self.address,
            accident_type: self.accident_type,
            rules: self.rules,
        }
    }
}

/// Accumulates rows for a single query execution.
#[derive(Default)]
pub struct RowAggregator {
    builders: Vec<AccidentBuilder>,
    index: HashMap<AccidentId, usize>,
}

impl RowAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one row into the accumulated accidents.
    ///
    /// # Errors
    ///
    /// `DatabaseError` if the row's type columns are null: every stored
    /// accident must reference an existing type.
    pub fn push(&mut self, row: AccidentRow) -> Result<(), DomainError> {
        let slot = match self.index.get(&row.accident_id) {
            Some(&slot) => slot,
            None => {
                let accident_type = match (row.type_id, row.type_name) {
                    (Some(id), Some(name)) => AccidentType::new(id, name),
                    _ => {
                        return Err(DomainError::database(format!(
                            "Accident {} references a missing accident type",
                            row.accident_id
                        ))
                        .with_detail("accident_id", row.accident_id.to_string()))
                    }
                };
                self.builders.push(AccidentBuilder {
                    id: row.accident_id,
                    name: row.name,
                    text: row.text,
                    address: row.address,
                    accident_type,
                    rules: RuleSet::new(),
                });
                let slot = self.builders.len() - 1;
                self.index.insert(row.accident_id, slot);
                slot
            }
        };

        // A join row pointing at a deleted rule behaves like a left-join miss.
        if let (Some(rule_id), Some(rule_name)) = (row.rule_id, row.rule_name) {
            self.builders[slot].rules.insert(Rule::new(rule_id, rule_name));
        }

        Ok(())
    }

    /// Number of distinct accidents seen so far.
    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// Consumes the aggregator, yielding accidents in first-seen order.
    pub fn finish(self) -> Vec<Accident> {
        self.builders.into_iter().map(AccidentBuilder::build).collect()
    }
}

/// Aggregates a complete row set.
pub fn aggregate_rows<I>(rows: I) -> Result<Vec<Accident>, DomainError>
where
    I: IntoIterator<Item = AccidentRow>,
{
    let mut aggregator = RowAggregator::new();
    for row in rows {
        aggregator.push(row)?;
    }
    Ok(aggregator.finish())
}
