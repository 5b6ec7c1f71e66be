//! PostgreSQL implementation of RuleRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::accident::Rule;
use crate::domain::foundation::{DomainError, RuleId};
use crate::ports::RuleRepository;

/// PostgreSQL implementation of RuleRepository.
#[derive(Clone)]
pub struct PostgresRuleRepository {
    pool: PgPool,
}

impl PostgresRuleRepository {
    /// Creates a new PostgresRuleRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RuleRepository for PostgresRuleRepository {
    async fn find_all(&self) -> Result<Vec<Rule>, DomainError> {
        let rows = sqlx::query("SELECT id, name FROM accident_rules ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch rules: {}", e)))?;

        rows.iter().map(row_to_rule).collect()
    }

    async fn find_by_ids(&self, ids: &[RuleId]) -> Result<Vec<Rule>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let raw: Vec<i32> = ids.iter().map(RuleId::value).collect();
        let rows = sqlx::query("SELECT id, name FROM accident_rules WHERE id = ANY($1) ORDER BY id")
            .bind(raw)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch rules: {}", e)))?;

        rows.iter().map(row_to_rule).collect()
    }
}

fn row_to_rule(row: &PgRow) -> Result<Rule, DomainError> {
    let id: i32 = row
        .try_get("id")
        .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| DomainError::database(format!("Failed to get name: {}", e)))?;

    Ok(Rule::new(RuleId::new(id), name))
}
