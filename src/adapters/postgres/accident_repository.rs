//! PostgreSQL implementation of AccidentRepository.
//!
//! Accidents are read with a single four-table left join and folded back into
//! nested objects by the row aggregator. Rule citations live in the
//! `accidents_rules` join table and are rewritten wholesale on update.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, Row, Transaction};

use crate::domain::accident::{aggregate_rows, Accident, AccidentRow, NewAccident, RuleSet};
use crate::domain::foundation::{AccidentId, AccidentTypeId, DomainError, RuleId};
use crate::ports::AccidentRepository;

const SELECT_ALL_ACCIDENTS: &str = r#"
    SELECT ac.id AS accident_id, ac.name, ac.text, ac.address,
           at.id AS type_id, at.type_name,
           r.id AS rule_id, r.name AS rule_name
    FROM accidents AS ac
    LEFT JOIN accident_types AS at ON ac.type_id = at.id
    LEFT JOIN accidents_rules AS ar ON ac.id = ar.accident_id
    LEFT JOIN accident_rules AS r ON ar.rule_id = r.id
    ORDER BY ac.id, r.id
"#;

const SELECT_ACCIDENT_BY_ID: &str = r#"
    SELECT ac.id AS accident_id, ac.name, ac.text, ac.address,
           at.id AS type_id, at.type_name,
           r.id AS rule_id, r.name AS rule_name
    FROM accidents AS ac
    LEFT JOIN accident_types AS at ON ac.type_id = at.id
    LEFT JOIN accidents_rules AS ar ON ac.id = ar.accident_id
    LEFT JOIN accident_rules AS r ON ar.rule_id = r.id
    WHERE ac.id = $1
    ORDER BY r.id
"#;

/// PostgreSQL implementation of AccidentRepository.
#[derive(Clone)]
pub struct PostgresAccidentRepository {
    pool: PgPool,
}

impl PostgresAccidentRepository {
    /// Creates a new PostgresAccidentRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccidentRepository for PostgresAccidentRepository {
    async fn save(&self, accident: NewAccident) -> Result<Accident, DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::database(format!("Failed to begin transaction: {}", e))
        })?;

        let row = sqlx::query(
            r#"
            INSERT INTO accidents (name, text, address, type_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&accident.name)
        .bind(&accident.text)
        .bind(&accident.address)
        .bind(accident.accident_type.id.value())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert accident: {}", e)))?;

        let id: i32 = row
            .try_get("id")
            .map_err(|e| DomainError::database(format!("Failed to read generated id: {}", e)))?;
        let id = AccidentId::new(id);

        insert_rule_links(&mut tx, id, &accident.rules).await?;

        tx.commit().await.map_err(|e| {
            DomainError::database(format!("Failed to commit transaction: {}", e))
        })?;

        tracing::debug!(accident_id = %id, rules = accident.rules.len(), "Saved accident");
        Ok(accident.into_accident(id))
    }

    async fn find_by_id(&self, id: AccidentId) -> Result<Option<Accident>, DomainError> {
        let rows = sqlx::query(SELECT_ACCIDENT_BY_ID)
            .bind(id.value())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch accident: {}", e)))?;

        let rows = rows
            .iter()
            .map(row_to_accident_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(aggregate_rows(rows)?.into_iter().find(|a| a.id == id))
    }

    async fn update(&self, accident: &Accident) -> Result<bool, DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::database(format!("Failed to begin transaction: {}", e))
        })?;

        let result = sqlx::query(
            r#"
            UPDATE accidents SET
                name = $2,
                text = $3,
                address = $4,
                type_id = $5
            WHERE id = $1
            "#,
        )
        .bind(accident.id.value())
        .bind(&accident.name)
        .bind(&accident.text)
        .bind(&accident.address)
        .bind(accident.accident_type.id.value())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update accident: {}", e)))?;

        if result.rows_affected() == 0 {
            tracing::debug!(accident_id = %accident.id, "Update matched no accident");
            return Ok(false);
        }

        delete_rule_links(&mut tx, accident.id).await?;
        insert_rule_links(&mut tx, accident.id, &accident.rules).await?;

        tx.commit().await.map_err(|e| {
            DomainError::database(format!("Failed to commit transaction: {}", e))
        })?;

        Ok(true)
    }

    async fn delete_by_id(&self, id: AccidentId) -> Result<bool, DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::database(format!("Failed to begin transaction: {}", e))
        })?;

        // Join rows first (foreign key constraint)
        delete_rule_links(&mut tx, id).await?;

        let result = sqlx::query("DELETE FROM accidents WHERE id = $1")
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete accident: {}", e)))?;

        tx.commit().await.map_err(|e| {
            DomainError::database(format!("Failed to commit transaction: {}", e))
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_all(&self) -> Result<Vec<Accident>, DomainError> {
        let rows = sqlx::query(SELECT_ALL_ACCIDENTS)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch accidents: {}", e)))?;

        let rows = rows
            .iter()
            .map(row_to_accident_row)
            .collect::<Result<Vec<_>, _>>()?;

        aggregate_rows(rows)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Helper Functions
// ════════════════════════════════════════════════════════════════════════════════

async fn insert_rule_links(
    tx: &mut Transaction<'_, Postgres>,
    accident_id: AccidentId,
    rules: &RuleSet,
) -> Result<(), DomainError> {
    for rule_id in rules.ids() {
        sqlx::query("INSERT INTO accidents_rules (accident_id, rule_id) VALUES ($1, $2)")
            .bind(accident_id.value())
            .bind(rule_id.value())
            .execute(&mut **tx)
            .await
            .map_err(|e| {
                DomainError::database(format!("Failed to insert accident rule: {}", e))
                    .with_detail("rule_id", rule_id.to_string())
            })?;
    }

    Ok(())
}

async fn delete_rule_links(
    tx: &mut Transaction<'_, Postgres>,
    accident_id: AccidentId,
) -> Result<(), DomainError> {
    sqlx::query("DELETE FROM accidents_rules WHERE accident_id = $1")
        .bind(accident_id.value())
        .execute(&mut **tx)
        .await
        .map_err(|e| DomainError::database(format!("Failed to delete accident rules: {}", e)))?;

    Ok(())
}

fn row_to_accident_row(row: &PgRow) -> Result<AccidentRow, DomainError> {
    let column = |name: &str, e: sqlx::Error| {
        DomainError::database(format!("Failed to get {}: {}", name, e))
    };

    let accident_id: i32 = row.try_get("accident_id").map_err(|e| column("accident_id", e))?;
    let name: String = row.try_get("name").map_err(|e| column("name", e))?;
    let text: String = row.try_get("text").map_err(|e| column("text", e))?;
    let address: String = row.try_get("address").map_err(|e| column("address", e))?;
    let type_id: Option<i32> = row.try_get("type_id").map_err(|e| column("type_id", e))?;
    let type_name: Option<String> = row.try_get("type_name").map_err(|e| column("type_name", e))?;
    let rule_id: Option<i32> = row.try_get("rule_id").map_err(|e| column("rule_id", e))?;
    let rule_name: Option<String> = row.try_get("rule_name").map_err(|e| column("rule_name", e))?;

    Ok(AccidentRow {
        accident_id: AccidentId::new(accident_id),
        name,
        text,
        address,
        type_id: type_id.map(AccidentTypeId::new),
        type_name,
        rule_id: rule_id.map(RuleId::new),
        rule_name,
    })
}
