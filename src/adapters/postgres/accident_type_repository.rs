//! PostgreSQL implementation of AccidentTypeRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::accident::AccidentType;
use crate::domain::foundation::{AccidentTypeId, DomainError};
use crate::ports::AccidentTypeRepository;

/// PostgreSQL implementation of AccidentTypeRepository.
#[derive(Clone)]
pub struct PostgresAccidentTypeRepository {
    pool: PgPool,
}

impl PostgresAccidentTypeRepository {
    /// Creates a new PostgresAccidentTypeRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccidentTypeRepository for PostgresAccidentTypeRepository {
    async fn find_all(&self) -> Result<Vec<AccidentType>, DomainError> {
        let rows = sqlx::query("SELECT id, type_name FROM accident_types ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                DomainError::database(format!("Failed to fetch accident types: {}", e))
            })?;

        rows.iter().map(row_to_accident_type).collect()
    }

    async fn find_by_id(&self, id: AccidentTypeId) -> Result<Option<AccidentType>, DomainError> {
        let row = sqlx::query("SELECT id, type_name FROM accident_types WHERE id = $1")
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                DomainError::database(format!("Failed to fetch accident type: {}", e))
            })?;

        row.as_ref().map(row_to_accident_type).transpose()
    }
}

fn row_to_accident_type(row: &PgRow) -> Result<AccidentType, DomainError> {
    let id: i32 = row
        .try_get("id")
        .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;
    let name: String = row
        .try_get("type_name")
        .map_err(|e| DomainError::database(format!("Failed to get type_name: {}", e)))?;

    Ok(AccidentType::new(AccidentTypeId::new(id), name))
}
