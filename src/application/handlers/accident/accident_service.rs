//! AccidentService - creation with type resolution, plus pass-through
//! reads and writes.

use std::sync::Arc;

use crate::domain::accident::{Accident, AccidentDraft, AccidentError, AccidentType};
use crate::domain::foundation::{AccidentId, AccidentTypeId};
use crate::ports::{AccidentRepository, AccidentTypeRepository};

/// Orchestrates accident persistence.
pub struct AccidentService {
    accidents: Arc<dyn AccidentRepository>,
    accident_types: Arc<dyn AccidentTypeRepository>,
}

impl AccidentService {
    pub fn new(
        accidents: Arc<dyn AccidentRepository>,
        accident_types: Arc<dyn AccidentTypeRepository>,
    ) -> Self {
        Self {
            accidents,
            accident_types,
        }
    }

    /// Resolves `type_id` and persists the draft under that type.
    ///
    /// # Errors
    ///
    /// - `TypeNotFound` if no accident type has `type_id`
    /// - `Infrastructure` on storage failure
    pub async fn create(
        &self,
        draft: AccidentDraft,
        type_id: AccidentTypeId,
    ) -> Result<Accident, AccidentError> {
        let accident_type = self.resolve_type(type_id).await?;
        let accident = self.accidents.save(draft.with_type(accident_type)).await?;

        tracing::debug!(accident_id = %accident.id, type_id = %type_id, "Accident created");
        Ok(accident)
    }

    pub async fn find_all(&self) -> Result<Vec<Accident>, AccidentError> {
        Ok(self.accidents.find_all().await?)
    }

    pub async fn find_by_id(&self, id: AccidentId) -> Result<Option<Accident>, AccidentError> {
        Ok(self.accidents.find_by_id(id).await?)
    }

    /// Returns `false` if no accident has this id.
    pub async fn update(&self, accident: &Accident) -> Result<bool, AccidentError> {
        Ok(self.accidents.update(accident).await?)
    }

    /// Returns `false` if no accident has this id.
    pub async fn delete_by_id(&self, id: AccidentId) -> Result<bool, AccidentError> {
        Ok(self.accidents.delete_by_id(id).await?)
    }

    /// Replaces an existing accident's fields, type and rules.
    ///
    /// # Errors
    ///
    /// - `TypeNotFound` if no accident type has `type_id`
    /// - `NotFound` if no accident has `id`
    pub async fn edit(
        &self,
        id: AccidentId,
        draft: AccidentDraft,
        type_id: AccidentTypeId,
    ) -> Result<Accident, AccidentError> {
        let accident_type = self.resolve_type(type_id).await?;
        let accident = Accident::from_draft(id, draft, accident_type);

        if !self.update(&accident).await? {
            return Err(AccidentError::NotFound(id));
        }
        Ok(accident)
    }

    async fn resolve_type(&self, type_id: AccidentTypeId) -> Result<AccidentType, AccidentError> {
        self.accident_types
            .find_by_id(type_id)
            .await?
            .ok_or(AccidentError::TypeNotFound(type_id))
    }
}
