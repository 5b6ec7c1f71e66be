//! Reference-data services for the accident form: types and rules.

use std::sync::Arc;

use crate::domain::accident::{AccidentError, AccidentType, Rule, RuleSet};
use crate::domain::foundation::RuleId;
use crate::ports::{AccidentTypeRepository, RuleRepository};

/// Lists accident classifications.
pub struct AccidentTypeService {
    accident_types: Arc<dyn AccidentTypeRepository>,
}

impl AccidentTypeService {
    pub fn new(accident_types: Arc<dyn AccidentTypeRepository>) -> Self {
        Self { accident_types }
    }

    pub async fn find_all(&self) -> Result<Vec<AccidentType>, AccidentError> {
        Ok(self.accident_types.find_all().await?)
    }
}

/// Lists rules and turns submitted rule ids into a `RuleSet`.
pub struct RuleService {
    rules: Arc<dyn RuleRepository>,
}

impl RuleService {
    pub fn new(rules: Arc<dyn RuleRepository>) -> Self {
        Self { rules }
    }

    pub async fn find_all(&self) -> Result<Vec<Rule>, AccidentError> {
        Ok(self.rules.find_all().await?)
    }

    /// Looks up every id; duplicates in `ids` collapse.
    ///
    /// # Errors
    ///
    /// `RuleNotFound` naming the first id (in request order) with no rule.
    pub async fn resolve(&self, ids: &[RuleId]) -> Result<RuleSet, AccidentError> {
        let found: RuleSet = self.rules.find_by_ids(ids).await?.into_iter().collect();

        if let Some(missing) = ids.iter().find(|id| !found.contains(**id)) {
            return Err(AccidentError::RuleNotFound(*missing));
        }
        Ok(found)
    }
}
