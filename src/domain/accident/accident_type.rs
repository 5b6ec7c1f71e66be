//! Accident classification.

use std::hash::{Hash, Hasher};

use crate::domain::foundation::AccidentTypeId;

/// A classification category for accidents (e.g. "Two cars").
///
/// Identity and equality are defined by `id` alone; `name` is unique in
/// storage but does not take part in comparisons.
#[derive(Debug, Clone, Eq)]
pub struct AccidentType {
    pub id: AccidentTypeId,
    pub name: String,
}

impl AccidentType {
    pub fn new(id: AccidentTypeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl PartialEq for AccidentType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Hash for AccidentType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
