//! Accident records.
//!
//! An accident passes through three shapes:
//!
//! - `AccidentDraft` - user input, no type resolved yet
//! - `NewAccident` - type resolved, not yet persisted (no id)
//! - `Accident` - persisted, id assigned by storage

use crate::domain::foundation::{AccidentId, ValidationError};

use super::{AccidentType, RuleSet};

/// Longest accepted accident name.
pub const MAX_NAME_LEN: usize = 255;

/// Accident input before its type has been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccidentDraft {
    pub name: String,
    pub text: String,
    pub address: String,
    pub rules: RuleSet,
}

impl AccidentDraft {
    /// Creates a validated draft.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if `name` is blank
    /// - `TooLong` if `name` exceeds [`MAX_NAME_LEN`] characters
    pub fn new(
        name: impl Into<String>,
        text: impl Into<String>,
        address: impl Into<String>,
        rules: RuleSet,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        let len = name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(ValidationError::too_long("name", MAX_NAME_LEN, len));
        }

        Ok(Self {
            name,
            text: text.into(),
            address: address.into(),
            rules,
        })
    }

    /// Attaches a resolved type, producing something the repository can save.
    pub fn with_type(self, accident_type: AccidentType) -> NewAccident {
        NewAccident {
            name: self.name,
            text: self.text,
            address: self.address,
            accident_type,
            rules: self.rules,
        }
    }
}

/// An accident ready to be persisted. Storage assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccident {
    pub name: String,
    pub text: String,
    pub address: String,
    pub accident_type: AccidentType,
    pub rules: RuleSet,
}

impl NewAccident {
    /// Binds the storage-generated id.
    pub fn into_accident(self, id: AccidentId) -> Accident {
        Accident {
            id,
            name: self.name,
            text: self.text,
            address: self.address,
            accident_type: self.accident_type,
            rules: self.rules,
        }
    }
}

/// A persisted accident with its type and cited rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accident {
    pub id: AccidentId,
    pub name: String,
    pub text: String,
    pub address: String,
    pub accident_type: AccidentType,
    pub rules: RuleSet,
}

impl Accident {
    /// Rebuilds an accident under an existing id from edited input.
    pub fn from_draft(id: AccidentId, draft: AccidentDraft, accident_type: AccidentType) -> Self {
        draft.with_type(accident_type).into_accident(id)
    }
}
