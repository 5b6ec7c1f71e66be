//! Accident-specific error types.

use thiserror::Error;

use crate::domain::foundation::{
    AccidentId, AccidentTypeId, DomainError, ErrorCode, RuleId, ValidationError,
};

/// Errors surfaced by the accident service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccidentError {
    /// Accident was not found.
    #[error("Accident not found: {0}")]
    NotFound(AccidentId),

    /// The requested accident type does not exist.
    #[error("Accident type not found: {0}")]
    TypeNotFound(AccidentTypeId),

    /// A cited rule does not exist.
    #[error("Rule not found: {0}")]
    RuleNotFound(RuleId),

    /// Input failed validation.
    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    /// Storage or other infrastructure failure.
    #[error("Error: {0}")]
    Infrastructure(String),
}

impl AccidentError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        AccidentError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AccidentError::NotFound(_) => ErrorCode::AccidentNotFound,
            AccidentError::TypeNotFound(_) => ErrorCode::AccidentTypeNotFound,
            AccidentError::RuleNotFound(_) => ErrorCode::RuleNotFound,
            AccidentError::ValidationFailed(_) => ErrorCode::ValidationFailed,
            AccidentError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<DomainError> for AccidentError {
    fn from(err: DomainError) -> Self {
        AccidentError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_not_found_is_distinct_from_infrastructure() {
        let missing = AccidentError::TypeNotFound(AccidentTypeId::new(4));
        assert_eq!(missing.code(), ErrorCode::AccidentTypeNotFound);
        assert_eq!(missing.to_string(), "Accident type not found: 4");

        let storage: AccidentError = DomainError::database("connection reset").into();
        assert_eq!(storage.code(), ErrorCode::DatabaseError);
    }

    #[test]
    fn validation_error_converts() {
        let err: AccidentError = ValidationError::empty_field("name").into();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }
}
