//! HTTP handlers for accident endpoints.
//!
//! These handlers connect Axum routes to the accident services.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::accident::{AccidentService, AccidentTypeService, RuleService};
use crate::domain::accident::{AccidentDraft, AccidentError};
use crate::domain::foundation::{AccidentId, ErrorCode};

use super::dto::{AccidentRequest, AccidentResponse, AccidentTypeResponse, RuleResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Services behind the accident endpoints.
#[derive(Clone)]
pub struct AccidentAppState {
    pub accidents: Arc<AccidentService>,
    pub accident_types: Arc<AccidentTypeService>,
    pub rules: Arc<RuleService>,
}

impl AccidentAppState {
    /// Validates the request and resolves its rule ids.
    async fn draft_from(&self, req: AccidentRequest) -> Result<AccidentDraft, AccidentError> {
        let rules = self.rules.resolve(&req.rule_ids).await?;
        Ok(AccidentDraft::new(req.name, req.text, req.address, rules)?)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET / - Home page: every accident
pub async fn index(
    State(state): State<AccidentAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<Vec<AccidentResponse>>, AccidentApiError> {
    tracing::debug!(username = %user.username, "Home page requested");
    list_accidents(State(state)).await
}

/// GET /accidents - List every accident
pub async fn list_accidents(
    State(state): State<AccidentAppState>,
) -> Result<Json<Vec<AccidentResponse>>, AccidentApiError> {
    let accidents = state.accidents.find_all().await?;
    Ok(Json(accidents.iter().map(AccidentResponse::from).collect()))
}

/// GET /accidents/:id - Get one accident
pub async fn get_accident(
    State(state): State<AccidentAppState>,
    id: Result<Path<AccidentId>, PathRejection>,
) -> Result<Json<AccidentResponse>, AccidentApiError> {
    let Path(id) = id?;
    let accident = state
        .accidents
        .find_by_id(id)
        .await?
        .ok_or(AccidentError::NotFound(id))?;
    Ok(Json(AccidentResponse::from(&accident)))
}

/// GET /accident-types - List accident types for the form
pub async fn list_accident_types(
    State(state): State<AccidentAppState>,
) -> Result<Json<Vec<AccidentTypeResponse>>, AccidentApiError> {
    let types = state.accident_types.find_all().await?;
    Ok(Json(types.iter().map(AccidentTypeResponse::from).collect()))
}

/// GET /rules - List rules for the form
pub async fn list_rules(
    State(state): State<AccidentAppState>,
) -> Result<Json<Vec<RuleResponse>>, AccidentApiError> {
    let rules = state.rules.find_all().await?;
    Ok(Json(rules.iter().map(RuleResponse::from).collect()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST/PUT/DELETE endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /accidents - Create an accident
pub async fn create_accident(
    State(state): State<AccidentAppState>,
    RequireAuth(user): RequireAuth,
    req: Result<Json<AccidentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AccidentApiError> {
    let Json(req) = req?;
    let type_id = req.type_id;
    let draft = state.draft_from(req).await?;
    let accident = state.accidents.create(draft, type_id).await?;

    tracing::info!(username = %user.username, accident_id = %accident.id, "Accident recorded");
    Ok((StatusCode::CREATED, Json(AccidentResponse::from(&accident))))
}

/// PUT /accidents/:id - Replace an accident's fields, type and rules
pub async fn update_accident(
    State(state): State<AccidentAppState>,
    RequireAuth(user): RequireAuth,
    id: Result<Path<AccidentId>, PathRejection>,
    req: Result<Json<AccidentRequest>, JsonRejection>,
) -> Result<Json<AccidentResponse>, AccidentApiError> {
    let Path(id) = id?;
    let Json(req) = req?;
    let type_id = req.type_id;
    let draft = state.draft_from(req).await?;
    let accident = state.accidents.edit(id, draft, type_id).await?;

    tracing::info!(username = %user.username, accident_id = %id, "Accident edited");
    Ok(Json(AccidentResponse::from(&accident)))
}

/// DELETE /accidents/:id - Delete an accident
pub async fn delete_accident(
    State(state): State<AccidentAppState>,
    RequireAuth(user): RequireAuth,
    id: Result<Path<AccidentId>, PathRejection>,
) -> Result<StatusCode, AccidentApiError> {
    let Path(id) = id?;
    if !state.accidents.delete_by_id(id).await? {
        return Err(AccidentError::NotFound(id).into());
    }

    tracing::info!(username = %user.username, accident_id = %id, "Accident deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts accident errors to HTTP responses.
#[derive(Debug)]
pub enum AccidentApiError {
    Accident(AccidentError),
    /// The path or body could not be parsed.
    MalformedRequest(String),
}

impl From<AccidentError> for AccidentApiError {
    fn from(err: AccidentError) -> Self {
        Self::Accident(err)
    }
}

impl From<PathRejection> for AccidentApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for AccidentApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

impl IntoResponse for AccidentApiError {
    fn into_response(self) -> Response {
        let err = match self {
            AccidentApiError::Accident(err) => err,
            AccidentApiError::MalformedRequest(message) => {
                return ErrorResponse::new(ErrorCode::ValidationFailed.to_string(), message)
                    .with_status(StatusCode::BAD_REQUEST);
            }
        };

        let status = match &err {
            AccidentError::NotFound(_) => StatusCode::NOT_FOUND,
            // Unknown references inside an otherwise well-formed body
            AccidentError::TypeNotFound(_) | AccidentError::RuleNotFound(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AccidentError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            AccidentError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match &err {
            AccidentError::Infrastructure(detail) => {
                tracing::error!(error = %detail, "Accident request failed");
                "Internal error".to_string()
            }
            other => other.to_string(),
        };

        ErrorResponse::new(err.code().to_string(), message).with_status(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AccidentTypeId, RuleId, ValidationError};

    fn status_of(err: AccidentError) -> StatusCode {
        AccidentApiError::from(err).into_response().status()
    }

    #[test]
    fn errors_map_to_statuses() {
        assert_eq!(status_of(AccidentError::NotFound(AccidentId::new(1))), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(AccidentError::TypeNotFound(AccidentTypeId::new(9))),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(AccidentError::RuleNotFound(RuleId::new(9))),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(ValidationError::empty_field("name").into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AccidentError::infrastructure("pool closed")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn infrastructure_detail_is_not_returned() {
        let response =
            AccidentApiError::from(AccidentError::infrastructure("password=hunter2")).into_response();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(body.code, "DATABASE_ERROR");
        assert!(!body.message.contains("hunter2"));
    }

    #[tokio::test]
    async fn malformed_request_is_a_validation_failure() {
        let response =
            AccidentApiError::MalformedRequest("Cannot parse `abc`".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(body.code, "VALIDATION_FAILED");
        assert!(body.message.contains("abc"));
    }
}
