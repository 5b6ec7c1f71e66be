//! Axum router configuration for accident endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    create_accident, delete_accident, get_accident, index, list_accident_types, list_accidents,
    list_rules, update_accident, AccidentAppState,
};

/// Create the accident router.
///
/// # Routes
/// - `GET /` - Home page (accident list)
/// - `GET /accidents`, `POST /accidents` - List and create
/// - `GET|PUT|DELETE /accidents/:id` - Read, edit, delete one accident
/// - `GET /accident-types` - Accident types
/// - `GET /rules` - Rules
pub fn accident_routes(state: AccidentAppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/accidents", get(list_accidents).post(create_accident))
        .route(
            "/accidents/:id",
            get(get_accident).put(update_accident).delete(delete_accident),
        )
        .route("/accident-types", get(list_accident_types))
        .route("/rules", get(list_rules))
        .with_state(state)
}
