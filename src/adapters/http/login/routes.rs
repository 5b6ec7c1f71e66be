//! Axum router configuration for the login endpoints.

use axum::{routing::get, Router};

use super::handlers::{login_page, logout, submit_login, LoginAppState};

/// Create the login router.
///
/// # Routes
/// - `GET /login` - Login form
/// - `POST /login` - Submit credentials
/// - `GET /logout`, `POST /logout` - End the session
pub fn login_routes(state: LoginAppState) -> Router {
    Router::new()
        .route("/login", get(login_page).post(submit_login))
        .route("/logout", get(logout).post(logout))
        .with_state(state)
}
