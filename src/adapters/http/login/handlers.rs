//! HTTP handlers for login and logout.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::session_cookie::SessionCookie;
use crate::application::handlers::auth::{LoginCommand, LoginHandler};
use crate::domain::foundation::ErrorCode;

use super::dto::{LoginForm, LoginNotice, LoginPageQuery};
use super::page::render_login_page;

pub const LOGIN_SUCCESS_URL: &str = "/";
pub const LOGIN_FAILURE_URL: &str = "/login?error=true";
pub const LOGOUT_SUCCESS_URL: &str = "/login?logout=true";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct LoginAppState {
    pub handler: Arc<LoginHandler>,
    pub cookie: SessionCookie,
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /login - Render the login form
pub async fn login_page(Query(query): Query<LoginPageQuery>) -> Html<String> {
    Html(render_login_page(LoginNotice::from(&query)))
}

/// POST /login - Verify credentials and start a session
///
/// A session cookie sent with a successful login is invalidated, so each
/// login replaces the previous session instead of adding to it.
pub async fn submit_login(
    State(state): State<LoginAppState>,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> Response {
    let cmd = LoginCommand {
        username: form.username,
        password: form.password,
    };

    match state.handler.login(cmd).await {
        Ok(token) => {
            if let Some(previous) = state.cookie.read(&headers) {
                if let Err(e) = state.handler.logout(&previous).await {
                    tracing::warn!(error = %e, "Failed to invalidate replaced session");
                }
            }
            (
                [(header::SET_COOKIE, state.cookie.issue(&token))],
                Redirect::to(LOGIN_SUCCESS_URL),
            )
                .into_response()
        }
        Err(e) if e.requires_login() => Redirect::to(LOGIN_FAILURE_URL).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Login unavailable");
            ErrorResponse::new(
                ErrorCode::InternalError.to_string(),
                "Authentication service unavailable",
            )
            .with_status(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

/// GET|POST /logout - End the session and clear the cookie
pub async fn logout(State(state): State<LoginAppState>, headers: HeaderMap) -> Response {
    if let Some(token) = state.cookie.read(&headers) {
        if let Err(e) = state.handler.logout(&token).await {
            tracing::warn!(error = %e, "Failed to invalidate session on logout");
        }
    }

    (
        [(header::SET_COOKIE, state.cookie.clear())],
        Redirect::to(LOGOUT_SUCCESS_URL),
    )
        .into_response()
}
