//! Session gate and authentication extractor for axum.
//!
//! This module provides:
//! - `session_gate` - Layer that resolves the session cookie and guards every
//!   path except the public ones
//! - `RequireAuth` - Extractor for the user the gate let through
//!
//! # Architecture
//!
//! The gate uses the `SessionStore` port, so it does not care where sessions
//! live.
//!
//! ```text
//! Request → session_gate ─ public path ──────────────→ Handler
//!                │
//!                ├─ no/unknown/expired session → 303 /login
//!                ├─ session without ADMIN|USER → 403
//!                └─ ok → injects AuthenticatedUser → Handler (RequireAuth)
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::session_cookie::SessionCookie;
use crate::domain::foundation::{AuthenticatedUser, ErrorCode, Role};
use crate::ports::SessionStore;

/// Paths reachable without a session.
pub const PUBLIC_PATHS: [&str; 2] = ["/login", "/logout"];

/// Where unauthenticated requests are sent.
pub const LOGIN_PATH: &str = "/login";

/// Gate middleware state.
#[derive(Clone)]
pub struct GateState {
    pub sessions: Arc<dyn SessionStore>,
    pub cookie: SessionCookie,
}

/// Authentication gate.
///
/// This middleware:
/// 1. Lets `PUBLIC_PATHS` through untouched
/// 2. Reads the session token from the session cookie
/// 3. Resolves it through the `SessionStore` port
/// 4. Redirects to `/login` when there is no live session
/// 5. Returns 403 when the user holds neither ADMIN nor USER
/// 6. Otherwise injects `AuthenticatedUser` into request extensions
pub async fn session_gate(
    State(gate): State<GateState>,
    mut request: Request,
    next: Next,
) -> Response {
    if PUBLIC_PATHS.contains(&request.uri().path()) {
        return next.run(request).await;
    }

    let Some(token) = gate.cookie.read(request.headers()) else {
        return Redirect::to(LOGIN_PATH).into_response();
    };

    match gate.sessions.get(&token).await {
        Ok(Some(user)) if user.has_any_role(&Role::PROTECTED_PATH_ROLES) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Ok(Some(user)) => {
            tracing::warn!(
                username = %user.username,
                path = %request.uri().path(),
                "Access denied: missing role"
            );
            ErrorResponse::new(ErrorCode::Forbidden.to_string(), "Access denied")
                .with_status(StatusCode::FORBIDDEN)
        }
        Ok(None) => Redirect::to(LOGIN_PATH).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Session store unavailable");
            ErrorResponse::new(
                ErrorCode::InternalError.to_string(),
                "Authentication service unavailable",
            )
            .with_status(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

/// Extractor that requires authentication.
///
/// Reads the user `session_gate` placed in the request extensions. Without
/// one, the request is sent to the login page.
///
/// # Example
///
/// ```ignore
/// async fn my_handler(RequireAuth(user): RequireAuth) -> impl IntoResponse {
///     format!("Hello, {}!", user.username)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<AuthenticatedUser>()
                .cloned()
                .map(RequireAuth)
                .ok_or(AuthRejection::Unauthenticated)
        })
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No authenticated user on the request.
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::Unauthenticated => Redirect::to(LOGIN_PATH).into_response(),
        }
    }
}
