//! Assembles the complete application router.

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, Router};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::application::handlers::accident::{AccidentService, AccidentTypeService, RuleService};
use crate::application::handlers::auth::LoginHandler;
use crate::ports::SessionStore;

use super::accident::{accident_routes, AccidentAppState};
use super::login::{login_routes, LoginAppState};
use super::middleware::{session_gate, GateState};
use super::session_cookie::SessionCookie;

/// Everything the HTTP surface needs, already wired.
#[derive(Clone)]
pub struct AppServices {
    pub accidents: Arc<AccidentService>,
    pub accident_types: Arc<AccidentTypeService>,
    pub rules: Arc<RuleService>,
    pub login: Arc<LoginHandler>,
    pub sessions: Arc<dyn SessionStore>,
}

/// Builds the router with the session gate, request tracing and a
/// per-request timeout.
///
/// The gate wraps every route, including unmatched paths, so an anonymous
/// request for anything but `/login` or `/logout` ends at the login page.
pub fn app_router(services: AppServices, cookie: SessionCookie, request_timeout: Duration) -> Router {
    let gate = GateState {
        sessions: services.sessions.clone(),
        cookie: cookie.clone(),
    };

    let accidents = AccidentAppState {
        accidents: services.accidents,
        accident_types: services.accident_types,
        rules: services.rules,
    };

    let login = LoginAppState {
        handler: services.login,
        cookie,
    };

    Router::new()
        .merge(accident_routes(accidents))
        .merge(login_routes(login))
        .layer(middleware::from_fn_with_state(gate, session_gate))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}
