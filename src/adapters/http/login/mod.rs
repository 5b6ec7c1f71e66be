//! HTTP adapter for form login.
//!
//! - `GET /login` - Login form
//! - `POST /login` - Submit credentials
//! - `GET|POST /logout` - End the session

pub mod dto;
pub mod handlers;
mod page;
pub mod routes;

pub use handlers::LoginAppState;
pub use routes::login_routes;
