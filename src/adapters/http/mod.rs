//! HTTP adapters - the web surface.
//!
//! - `accident` - JSON endpoints for accidents, types and rules
//! - `login` - Form login and logout
//! - `middleware` - Session gate
//! - `router` - Assembles everything behind the gate

pub mod accident;
pub mod error;
pub mod login;
pub mod middleware;
pub mod router;
pub mod session_cookie;

pub use error::ErrorResponse;
pub use router::{app_router, AppServices};
pub use session_cookie::SessionCookie;
