//! Application layer - Services and handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::accident::{AccidentService, AccidentTypeService, RuleService};
pub use handlers::auth::{LoginCommand, LoginHandler};
