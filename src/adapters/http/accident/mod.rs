//! HTTP adapter for accident endpoints.
//!
//! Exposes accidents and their reference data as JSON:
//! - `GET /` - Accident list (home page)
//! - `GET /accidents` - List accidents
//! - `POST /accidents` - Create an accident
//! - `GET /accidents/:id` - Get one accident
//! - `PUT /accidents/:id` - Edit an accident
//! - `DELETE /accidents/:id` - Delete an accident
//! - `GET /accident-types` - List accident types
//! - `GET /rules` - List rules

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::AccidentAppState;
pub use routes::accident_routes;
