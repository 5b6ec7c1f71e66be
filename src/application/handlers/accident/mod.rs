//! Accident services.

mod accident_service;
mod catalog;

pub use accident_service::AccidentService;
pub use catalog::{AccidentTypeService, RuleService};
