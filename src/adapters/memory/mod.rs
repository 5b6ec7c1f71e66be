//! In-memory adapters - Storage without a database.
//!
//! All repositories share one [`InMemoryDatabase`] so foreign keys between
//! accidents, types and rules can be enforced.

mod accident_repository;
mod catalog;
mod database;

pub use accident_repository::InMemoryAccidentRepository;
pub use catalog::{InMemoryAccidentTypeRepository, InMemoryRuleRepository};
pub use database::InMemoryDatabase;
