//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresAccidentRepository` - Accidents and their rule join rows
//! - `PostgresAccidentTypeRepository` - Accident type lookups
//! - `PostgresRuleRepository` - Rule lookups
//! - `connect` / `run_migrations` - Pool setup and schema

mod accident_repository;
mod accident_type_repository;
mod pool;
mod rule_repository;

pub use accident_repository::PostgresAccidentRepository;
pub use accident_type_repository::PostgresAccidentTypeRepository;
pub use pool::{connect, run_migrations};
pub use rule_repository::PostgresRuleRepository;
