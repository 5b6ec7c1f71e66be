//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `AccidentRepository` - Accidents with their rule citations
//! - `AccidentTypeRepository` - Read-only accident types
//! - `RuleRepository` - Read-only rules
//!
//! ## Auth Ports
//!
//! - `UserStore` - Credential lookup by username
//! - `PasswordEncoder` - One-way password hashing
//! - `SessionStore` - Login sessions keyed by opaque token

mod accident_repository;
mod accident_type_repository;
mod password_encoder;
mod rule_repository;
mod session_store;
mod user_store;

pub use accident_repository::AccidentRepository;
pub use accident_type_repository::AccidentTypeRepository;
pub use password_encoder::PasswordEncoder;
pub use rule_repository::RuleRepository;
pub use session_store::SessionStore;
pub use user_store::UserStore;
