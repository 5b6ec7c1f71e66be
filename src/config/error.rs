//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool min_connections exceeds max_connections")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed (100)")]
    PoolSizeTooLarge,

    #[error("Unknown role in auth.roles: {0}")]
    UnknownRole(String),

    #[error("auth.roles must name at least one role")]
    NoRoles,

    #[error("Password pepper must be at least {0} characters")]
    WeakPepper(usize),

    #[error("The default password may not be used in production")]
    DefaultPasswordInProduction,

    #[error("Invalid session cookie name")]
    InvalidCookieName,

    #[error("Invalid session idle timeout")]
    InvalidSessionTimeout,
}
