//! Credential lookup port.
//!
//! The login handler only needs "who is this username, what is their stored
//! hash, and which roles do they hold". Keeping that behind a port lets the
//! single configured account be swapped for a real user table without
//! touching the gate.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, UserCredentials};

/// Looks up stored credentials by username.
///
/// # Contract
///
/// Implementations must:
/// - Return `Ok(None)` for an unknown username (not an error)
/// - Return `AuthError::StoreUnavailable` for transient failures
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_username(&self, username: &str)
        -> Result<Option<UserCredentials>, AuthError>;
}
