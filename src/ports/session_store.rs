//! Login session port.
//!
//! Maps the opaque token in the session cookie to the user who logged in.
//! Tokens are issued on successful login and invalidated on logout.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, SessionToken};

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Starts a session for `user` and returns its token.
    async fn create(&self, user: AuthenticatedUser) -> Result<SessionToken, AuthError>;

    /// Resolves a token. Unknown and expired tokens yield `Ok(None)`.
    async fn get(&self, token: &SessionToken) -> Result<Option<AuthenticatedUser>, AuthError>;

    /// Ends a session. Invalidating an unknown token is not an error.
    async fn invalidate(&self, token: &SessionToken) -> Result<(), AuthError>;
}
