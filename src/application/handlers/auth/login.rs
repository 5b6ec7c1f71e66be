//! LoginHandler - verifies submitted credentials and manages sessions.

use std::sync::Arc;

use crate::domain::foundation::{AuthError, SessionToken};
use crate::ports::{PasswordEncoder, SessionStore, UserStore};

/// Credentials submitted through the login form.
#[derive(Clone)]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCommand")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Handler for login and logout.
pub struct LoginHandler {
    users: Arc<dyn UserStore>,
    encoder: Arc<dyn PasswordEncoder>,
    sessions: Arc<dyn SessionStore>,
}

impl LoginHandler {
    pub fn new(
        users: Arc<dyn UserStore>,
        encoder: Arc<dyn PasswordEncoder>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            users,
            encoder,
            sessions,
        }
    }

    /// Checks the credentials and opens a session.
    ///
    /// # Errors
    ///
    /// - `BadCredentials` for an unknown user or a wrong password
    /// - `StoreUnavailable` if a store fails
    pub async fn login(&self, cmd: LoginCommand) -> Result<SessionToken, AuthError> {
        let credentials = match self.users.find_by_username(&cmd.username).await? {
            Some(credentials) => credentials,
            None => {
                tracing::warn!(username = %cmd.username, "Login failed: unknown user");
                return Err(AuthError::BadCredentials);
            }
        };

        if !self.encoder.matches(&cmd.password, &credentials.password_hash) {
            tracing::warn!(username = %cmd.username, "Login failed: bad password");
            return Err(AuthError::BadCredentials);
        }

        let token = self.sessions.create(credentials.to_authenticated()).await?;
        tracing::info!(username = %cmd.username, "User logged in");
        Ok(token)
    }

    /// Ends the session behind `token`.
    pub async fn logout(&self, token: &SessionToken) -> Result<(), AuthError> {
        self.sessions.invalidate(token).await?;
        tracing::info!("User logged out");
        Ok(())
    }
}
