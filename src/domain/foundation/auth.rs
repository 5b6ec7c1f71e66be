//! Authentication types for the domain layer.
//!
//! These types describe who is logged in and what they may do. They have
//! **no transport dependencies**: the HTTP gate fills them in from a session
//! cookie, but any front end could populate them via the auth ports.
//!
//! # Design Decisions
//!
//! - `AuthenticatedUser` carries only the username and role set
//! - `AuthError` is domain-centric, not store-specific
//! - `SessionToken` is opaque; only the session store can resolve it

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Role granted to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Roles allowed past the gate on protected paths.
    pub const PROTECTED_PATH_ROLES: [Role; 2] = [Role::Admin, Role::User];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AuthError;

    /// Accepts `USER`, `ADMIN` and their `ROLE_`-prefixed forms, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        match upper.strip_prefix("ROLE_").unwrap_or(&upper) {
            "USER" => Ok(Role::User),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(AuthError::UnknownRole(s.to_string())),
        }
    }
}

/// A logged-in account, as resolved from a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Login name.
    pub username: String,

    /// Granted roles.
    pub roles: BTreeSet<Role>,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(username: impl Into<String>, roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            username: username.into(),
            roles: roles.into_iter().collect(),
        }
    }

    /// Returns true if the user holds at least one of `roles`.
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.iter().any(|r| self.roles.contains(r))
    }
}

/// Stored credentials for one account.
///
/// `password_hash` is whatever the configured `PasswordEncoder` produced;
/// the raw password is never kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCredentials {
    pub username: String,
    pub password_hash: String,
    pub roles: BTreeSet<Role>,
}

impl UserCredentials {
    pub fn new(
        username: impl Into<String>,
        password_hash: impl Into<String>,
        roles: impl IntoIterator<Item = Role>,
    ) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            roles: roles.into_iter().collect(),
        }
    }

    /// The user as seen by the rest of the application once verified.
    pub fn to_authenticated(&self) -> AuthenticatedUser {
        AuthenticatedUser {
            username: self.username.clone(),
            roles: self.roles.clone(),
        }
    }
}

/// Opaque session identifier carried in the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionToken(Uuid);

impl SessionToken {
    /// Creates a new random token.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

impl FromStr for SessionToken {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| AuthError::InvalidSession)
    }
}

/// Authentication errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Unknown username or wrong password. Deliberately indistinguishable.
    #[error("Bad credentials")]
    BadCredentials,

    /// The session cookie is missing, malformed, expired, or unknown.
    #[error("Invalid or expired session")]
    InvalidSession,

    /// A role name in configuration or storage is not recognized.
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// The credential or session store failed.
    #[error("Auth store unavailable: {0}")]
    StoreUnavailable(String),
}

impl AuthError {
    /// Creates a store unavailable error with a message.
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::StoreUnavailable(message.into())
    }

    /// Returns true if the user should be sent back to the login form.
    pub fn requires_login(&self) -> bool {
        matches!(self, AuthError::BadCredentials | AuthError::InvalidSession)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_plain_and_prefixed_forms() {
        assert_eq!("USER".parse::<Role>().unwrap(), Role::User);
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("ROLE_USER".parse::<Role>().unwrap(), Role::User);
    }

    #[test]
    fn role_rejects_unknown_names() {
        assert!(matches!(
            "GUEST".parse::<Role>(),
            Err(AuthError::UnknownRole(name)) if name == "GUEST"
        ));
    }

    #[test]
    fn has_any_role_matches_protected_path_roles() {
        let user = AuthenticatedUser::new("user", [Role::User]);
        assert!(user.has_any_role(&Role::PROTECTED_PATH_ROLES));

        let nobody = AuthenticatedUser::new("nobody", []);
        assert!(!nobody.has_any_role(&Role::PROTECTED_PATH_ROLES));
    }

    #[test]
    fn credentials_convert_to_authenticated_user() {
        let creds = UserCredentials::new("user", "salt$hash", [Role::User]);
        let user = creds.to_authenticated();
        assert_eq!(user.username, "user");
        assert!(user.roles.contains(&Role::User));
    }

    #[test]
    fn session_token_round_trips_through_display() {
        let token = SessionToken::generate();
        let parsed: SessionToken = token.to_string().parse().unwrap();
        assert_eq!(parsed, token);
    }

    #[test]
    fn session_token_rejects_garbage() {
        assert_eq!(
            "not-a-token".parse::<SessionToken>(),
            Err(AuthError::InvalidSession)
        );
    }

    #[test]
    fn auth_error_requires_login_for_credential_and_session_errors() {
        assert!(AuthError::BadCredentials.requires_login());
        assert!(AuthError::InvalidSession.requires_login());
        assert!(!AuthError::UnknownRole("GUEST".to_string()).requires_login());
        assert!(!AuthError::store_unavailable("down").requires_login());
    }
}
