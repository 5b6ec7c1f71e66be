//! Authentication configuration

use serde::Deserialize;
use std::fmt;
use std::time::Duration;

use crate::domain::foundation::Role;

use super::error::ValidationError;
use super::server::Environment;

/// Shortest pepper accepted for password hashing.
pub const MIN_PEPPER_LEN: usize = 16;

const DEFAULT_PASSWORD: &str = "123456";

/// Authentication configuration (single form-login account)
#[derive(Clone, Deserialize)]
pub struct AuthConfig {
    /// Login name of the configured account
    #[serde(default = "default_username")]
    pub username: String,

    /// Raw password of the configured account; hashed at startup
    #[serde(default)]
    pub password: String,

    /// Comma-separated role names granted to the account
    #[serde(default = "default_roles")]
    pub roles: String,

    /// Server-side key mixed into every password hash
    #[serde(default)]
    pub password_pepper: String,

    /// Name of the session cookie
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,

    /// Idle time after which a session expires, in seconds
    #[serde(default = "default_session_idle_timeout")]
    pub session_idle_timeout_secs: u64,
}

impl AuthConfig {
    /// Parse the configured role names
    pub fn role_list(&self) -> Result<Vec<Role>, ValidationError> {
        let roles = self
            .roles
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| {
                name.parse::<Role>()
                    .map_err(|_| ValidationError::UnknownRole(name.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if roles.is_empty() {
            return Err(ValidationError::NoRoles);
        }
        Ok(roles)
    }

    /// Get session idle timeout as Duration
    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.session_idle_timeout_secs)
    }

    /// Validate authentication configuration
    ///
    /// In production, the well-known default password is refused.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.username.trim().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH_USERNAME"));
        }
        if self.password.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH_PASSWORD"));
        }
        if self.password_pepper.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH_PASSWORD_PEPPER"));
        }
        if self.password_pepper.chars().count() < MIN_PEPPER_LEN {
            return Err(ValidationError::WeakPepper(MIN_PEPPER_LEN));
        }
        if !is_valid_cookie_name(&self.session_cookie) {
            return Err(ValidationError::InvalidCookieName);
        }
        if self.session_idle_timeout_secs == 0 {
            return Err(ValidationError::InvalidSessionTimeout);
        }
        self.role_list()?;

        if *environment == Environment::Production && self.password == DEFAULT_PASSWORD {
            return Err(ValidationError::DefaultPasswordInProduction);
        }

        Ok(())
    }
}

// Cookie names are RFC 6265 tokens
fn is_valid_cookie_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "!#$%&'*+-.^_`|~".contains(c))
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("roles", &self.roles)
            .field("password_pepper", &"[REDACTED]")
            .field("session_cookie", &self.session_cookie)
            .field("session_idle_timeout_secs", &self.session_idle_timeout_secs)
            .finish()
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: String::new(),
            roles: default_roles(),
            password_pepper: String::new(),
            session_cookie: default_session_cookie(),
            session_idle_timeout_secs: default_session_idle_timeout(),
        }
    }
}

fn default_username() -> String {
    "user".to_string()
}

fn default_roles() -> String {
    "USER".to_string()
}

fn default_session_cookie() -> String {
    "ACCIDENTS_SESSION".to_string()
}

fn default_session_idle_timeout() -> u64 {
    1800
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> AuthConfig {
        AuthConfig {
            password: "correct horse".to_string(),
            password_pepper: "0123456789abcdef".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_auth_config_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.username, "user");
        assert_eq!(config.session_cookie, "ACCIDENTS_SESSION");
        assert_eq!(config.session_idle_timeout(), Duration::from_secs(1800));
        assert_eq!(config.role_list().unwrap(), vec![Role::User]);
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(valid().validate(&Environment::Production).is_ok());
    }

    #[test]
    fn test_validation_missing_password() {
        let config = AuthConfig {
            password: String::new(),
            ..valid()
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::MissingRequired("AUTH_PASSWORD"))
        );
    }

    #[test]
    fn test_validation_short_pepper() {
        let config = AuthConfig {
            password_pepper: "short".to_string(),
            ..valid()
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::WeakPepper(MIN_PEPPER_LEN))
        );
    }

    #[test]
    fn test_validation_default_password_rejected_only_in_production() {
        let config = AuthConfig {
            password: "123456".to_string(),
            ..valid()
        };
        assert!(config.validate(&Environment::Development).is_ok());
        assert_eq!(
            config.validate(&Environment::Production),
            Err(ValidationError::DefaultPasswordInProduction)
        );
    }

    #[test]
    fn test_role_list_parses_multiple_roles() {
        let config = AuthConfig {
            roles: "USER, ROLE_ADMIN".to_string(),
            ..valid()
        };
        assert_eq!(config.role_list().unwrap(), vec![Role::User, Role::Admin]);
    }

    #[test]
    fn test_validation_unknown_role() {
        let config = AuthConfig {
            roles: "USER,GUEST".to_string(),
            ..valid()
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::UnknownRole("GUEST".to_string()))
        );
    }

    #[test]
    fn test_validation_empty_roles() {
        let config = AuthConfig {
            roles: " , ".to_string(),
            ..valid()
        };
        assert_eq!(config.role_list(), Err(ValidationError::NoRoles));
    }

    #[test]
    fn test_validation_bad_cookie_name() {
        let config = AuthConfig {
            session_cookie: "my session".to_string(),
            ..valid()
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidCookieName)
        );
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let printed = format!("{:?}", valid());
        assert!(!printed.contains("correct horse"));
        assert!(!printed.contains("0123456789abcdef"));
        assert!(printed.contains("[REDACTED]"));
    }
}
