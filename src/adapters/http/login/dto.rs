//! Form and query shapes for the login endpoints.

use serde::Deserialize;

/// Fields posted by the login form.
///
/// Missing fields read as empty and fail like a wrong password.
#[derive(Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Query flags set by the login and logout redirects.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginPageQuery {
    pub error: Option<String>,
    pub logout: Option<String>,
}

/// Banner shown above the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginNotice {
    None,
    BadCredentials,
    LoggedOut,
}

impl From<&LoginPageQuery> for LoginNotice {
    fn from(query: &LoginPageQuery) -> Self {
        if query.error.is_some() {
            LoginNotice::BadCredentials
        } else if query.logout.is_some() {
            LoginNotice::LoggedOut
        } else {
            LoginNotice::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_flag_wins_over_logout_flag() {
        let query = LoginPageQuery {
            error: Some("true".to_string()),
            logout: Some("true".to_string()),
        };
        assert_eq!(LoginNotice::from(&query), LoginNotice::BadCredentials);
    }

    #[test]
    fn logout_flag_shows_logged_out() {
        let query = LoginPageQuery {
            logout: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(LoginNotice::from(&query), LoginNotice::LoggedOut);
    }

    #[test]
    fn no_flags_show_nothing() {
        assert_eq!(LoginNotice::from(&LoginPageQuery::default()), LoginNotice::None);
    }

    #[test]
    fn form_debug_hides_password() {
        let form = LoginForm {
            username: "user".to_string(),
            password: "123456".to_string(),
        };
        assert!(!format!("{:?}", form).contains("123456"));
    }
}
