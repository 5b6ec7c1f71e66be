//! Reading and writing the session cookie.

use axum::http::{header, HeaderMap};

use crate::domain::foundation::SessionToken;

const COOKIE_ATTRIBUTES: &str = "HttpOnly; SameSite=Lax; Path=/";

/// The session cookie, by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    name: String,
}

impl SessionCookie {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Finds the session token among the request's cookies.
    ///
    /// A cookie that is present but not a well-formed token reads as absent.
    pub fn read(&self, headers: &HeaderMap) -> Option<SessionToken> {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == self.name)
            .and_then(|(_, value)| value.parse().ok())
    }

    /// `Set-Cookie` value that stores `token`.
    pub fn issue(&self, token: &SessionToken) -> String {
        format!("{}={}; {}", self.name, token, COOKIE_ATTRIBUTES)
    }

    /// `Set-Cookie` value that removes the cookie from the browser.
    pub fn clear(&self) -> String {
        format!("{}=; {}; Max-Age=0", self.name, COOKIE_ATTRIBUTES)
    }
}

impl Default for SessionCookie {
    fn default() -> Self {
        Self::new("ACCIDENTS_SESSION")
    }
}
