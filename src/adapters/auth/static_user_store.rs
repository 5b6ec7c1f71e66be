//! User store holding a fixed set of accounts registered at startup.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, Role, UserCredentials};
use crate::ports::{PasswordEncoder, UserStore};

/// Accounts registered in process memory.
///
/// The server registers the single account from configuration; tests may
/// register more.
#[derive(Debug, Default, Clone)]
pub struct StaticUserStore {
    users: HashMap<String, UserCredentials>,
}

impl StaticUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an account, hashing `password` with `encoder`.
    ///
    /// A later registration under the same username replaces the earlier one.
    pub fn with_user(
        mut self,
        encoder: &dyn PasswordEncoder,
        username: impl Into<String>,
        password: &str,
        roles: impl IntoIterator<Item = Role>,
    ) -> Self {
        let username = username.into();
        let credentials = UserCredentials::new(username.clone(), encoder.encode(password), roles);
        self.users.insert(username, credentials);
        self
    }

    /// Returns the number of registered accounts.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

#[async_trait]
impl UserStore for StaticUserStore {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserCredentials>, AuthError> {
        Ok(self.users.get(username).cloned())
    }
}
