//! Process-local session store with an idle timeout.
//!
//! Sessions live only as long as the server process. Each successful lookup
//! refreshes the session's last-seen time; a session left idle longer than
//! the configured timeout is dropped on its next lookup.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::foundation::{AuthError, AuthenticatedUser, SessionToken};
use crate::ports::SessionStore;

#[derive(Debug, Clone)]
struct SessionEntry {
    user: AuthenticatedUser,
    last_seen: DateTime<Utc>,
}

impl SessionEntry {
    fn is_idle_longer_than(&self, timeout: Duration, now: DateTime<Utc>) -> bool {
        // Clock going backwards reads as "not idle"
        now.signed_duration_since(self.last_seen)
            .to_std()
            .map(|idle| idle > timeout)
            .unwrap_or(false)
    }
}

/// In-memory `SessionStore`.
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionToken, SessionEntry>>>,
    idle_timeout: Duration,
}

impl InMemorySessionStore {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_timeout,
        }
    }

    /// Number of sessions currently held, expired or not.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Drops every session idle past the timeout. Returns how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| !entry.is_idle_longer_than(self.idle_timeout, now));
        before - sessions.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, user: AuthenticatedUser) -> Result<SessionToken, AuthError> {
        let token = SessionToken::generate();
        let entry = SessionEntry {
            user,
            last_seen: Utc::now(),
        };
        self.sessions.write().await.insert(token, entry);
        Ok(token)
    }

    async fn get(&self, token: &SessionToken) -> Result<Option<AuthenticatedUser>, AuthError> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;

        match sessions.get_mut(token) {
            None => return Ok(None),
            Some(entry) if !entry.is_idle_longer_than(self.idle_timeout, now) => {
                entry.last_seen = now;
                return Ok(Some(entry.user.clone()));
            }
            Some(_) => {}
        }

        sessions.remove(token);
        tracing::debug!(%token, "Session expired");
        Ok(None)
    }

    async fn invalidate(&self, token: &SessionToken) -> Result<(), AuthError> {
        self.sessions.write().await.remove(token);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Role;

    fn user() -> AuthenticatedUser {
        AuthenticatedUser::new("user", [Role::User])
    }

    #[tokio::test]
    async fn created_session_resolves_to_user() {
        let store = InMemorySessionStore::new(Duration::from_secs(60));
        let token = store.create(user()).await.unwrap();

        let found = store.get(&token).await.unwrap();
        assert_eq!(found, Some(user()));
    }

    #[tokio::test]
    async fn unknown_token_resolves_to_none() {
        let store = InMemorySessionStore::new(Duration::from_secs(60));
        let found = store.get(&SessionToken::generate()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn invalidated_session_no_longer_resolves() {
        let store = InMemorySessionStore::new(Duration::from_secs(60));
        let token = store.create(user()).await.unwrap();

        store.invalidate(&token).await.unwrap();

        assert!(store.get(&token).await.unwrap().is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn invalidating_unknown_token_is_ok() {
        let store = InMemorySessionStore::new(Duration::from_secs(60));
        assert!(store.invalidate(&SessionToken::generate()).await.is_ok());
    }

    #[tokio::test]
    async fn idle_session_expires_and_is_removed() {
        let store = InMemorySessionStore::new(Duration::from_millis(5));
        let token = store.create(user()).await.unwrap();

        tokio::time::sleep(Duration::from_millis(30)).await;

        assert!(store.get(&token).await.unwrap().is_none());
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn purge_removes_only_expired_sessions() {
        let store = InMemorySessionStore::new(Duration::from_millis(5));
        store.create(user()).await.unwrap();
        tokio::time::sleep(Duration::from_millis(30)).await;
        let fresh = store.create(user()).await.unwrap();

        assert_eq!(store.purge_expired().await, 1);
        assert!(store.get(&fresh).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn sessions_are_independent() {
        let store = InMemorySessionStore::new(Duration::from_secs(60));
        let first = store.create(user()).await.unwrap();
        let second = store
            .create(AuthenticatedUser::new("admin", [Role::Admin]))
            .await
            .unwrap();

        assert_ne!(first, second);
        store.invalidate(&first).await.unwrap();
        assert_eq!(store.get(&second).await.unwrap().unwrap().username, "admin");
    }
}
