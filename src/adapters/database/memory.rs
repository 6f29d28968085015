use super::UserRepository;
use crate::domain::user::User;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;
use time::OffsetDateTime;

/// Process-local account store keyed by username.
#[derive(Clone, Debug, Default)]
pub struct InMemoryUserRepository {
    users: Arc<DashMap<String, User>>,
}

impl InMemoryUserRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an account.
    ///
    /// # Errors
    /// Returns `AppError::BadRequest` if the username is already taken.
    pub fn insert(&self, user: User) -> Result<()> {
        match self.users.entry(user.username.clone()) {
            Entry::Occupied(_) => Err(AppError::BadRequest("Username already exists".to_string())),
            Entry::Vacant(slot) => {
                slot.insert(user);
                Ok(())
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    fn update<F>(&self, username: &str, apply: F) -> Result<()>
    where
        F: FnOnce(&mut User),
    {
        let mut user = self.users.get_mut(username).ok_or(AppError::NotFound)?;
        apply(user.value_mut());
        user.updated_at = OffsetDateTime::now_utc();
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self.users.get(username).map(|entry| entry.value().clone()))
    }

    #[tracing::instrument(level = "debug", skip(self), err)]
    async fn update_last_login(&self, username: &str) -> Result<()> {
        self.update(username, |user| user.last_login = Some(OffsetDateTime::now_utc()))
    }

    #[tracing::instrument(level = "debug", skip(self, refresh_token), err)]
    async fn update_refresh_token(&self, username: &str, refresh_token: &str) -> Result<()> {
        self.update(username, |user| user.refresh_token = Some(refresh_token.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup() {
        let repo = InMemoryUserRepository::new();
        repo.insert(User::new("alice", "hash")).unwrap();

        let found = repo.get_user_by_username("alice").await.unwrap().unwrap();
        assert_eq!(found.username, "alice");
        assert!(repo.get_user_by_username("bob").await.unwrap().is_none());
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.insert(User::new("alice", "hash")).unwrap();

        let result = repo.insert(User::new("alice", "other"));
        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_update_last_login() {
        let repo = InMemoryUserRepository::new();
        repo.insert(User::new("alice", "hash")).unwrap();

        repo.update_last_login("alice").await.unwrap();

        let user = repo.get_user_by_username("alice").await.unwrap().unwrap();
        assert!(user.last_login.is_some());
        assert!(user.updated_at >= user.created_at);
    }

    #[tokio::test]
    async fn test_update_refresh_token_replaces_previous() {
        let repo = InMemoryUserRepository::new();
        repo.insert(User::new("alice", "hash")).unwrap();

        repo.update_refresh_token("alice", "first").await.unwrap();
        repo.update_refresh_token("alice", "second").await.unwrap();

        let user = repo.get_user_by_username("alice").await.unwrap().unwrap();
        assert_eq!(user.refresh_token.as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_updates_on_unknown_user() {
        let repo = InMemoryUserRepository::new();

        assert!(matches!(repo.update_last_login("ghost").await, Err(AppError::NotFound)));
        assert!(matches!(repo.update_refresh_token("ghost", "t").await, Err(AppError::NotFound)));
    }
}
