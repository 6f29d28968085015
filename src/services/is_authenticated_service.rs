use crate::adapters::database::UserRepository;
use crate::domain::user::UserWithoutPassword;
use crate::error::{AppError, Result};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct IsAuthenticatedService {
    user_repo: Arc<dyn UserRepository>,
}

impl IsAuthenticatedService {
    #[must_use]
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Returns the profile of a username that has already passed authentication.
    ///
    /// # Errors
    /// Returns `AppError::AuthError` if the account has disappeared since.
    #[tracing::instrument(err(level = "warn"), skip(self))]
    pub async fn execute(&self, username: &str) -> Result<UserWithoutPassword> {
        let user = self.user_repo.get_user_by_username(username).await?.ok_or(AppError::AuthError)?;
        Ok(user.into())
    }
}
