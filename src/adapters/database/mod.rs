use crate::domain::user::User;
use crate::error::Result;
use async_trait::async_trait;

pub mod memory;

pub use memory::InMemoryUserRepository;

/// Account storage as seen by the login use cases.
#[async_trait]
pub trait UserRepository: Send + Sync + std::fmt::Debug {
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Stamps the account's last successful login with the current time.
    ///
    /// # Errors
    /// Returns `AppError::NotFound` if no account has this username.
    async fn update_last_login(&self, username: &str) -> Result<()>;

    /// Replaces the refresh token remembered for the account.
    ///
    /// # Errors
    /// Returns `AppError::NotFound` if no account has this username.
    async fn update_refresh_token(&self, username: &str, refresh_token: &str) -> Result<()>;
}
