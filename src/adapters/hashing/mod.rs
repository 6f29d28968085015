use crate::error::Result;
use async_trait::async_trait;

pub mod argon;

pub use argon::Argon2Hasher;

/// One-way password hashing and verification.
#[async_trait]
pub trait PasswordHasher: Send + Sync + std::fmt::Debug {
    async fn hash(&self, password: &str) -> Result<String>;

    /// Reports whether `password` produces `hash`. A mismatch is `Ok(false)`, not an error.
    async fn compare(&self, password: &str, hash: &str) -> Result<bool>;
}
