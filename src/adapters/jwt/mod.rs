use crate::domain::auth::TokenPayload;
use crate::error::Result;

pub mod hs256;

pub use hs256::JwtTokenService;

/// Signs and verifies bearer tokens.
pub trait TokenSigner: Send + Sync + std::fmt::Debug {
    /// Signs `payload` with `secret`, valid for `expires_in` seconds.
    ///
    /// # Errors
    /// Returns `AppError::Token` if the token cannot be produced.
    fn create_token(&self, payload: &TokenPayload, secret: &str, expires_in: u64) -> Result<String>;

    /// Verifies the signature and expiry of `token` and returns its payload.
    ///
    /// # Errors
    /// Returns `AppError::AuthError` for a forged, expired or malformed token.
    fn check_token(&self, token: &str, secret: &str) -> Result<TokenPayload>;
}
