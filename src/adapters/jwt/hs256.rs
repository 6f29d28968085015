use super::TokenSigner;
use crate::domain::auth::TokenPayload;
use crate::error::{AppError, Result};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
struct Claims {
    sub: String,
    jti: String,
    iat: i64,
    exp: i64,
}

/// HMAC-SHA256 JWTs with the username as subject.
#[derive(Clone, Copy, Debug, Default)]
pub struct JwtTokenService;

impl TokenSigner for JwtTokenService {
    #[tracing::instrument(err(level = "warn"), skip(self, payload, secret))]
    fn create_token(&self, payload: &TokenPayload, secret: &str, expires_in: u64) -> Result<String> {
        let iat = OffsetDateTime::now_utc().unix_timestamp();
        let ttl = i64::try_from(expires_in).map_err(|_| AppError::Token("expiration out of range".to_string()))?;
        let claims = Claims {
            sub: payload.username.clone(),
            jti: Uuid::new_v4().to_string(),
            iat,
            exp: iat.saturating_add(ttl),
        };

        encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))
            .map_err(|e| AppError::Token(e.to_string()))
    }

    fn check_token(&self, token: &str, secret: &str) -> Result<TokenPayload> {
        let token_data = decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &Validation::default())
            .map_err(|e| {
                tracing::debug!(error = %e, "Token rejected");
                AppError::AuthError
            })?;

        Ok(TokenPayload { username: token_data.claims.sub })
    }
}
