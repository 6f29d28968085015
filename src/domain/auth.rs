use crate::error::{AppError, Result};
use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// What a signed token asserts about its bearer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    pub username: String,
}

impl TokenPayload {
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self { username: username.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookieName {
    Authentication,
    Refresh,
}

impl CookieName {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Authentication => "Authentication",
            Self::Refresh => "Refresh",
        }
    }
}

impl fmt::Display for CookieName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An `HttpOnly` cookie scoped to `/`, rendered in `Set-Cookie` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: CookieName,
    pub value: String,
    pub max_age: u64,
}

impl Cookie {
    #[must_use]
    pub fn new(name: CookieName, value: impl Into<String>, max_age: u64) -> Self {
        Self { name, value: value.into(), max_age }
    }

    /// A cookie that tells the client to drop `name` immediately.
    #[must_use]
    pub const fn cleared(name: CookieName) -> Self {
        Self { name, value: String::new(), max_age: 0 }
    }

    /// Converts the cookie into a `Set-Cookie` header value.
    ///
    /// # Errors
    /// Returns `AppError::Internal` if the value contains bytes not allowed in a header.
    pub fn to_header_value(&self) -> Result<HeaderValue> {
        HeaderValue::from_str(&self.to_string()).map_err(|e| {
            tracing::error!(error = %e, cookie = %self.name, "Cookie is not a valid header value");
            AppError::Internal
        })
    }
}

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}; HttpOnly; Path=/; Max-Age={}", self.name, self.value, self.max_age)
    }
}

/// Compares two tokens by their SHA-256 digests rather than their raw bytes.
#[must_use]
pub fn secrets_match(presented: &str, stored: &str) -> bool {
    Sha256::digest(presented.as_bytes()) == Sha256::digest(stored.as_bytes())
}
