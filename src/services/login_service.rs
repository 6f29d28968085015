use crate::adapters::database::UserRepository;
use crate::adapters::hashing::PasswordHasher;
use crate::adapters::jwt::TokenSigner;
use crate::config::JwtConfig;
use crate::domain::auth::{Cookie, CookieName, TokenPayload, secrets_match};
use crate::domain::session::LoginOutcome;
use crate::domain::user::UserWithoutPassword;
use crate::error::{AppError, Result};
use opentelemetry::{global, metrics::Counter};
use std::sync::Arc;

#[derive(Clone, Debug)]
struct Metrics {
    login_total: Counter<u64>,
    refresh_issued_total: Counter<u64>,
}

impl Metrics {
    fn new() -> Self {
        let meter = global::meter("gatekeeper");
        Self {
            login_total: meter
                .u64_counter("auth_login_total")
                .with_description("Total number of successful login attempts")
                .build(),
            refresh_issued_total: meter
                .u64_counter("auth_refresh_issued_total")
                .with_description("Total number of refresh tokens issued")
                .build(),
        }
    }
}

/// Credential checks and cookie issuance for the login flow.
#[derive(Clone, Debug)]
pub struct LoginService {
    jwt_service: Arc<dyn TokenSigner>,
    jwt_config: Arc<dyn JwtConfig>,
    user_repo: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    metrics: Metrics,
}

impl LoginService {
    #[must_use]
    pub fn new(
        jwt_service: Arc<dyn TokenSigner>,
        jwt_config: Arc<dyn JwtConfig>,
        user_repo: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self { jwt_service, jwt_config, user_repo, hasher, metrics: Metrics::new() }
    }

    /// Builds the `Authentication` cookie carrying a fresh access token.
    ///
    /// # Errors
    /// Propagates signer failures.
    #[tracing::instrument(err(level = "warn"), skip(self))]
    pub async fn get_cookie_with_jwt_token(&self, username: &str) -> Result<Cookie> {
        let expires_in = self.jwt_config.jwt_expiration_time();
        let token =
            self.jwt_service.create_token(&TokenPayload::new(username), self.jwt_config.jwt_secret(), expires_in)?;

        Ok(Cookie::new(CookieName::Authentication, token, expires_in))
    }

    /// Builds the `Refresh` cookie and remembers its token on the account.
    ///
    /// The token is persisted before the cookie is returned.
    ///
    /// # Errors
    /// Propagates signer and repository failures.
    #[tracing::instrument(err(level = "warn"), skip(self))]
    pub async fn get_cookie_with_jwt_refresh_token(&self, username: &str) -> Result<Cookie> {
        let expires_in = self.jwt_config.jwt_refresh_expiration_time();
        let token = self.jwt_service.create_token(
            &TokenPayload::new(username),
            self.jwt_config.jwt_refresh_secret(),
            expires_in,
        )?;

        self.user_repo.update_refresh_token(username, &token).await?;
        self.metrics.refresh_issued_total.add(1, &[]);

        Ok(Cookie::new(CookieName::Refresh, token, expires_in))
    }

    /// Checks a username/password pair. Unknown users and wrong passwords both yield `Ok(None)`.
    ///
    /// # Errors
    /// Propagates repository and hasher failures.
    #[tracing::instrument(err(level = "warn"), skip(self, password))]
    pub async fn validate_user_for_local_strategy(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<UserWithoutPassword>> {
        let Some(user) = self.user_repo.get_user_by_username(username).await? else {
            tracing::warn!("Login failed: user not found");
            return Ok(None);
        };

        if !self.hasher.compare(password, &user.password_hash).await? {
            tracing::warn!("Login failed: invalid password");
            return Ok(None);
        }

        Ok(Some(user.into()))
    }

    /// Resolves the subject of an already verified access token.
    ///
    /// # Errors
    /// Propagates repository failures.
    #[tracing::instrument(err(level = "warn"), skip(self))]
    pub async fn validate_user_for_jwt_strategy(&self, username: &str) -> Result<Option<UserWithoutPassword>> {
        Ok(self.user_repo.get_user_by_username(username).await?.map(Into::into))
    }

    /// Returns the account only if `refresh_token` is the one last issued to it.
    ///
    /// # Errors
    /// Propagates repository failures.
    #[tracing::instrument(err(level = "warn"), skip(self, refresh_token))]
    pub async fn get_user_if_refresh_token_matches(
        &self,
        refresh_token: &str,
        username: &str,
    ) -> Result<Option<UserWithoutPassword>> {
        let Some(user) = self.user_repo.get_user_by_username(username).await? else {
            return Ok(None);
        };

        let matches = user.refresh_token.as_deref().is_some_and(|stored| secrets_match(refresh_token, stored));
        if !matches {
            tracing::warn!("Refresh token does not match the stored one");
            return Ok(None);
        }

        Ok(Some(user.into()))
    }

    /// Verifies an access token and loads its user.
    ///
    /// # Errors
    /// Returns `AppError::AuthError` if the token is invalid or its user no longer exists.
    #[tracing::instrument(err(level = "warn"), skip(self, token))]
    pub async fn authenticate_access_token(&self, token: &str) -> Result<UserWithoutPassword> {
        let payload = self.jwt_service.check_token(token, self.jwt_config.jwt_secret())?;
        self.validate_user_for_jwt_strategy(&payload.username).await?.ok_or(AppError::AuthError)
    }

    /// Verifies a refresh token and loads its user, provided the token is still the current one.
    ///
    /// # Errors
    /// Returns `AppError::AuthError` if the token is invalid, superseded, or its user no longer exists.
    #[tracing::instrument(err(level = "warn"), skip(self, token))]
    pub async fn authenticate_refresh_token(&self, token: &str) -> Result<UserWithoutPassword> {
        let payload = self.jwt_service.check_token(token, self.jwt_config.jwt_refresh_secret())?;
        self.get_user_if_refresh_token_matches(token, &payload.username).await?.ok_or(AppError::AuthError)
    }

    /// Full credential login: validates, stamps the login time and issues both cookies.
    ///
    /// # Errors
    /// Returns `AppError::BadRequest` for empty credentials and `AppError::AuthError` if they
    /// do not check out. Collaborator failures propagate.
    #[tracing::instrument(
        skip(self, username, password),
        fields(user_id = tracing::field::Empty),
        err(level = "warn")
    )]
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome> {
        if username.is_empty() || password.is_empty() {
            return Err(AppError::BadRequest("Username and password are required".to_string()));
        }

        let user = self.validate_user_for_local_strategy(username, password).await?.ok_or(AppError::AuthError)?;

        tracing::Span::current().record("user_id", tracing::field::display(user.id));

        self.user_repo.update_last_login(username).await?;

        let access_cookie = self.get_cookie_with_jwt_token(username).await?;
        let refresh_cookie = self.get_cookie_with_jwt_refresh_token(username).await?;

        tracing::info!("User logged in");
        self.metrics.login_total.add(1, &[]);

        Ok(LoginOutcome { user, access_cookie, refresh_cookie })
    }
}
