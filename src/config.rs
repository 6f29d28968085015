use clap::{Args, Parser, ValueEnum};

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    #[command(flatten)]
    pub auth: AuthConfig,

    #[command(flatten)]
    pub telemetry: TelemetryConfig,
}

#[derive(Clone, Debug, Args)]
pub struct AuthConfig {
    /// Secret key for access token signing
    #[arg(long, env = "GATEKEEPER_JWT_SECRET")]
    pub jwt_secret: String,

    /// Access token time-to-live in seconds, also the Max-Age of the Authentication cookie
    #[arg(long, env = "GATEKEEPER_JWT_EXPIRATION_TIME", default_value_t = 1800)]
    pub jwt_expiration_time: u64,

    /// Secret key for refresh token signing
    #[arg(long, env = "GATEKEEPER_JWT_REFRESH_SECRET")]
    pub jwt_refresh_secret: String,

    /// Refresh token time-to-live in seconds, also the Max-Age of the Refresh cookie
    #[arg(long, env = "GATEKEEPER_JWT_REFRESH_EXPIRATION_TIME", default_value_t = 86400)]
    pub jwt_refresh_expiration_time: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, Args)]
pub struct TelemetryConfig {
    /// Log output format
    #[arg(long, env = "GATEKEEPER_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Config {
    #[must_use]
    pub fn load() -> Self {
        Self::parse()
    }
}

/// Read access to the signing parameters of both token kinds.
pub trait JwtConfig: Send + Sync + std::fmt::Debug {
    fn jwt_secret(&self) -> &str;
    fn jwt_expiration_time(&self) -> u64;
    fn jwt_refresh_secret(&self) -> &str;
    fn jwt_refresh_expiration_time(&self) -> u64;
}

impl JwtConfig for AuthConfig {
    fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }

    fn jwt_expiration_time(&self) -> u64 {
        self.jwt_expiration_time
    }

    fn jwt_refresh_secret(&self) -> &str {
        &self.jwt_refresh_secret
    }

    fn jwt_refresh_expiration_time(&self) -> u64 {
        self.jwt_refresh_expiration_time
    }
}
