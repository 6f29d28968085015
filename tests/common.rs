use gatekeeper::adapters::database::InMemoryUserRepository;
use gatekeeper::adapters::hashing::{Argon2Hasher, PasswordHasher};
use gatekeeper::adapters::jwt::JwtTokenService;
use gatekeeper::config::AuthConfig;
use gatekeeper::domain::user::User;
use gatekeeper::services::ServiceContainer;
use std::sync::{Arc, Once};

static INIT: Once = Once::new();

pub fn setup_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "warn".into())
            .add_directive("gatekeeper=debug".parse().unwrap());

        tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().init();
    });
}

pub fn get_test_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "test_secret".to_string(),
        jwt_expiration_time: 200,
        jwt_refresh_secret: "test_refresh_secret".to_string(),
        jwt_refresh_expiration_time: 400,
    }
}

pub struct TestApp {
    pub services: ServiceContainer,
    pub user_repo: InMemoryUserRepository,
    #[allow(dead_code)]
    pub config: AuthConfig,
}

impl TestApp {
    pub fn spawn() -> Self {
        setup_tracing();
        let config = get_test_config();
        let user_repo = InMemoryUserRepository::new();
        let services = ServiceContainer::new(
            Arc::new(JwtTokenService),
            Arc::new(config.clone()),
            Arc::new(user_repo.clone()),
            Arc::new(Argon2Hasher),
        );

        Self { services, user_repo, config }
    }

    pub async fn register(&self, username: &str, password: &str) -> User {
        let hash = Argon2Hasher.hash(password).await.unwrap();
        let user = User::new(username, hash);
        self.user_repo.insert(user.clone()).unwrap();
        user
    }
}
