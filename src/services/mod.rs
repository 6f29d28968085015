use crate::adapters::database::UserRepository;
use crate::adapters::hashing::PasswordHasher;
use crate::adapters::jwt::TokenSigner;
use crate::config::JwtConfig;
use std::sync::Arc;

pub mod is_authenticated_service;
pub mod login_service;
pub mod logout_service;

pub use is_authenticated_service::IsAuthenticatedService;
pub use login_service::LoginService;
pub use logout_service::LogoutService;

/// The auth use cases, wired from one set of collaborators.
#[derive(Clone, Debug)]
pub struct ServiceContainer {
    pub login_service: LoginService,
    pub is_authenticated_service: IsAuthenticatedService,
    pub logout_service: LogoutService,
}

impl ServiceContainer {
    #[must_use]
    pub fn new(
        jwt_service: Arc<dyn TokenSigner>,
        jwt_config: Arc<dyn JwtConfig>,
        user_repo: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            login_service: LoginService::new(jwt_service, jwt_config, Arc::clone(&user_repo), hasher),
            is_authenticated_service: IsAuthenticatedService::new(user_repo),
            logout_service: LogoutService::new(),
        }
    }
}
