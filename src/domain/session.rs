use crate::domain::auth::Cookie;
use crate::domain::user::UserWithoutPassword;

/// Result of a successful login: the caller's profile plus the two cookies to set.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: UserWithoutPassword,
    pub access_cookie: Cookie,
    pub refresh_cookie: Cookie,
}

impl LoginOutcome {
    /// Both cookies in the order they should be written to the response.
    #[must_use]
    pub fn cookies(&self) -> [&Cookie; 2] {
        [&self.access_cookie, &self.refresh_cookie]
    }
}
