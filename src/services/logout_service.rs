use crate::domain::auth::{Cookie, CookieName};
use opentelemetry::{global, metrics::Counter};

#[derive(Clone, Debug)]
struct Metrics {
    logout_total: Counter<u64>,
}

impl Metrics {
    fn new() -> Self {
        let meter = global::meter("gatekeeper");
        Self {
            logout_total: meter
                .u64_counter("auth_logout_total")
                .with_description("Total number of logouts")
                .build(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct LogoutService {
    metrics: Metrics,
}

impl LogoutService {
    #[must_use]
    pub fn new() -> Self {
        Self { metrics: Metrics::new() }
    }

    /// Cookies that overwrite and expire both session cookies.
    #[tracing::instrument(skip(self))]
    pub fn execute(&self) -> [Cookie; 2] {
        self.metrics.logout_total.add(1, &[]);
        [Cookie::cleared(CookieName::Authentication), Cookie::cleared(CookieName::Refresh)]
    }
}

impl Default for LogoutService {
    fn default() -> Self {
        Self::new()
    }
}
