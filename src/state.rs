use std::time::Duration;

use crate::config::AppConfig;
use crate::middleware::rate_limit::RateLimiter;
use crate::services::mail::MailProvider;
use crate::services::sheets::SheetsProvider;

pub const RATE_LIMIT_WINDOW: Duration = Duration::from_secs(15 * 60);

pub struct AppState {
    pub config: AppConfig,
    /// `None` when the service account never authorized; appends are skipped.
    pub sheets: Option<Box<dyn SheetsProvider>>,
    pub mail: Box<dyn MailProvider>,
    pub rate_limiter: RateLimiter,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        sheets: Option<Box<dyn SheetsProvider>>,
        mail: Box<dyn MailProvider>,
    ) -> Self {
        let rate_limiter = RateLimiter::new(config.rate_limit_max, RATE_LIMIT_WINDOW);
        Self {
            config,
            sheets,
            mail,
            rate_limiter,
        }
    }
}
