use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub email_user: String,
    pub email_pass: String,
    pub smtp_host: String,
    pub admin_email: String,
    pub google_service_account_email: Option<String>,
    pub google_private_key: Option<String>,
    pub google_sheet_id: Option<String>,
    pub sheet_range: String,
    pub allowed_origins: Vec<String>,
    pub rate_limit_max: usize,
    pub trust_proxy: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let email_user = env::var("EMAIL_USER").unwrap_or_default();
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            email_pass: env::var("EMAIL_PASS").unwrap_or_default(),
            smtp_host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            admin_email: non_empty_var("ADMIN_EMAIL").unwrap_or_else(|| email_user.clone()),
            email_user,
            google_service_account_email: non_empty_var("GOOGLE_SERVICE_ACCOUNT_EMAIL"),
            google_private_key: non_empty_var("GOOGLE_PRIVATE_KEY").map(|k| unescape_private_key(&k)),
            google_sheet_id: non_empty_var("GOOGLE_SHEET_ID"),
            sheet_range: env::var("SHEET_RANGE").unwrap_or_else(|_| "Sheet1!A:F".to_string()),
            allowed_origins: parse_origins(
                &env::var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "http://localhost:3000,http://localhost:5173".to_string()),
            ),
            rate_limit_max: env::var("RATE_LIMIT_MAX")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            trust_proxy: env::var("TRUST_PROXY")
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Private keys pasted into a single-line env var carry literal `\n` sequences.
pub fn unescape_private_key(raw: &str) -> String {
    raw.replace("\\n", "\n")
}

pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().trim_end_matches('/'))
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
