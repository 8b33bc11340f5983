use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use bookcall::config::AppConfig;
use bookcall::routes;
use bookcall::services::mail::smtp::SmtpMailProvider;
use bookcall::services::sheets::google::GoogleSheetsProvider;
use bookcall::services::sheets::SheetsProvider;
use bookcall::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let sheets = connect_sheets(&config).await;

    let mail = SmtpMailProvider::new(
        &config.smtp_host,
        config.email_user.clone(),
        config.email_pass.clone(),
    )?;
    let probe = mail.clone();
    tokio::spawn(async move {
        match probe.verify().await {
            Ok(()) => tracing::info!("mail transport ready"),
            Err(e) => tracing::error!("mail transport check failed: {e:#}"),
        }
    });

    let state = Arc::new(AppState::new(config.clone(), sheets, Box::new(mail)));
    let app = routes::app(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Authorizes the sheets client once. Any failure leaves the service running
/// with sheet logging disabled for the life of the process.
async fn connect_sheets(config: &AppConfig) -> Option<Box<dyn SheetsProvider>> {
    let (Some(email), Some(key), Some(sheet_id)) = (
        config.google_service_account_email.as_deref(),
        config.google_private_key.as_deref(),
        config.google_sheet_id.clone(),
    ) else {
        tracing::warn!("Google Sheets credentials not configured, sheet logging disabled");
        return None;
    };

    match GoogleSheetsProvider::authorize(email, key, sheet_id, config.sheet_range.clone()).await {
        Ok(provider) => {
            tracing::info!("Google Sheets authorized");
            Some(Box::new(provider))
        }
        Err(e) => {
            tracing::error!("Google Sheets authorization failed, sheet logging disabled: {e:#}");
            None
        }
    }
}
