use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, HeaderValue, Method};
use axum::middleware::Next;
use axum::response::Response;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::errors::AppError;
use crate::state::AppState;

/// Rejects browser requests from origins outside the allow-list. Requests
/// without an `Origin` header (curl, server-to-server) pass through.
pub async fn enforce_origin(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(origin) = req.headers().get(header::ORIGIN) {
        let origin = origin.to_str().unwrap_or_default();
        if !is_allowed(&state.config.allowed_origins, origin) {
            tracing::warn!(origin = %origin, "rejected request from disallowed origin");
            return Err(AppError::OriginNotAllowed(origin.to_string()));
        }
    }

    Ok(next.run(req).await)
}

pub fn is_allowed(allowed: &[String], origin: &str) -> bool {
    allowed.iter().any(|o| o == origin)
}

pub fn cors_layer(allowed: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
