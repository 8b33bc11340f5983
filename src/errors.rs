use std::time::Duration;

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::models::BookingResponse;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("All fields are required")]
    Validation,

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("request body too large")]
    PayloadTooLarge,

    #[error("not found")]
    NotFound,

    #[error("spreadsheet append failed: {0:#}")]
    Spreadsheet(anyhow::Error),

    #[error("email delivery failed: {0:#}")]
    Mail(anyhow::Error),

    #[error("origin not allowed: {0}")]
    OriginNotAllowed(String),

    #[error("rate limited, retry in {}s", .0.as_secs())]
    RateLimited(Duration),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation => (StatusCode::BAD_REQUEST, "All fields are required"),
            AppError::InvalidBody(_) => (StatusCode::BAD_REQUEST, "Invalid request body"),
            AppError::PayloadTooLarge => (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large"),
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found"),
            AppError::Spreadsheet(_) | AppError::Mail(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error")
            }
            AppError::OriginNotAllowed(_) => (StatusCode::FORBIDDEN, "Not allowed by CORS"),
            AppError::RateLimited(_) => (
                StatusCode::TOO_MANY_REQUESTS,
                "Too many requests, please try again later.",
            ),
        };

        let mut response = (status, axum::Json(BookingResponse::failed(message))).into_response();
        if let AppError::RateLimited(retry_after) = &self {
            // Round up so clients never retry a fraction of a second early.
            let secs = retry_after.as_secs() + u64::from(retry_after.subsec_nanos() > 0);
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from(secs));
        }
        response
    }
}
