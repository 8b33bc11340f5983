use std::sync::Arc;

use axum::extract::{FromRequest, Request, State};
use axum::http::{header, StatusCode};
use axum::{async_trait, Form, Json};

use crate::errors::AppError;
use crate::models::{BookingForm, BookingResponse};
use crate::services::intake;
use crate::state::AppState;

pub const SUCCESS_MESSAGE: &str = "Booking saved & email sent";

/// Booking form read from either a JSON or a urlencoded body.
pub struct BookingPayload(pub BookingForm);

#[async_trait]
impl<S> FromRequest<S> for BookingPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        let form = if is_form {
            Form::<BookingForm>::from_request(req, state)
                .await
                .map(|Form(f)| f)
                .map_err(|r| body_error(r.status(), r.body_text()))?
        } else {
            Json::<BookingForm>::from_request(req, state)
                .await
                .map(|Json(f)| f)
                .map_err(|r| body_error(r.status(), r.body_text()))?
        };

        Ok(BookingPayload(form))
    }
}

fn body_error(status: StatusCode, reason: String) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        tracing::debug!(%status, reason = %reason, "rejected booking body");
        AppError::InvalidBody(reason)
    }
}

// POST /api/book-call
pub async fn book_call(
    State(state): State<Arc<AppState>>,
    BookingPayload(form): BookingPayload,
) -> Result<Json<BookingResponse>, AppError> {
    let booking = form.validate().ok_or(AppError::Validation)?;

    intake::submit_booking(&state, &booking).await?;

    Ok(Json(BookingResponse::ok(SUCCESS_MESSAGE)))
}
