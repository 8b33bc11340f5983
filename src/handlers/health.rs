use crate::errors::AppError;

pub async fn health() -> &'static str {
    "Booking API is running"
}

pub async fn api_not_found() -> AppError {
    AppError::NotFound
}
