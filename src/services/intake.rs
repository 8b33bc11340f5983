use uuid::Uuid;

use crate::errors::AppError;
use crate::models::Booking;
use crate::state::AppState;

use super::notification;

pub const SUBMITTED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Logs the booking to the sheet (when available) and then emails the admin.
/// Each external call is attempted once; the first failure aborts the rest.
pub async fn submit_booking(state: &AppState, booking: &Booking) -> Result<(), AppError> {
    let submission_id = Uuid::new_v4();
    tracing::info!(
        %submission_id,
        name = %booking.name,
        phone = %booking.phone,
        service = %booking.service,
        date = %booking.date,
        time = %booking.time,
        "booking received"
    );

    match &state.sheets {
        Some(sheets) => {
            let submitted_at = chrono::Local::now().format(SUBMITTED_AT_FORMAT).to_string();
            sheets
                .append_row(&booking.sheet_row(&submitted_at))
                .await
                .map_err(AppError::Spreadsheet)
                .inspect_err(|e| tracing::error!(%submission_id, error = %e, "sheet append failed"))?;
            tracing::info!(%submission_id, "booking appended to sheet");
        }
        None => {
            tracing::warn!(%submission_id, "sheets unavailable, skipping append");
        }
    }

    let email = notification::booking_email(
        booking,
        &state.config.email_user,
        &state.config.admin_email,
    );
    state
        .mail
        .send_email(&email)
        .await
        .map_err(AppError::Mail)
        .inspect_err(|e| tracing::error!(%submission_id, error = %e, "notification email failed"))?;
    tracing::info!(%submission_id, to = %email.to, "notification email sent");

    Ok(())
}
