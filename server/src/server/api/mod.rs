//! REST API handlers.

pub mod generate;

use axum::http::StatusCode;

/// Plain-text error response.
pub fn err_text(status: u16, message: impl Into<String>) -> (StatusCode, String) {
    (
        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        message.into(),
    )
}
