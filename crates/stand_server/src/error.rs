//! HTTP error mapping.
//!
//! Every failure leaves the server as `{"detail": "..."}` with the status
//! from [`StandError::http_status`]. Internal errors are logged here and
//! rendered with a generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use stand_core::StandError;

pub const NOT_FOUND_DETAIL: &str = "Stand not found";
pub const INTERNAL_DETAIL: &str = "Internal Server Error";

#[derive(Debug)]
pub struct AppError(pub StandError);

impl From<StandError> for AppError {
    fn from(err: StandError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let detail = match &self.0 {
            StandError::NotFound(what) => {
                tracing::debug!("{what} not found");
                NOT_FOUND_DETAIL.to_string()
            }
            StandError::InvalidInput(msg) => msg.clone(),
            StandError::Internal(err) => {
                tracing::error!("request failed: {err:#}");
                INTERNAL_DETAIL.to_string()
            }
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
