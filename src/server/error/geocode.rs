use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Failure of a single outbound geocoding lookup.
///
/// Batch resolution treats every variant as non-fatal for the batch: the affected address
/// is skipped and the remaining addresses still resolve.
#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("geocoder request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("geocoder returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("geocoder response missing expected structure: {0}")]
    MalformedResponse(String),
}

impl IntoResponse for GeocodeError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
