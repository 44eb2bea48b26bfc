use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum OrderError {
    /// A field of the submission payload failed validation. The response body maps the
    /// offending field name to its error message, one error per field.
    #[error("{field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
    /// An order line references a product that does not exist in the catalog. The whole
    /// submission is rejected; no order or line rows are created.
    #[error("Product with id {0} does not exist")]
    ProductNotFound(i32),
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                Json(HashMap::from([(field, message)])),
            )
                .into_response(),
            err @ Self::ProductNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
