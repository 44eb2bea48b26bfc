//! Error types for the foodcart server application.
//!
//! Domain-specific error types (order validation, geocoding, configuration) aggregate into a
//! single [`Error`] enum. All errors implement `IntoResponse` for Axum HTTP responses and use
//! `thiserror` for ergonomic error definitions.

pub mod config;
pub mod geocode;
pub mod order;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, geocode::GeocodeError, order::OrderError},
};

/// Main error type for the foodcart server application.
///
/// Aggregates the domain-specific error types and external library errors into a single
/// unified error type, converted from the underlying errors via `?`. The `IntoResponse`
/// implementation maps errors to the appropriate HTTP responses.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Order submission error (field validation, unknown products).
    #[error(transparent)]
    OrderError(#[from] OrderError),
    /// Geocoding collaborator error (transport, bad status, malformed response).
    #[error(transparent)]
    GeocodeError(#[from] GeocodeError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Converts application errors into HTTP responses.
///
/// Order errors carry their own status mapping (400 for validation, 404 for unknown
/// products); everything else is a 500 with logging and a generic body.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::OrderError(err) => err.into_response(),
            Self::GeocodeError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
