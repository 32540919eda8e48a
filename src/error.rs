//! stringstore error types
//!
//! Every error is handled at the request boundary: handlers return
//! `Result<_, Error>` and the `IntoResponse` impl renders the matching
//! HTTP status with an `{"error": <string>}` body. Internal failures are
//! logged server-side and surface only a generic message to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// stringstore error type
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or missing input (HTTP 400)
    #[error("{0}")]
    Validation(String),

    /// Input present but of the wrong type (HTTP 422)
    #[error("{0}")]
    InvalidType(String),

    /// No record for the requested value (HTTP 404)
    #[error("{0}")]
    NotFound(String),

    /// Duplicate content (HTTP 409)
    #[error("{0}")]
    Conflict(String),

    /// Natural-language query produced no filters (HTTP 400)
    #[error("{0}")]
    QueryParse(String),

    /// Natural-language query produced unusable filters (HTTP 422)
    #[error("{0}")]
    QueryConflict(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error (HTTP 500, generic message to the client)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for stringstore operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wire shape shared by every error response
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Error::Validation(msg) | Error::QueryParse(msg) => (StatusCode::BAD_REQUEST, msg),
            Error::InvalidType(msg) | Error::QueryConflict(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, msg)
            }
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Error::Conflict(msg) => (StatusCode::CONFLICT, msg),
            other => {
                tracing::error!(error = %other, "internal error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: Error) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_of(Error::Validation("bad".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(Error::InvalidType("bad".into())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(Error::NotFound("missing".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(Error::Conflict("dup".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(Error::QueryParse("bad".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(Error::QueryConflict("bad".into())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(Error::Internal("boom".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_error_hides_detail() {
        let resp = Error::Internal("secret detail".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
