// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use crate::response::Envelope;

/// Global Application Error Enum.
/// Every variant renders as a failure envelope; only service failures are logged.
#[derive(Debug)]
pub enum AppError {
    /// Body or query string did not parse into the expected shape.
    /// Carries the parser's message, returned to the caller as is.
    Bind(String),

    /// A required field was empty.
    Validation(String),

    /// The service layer failed. The caller only sees `msg`; `source` goes to the log.
    Service {
        msg: &'static str,
        source: ServiceError,
    },

    // 401 Unauthorized
    Unauthorized(String),
}

impl AppError {
    pub fn service(msg: &'static str, source: ServiceError) -> Self {
        AppError::Service { msg, source }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Bind(msg) | AppError::Validation(msg) | AppError::Unauthorized(msg) => {
                f.write_str(msg)
            }
            AppError::Service { msg, source } => write!(f, "{}: {}", msg, source),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Service { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Implements `IntoResponse` for `AppError`.
/// Logical failures keep HTTP 200 and report through the envelope's `success` flag.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Bind(msg) | AppError::Validation(msg) => {
                Envelope::fail_with_message(msg).into_response()
            }
            AppError::Service { msg, source } => {
                tracing::error!(error = %source, "{}!", msg);
                Envelope::fail_with_message(msg).into_response()
            }
            AppError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, Json(Envelope::fail_with_message(msg))).into_response()
            }
        }
    }
}

/// Errors raised by a `BaikeService` implementation.
#[derive(Debug)]
pub enum ServiceError {
    /// No row matched the requested id.
    NotFound,
    Database(sqlx::Error),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::NotFound => f.write_str("record not found"),
            ServiceError::Database(err) => write!(f, "database error: {}", err),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServiceError::NotFound => None,
            ServiceError::Database(err) => Some(err),
        }
    }
}

/// Converts `sqlx::Error` into `ServiceError`.
/// Allows using `?` operator on database queries.
impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ServiceError::NotFound,
            other => ServiceError::Database(other),
        }
    }
}
