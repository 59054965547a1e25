// --- File: crates/bookify_common/src/error.rs ---
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// The base error type for widget-facing failures.
///
/// Each crate maps its specific errors into this enum at the HTTP
/// boundary; domain code keeps its own error types.
#[derive(Error, Debug)]
pub enum WidgetError {
    /// A required piece of configuration is absent. Non-fatal for the
    /// availability view, which degrades instead, but fatal for
    /// operations that cannot proceed without it.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred while parsing or validating request data
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The external busy-interval feed could not be reached
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for WidgetError {
    fn status_code(&self) -> u16 {
        match self {
            WidgetError::ConfigError(_) => 500,
            WidgetError::ValidationError(_) => 400,
            WidgetError::ExternalServiceError { .. } => 502,
            WidgetError::InternalError(_) => 500,
        }
    }
}

impl IntoResponse for WidgetError {
    fn into_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = Json(json!({
            "error": {
                "message": self.to_string(),
                "code": status_code.as_u16(),
            }
        }));

        (status_code, body).into_response()
    }
}

/// Utility constructors for the common cases.
pub fn config_error<T: std::fmt::Display>(message: T) -> WidgetError {
    WidgetError::ConfigError(message.to_string())
}

pub fn validation_error<T: std::fmt::Display>(message: T) -> WidgetError {
    WidgetError::ValidationError(message.to_string())
}

pub fn external_service_error<T: std::fmt::Display>(service_name: &str, message: T) -> WidgetError {
    WidgetError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}
