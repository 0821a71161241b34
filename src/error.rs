//! Error types and handling for the Aetheris application

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Main error type for the Aetheris application
#[derive(Error, Debug)]
pub enum AetherisError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// No live session with this id
    #[error("Session not found: {id}")]
    SessionNotFound { id: Uuid },

    /// Navigation action not allowed from the current state
    #[error("Invalid transition: {message}")]
    InvalidTransition { message: String },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl AetherisError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new invalid transition error
    pub fn invalid_transition<S: Into<String>>(message: S) -> Self {
        Self::InvalidTransition {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AetherisError::Config { .. } => {
                "Configuration error. Please check your config file and environment.".to_string()
            }
            AetherisError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            AetherisError::SessionNotFound { .. } => {
                "Your session has expired. Please start a new one.".to_string()
            }
            AetherisError::InvalidTransition { message } => message.clone(),
            AetherisError::General { message } => message.clone(),
        }
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AetherisError::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
            AetherisError::SessionNotFound { .. } => (StatusCode::NOT_FOUND, "session_not_found"),
            AetherisError::InvalidTransition { .. } => {
                (StatusCode::CONFLICT, "invalid_transition")
            }
            AetherisError::Config { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            AetherisError::General { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

/// JSON body returned for error responses
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code
    pub error: &'static str,
    /// Human-readable error message
    pub message: String,
}

impl IntoResponse for AetherisError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = ErrorBody {
            error,
            message: self.user_message(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AetherisError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_error_creation() {
        let config_err = AetherisError::config("missing port");
        assert!(matches!(config_err, AetherisError::Config { .. }));

        let validation_err = AetherisError::validation("days out of range");
        assert!(matches!(validation_err, AetherisError::Validation { .. }));

        let transition_err = AetherisError::invalid_transition("no city");
        assert!(matches!(transition_err, AetherisError::InvalidTransition { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = AetherisError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let validation_err = AetherisError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));

        let missing = AetherisError::SessionNotFound { id: Uuid::nil() };
        assert!(missing.user_message().contains("expired"));
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_of(AetherisError::validation("x")), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(AetherisError::SessionNotFound { id: Uuid::new_v4() }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(status_of(AetherisError::invalid_transition("x")), StatusCode::CONFLICT);
        assert_eq!(
            status_of(AetherisError::config("x")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(AetherisError::general("x")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
