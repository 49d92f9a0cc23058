//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the Roster service.
///
/// Domain variants map one-to-one onto the machine-readable codes the API
/// returns; infrastructure variants all surface as internal errors.
#[derive(Error, Debug)]
pub enum RosterError {
    // ============ Domain Errors ============
    /// Required `user_name` was missing or blank.
    #[error("user_name must not be empty")]
    EmptyUsername,

    /// Required `email` was missing or blank.
    #[error("email must not be empty")]
    EmptyEmail,

    /// A user with the same `user_name` already exists.
    #[error("user_name '{0}' is already taken")]
    UsernameExists(String),

    /// A user with the same `email` already exists.
    #[error("email '{0}' is already registered")]
    EmailExists(String),

    /// No user matches the requested `user_name`.
    #[error("user not found")]
    UserNotFound,

    // ============ Infrastructure Errors ============
    /// Entity store error.
    #[error("storage error: {0}")]
    Storage(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),

    /// Generic error wrapper.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RosterError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::EmptyUsername | Self::EmptyEmail => 400,
            Self::UserNotFound => 404,
            Self::UsernameExists(_) | Self::EmailExists(_) => 409,
            Self::Storage(_) | Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => 500,
        }
    }

    /// Returns the machine-readable error code.
    ///
    /// Conflict codes carry the offending value after a colon, e.g.
    /// `ERR_USERNAME_EXISTS:alice`.
    #[must_use]
    pub fn error_code(&self) -> String {
        match self {
            Self::EmptyUsername => "ERR_EMPTY_USERNAME".to_string(),
            Self::EmptyEmail => "ERR_EMPTY_EMAIL".to_string(),
            Self::UsernameExists(name) => format!("ERR_USERNAME_EXISTS:{}", name),
            Self::EmailExists(email) => format!("ERR_EMAIL_EXISTS:{}", email),
            Self::UserNotFound => "ERR_USER_NOT_FOUND".to_string(),
            Self::Storage(_) => "ERR_STORAGE".to_string(),
            Self::Configuration(_) => "ERR_CONFIGURATION".to_string(),
            Self::Internal(_) | Self::Other(_) => "ERR_INTERNAL".to_string(),
        }
    }

    /// Creates a storage error.
    #[must_use]
    pub fn storage<T: Into<String>>(message: T) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error is a client error (4xx).
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyUsername
                | Self::EmptyEmail
                | Self::UsernameExists(_)
                | Self::EmailExists(_)
                | Self::UserNotFound
        )
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error payload for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new error response from a [`RosterError`].
    #[must_use]
    pub fn from_error(error: &RosterError) -> Self {
        Self {
            code: error.error_code(),
            message: error.to_string(),
        }
    }
}

impl From<&RosterError> for ErrorResponse {
    fn from(error: &RosterError) -> Self {
        Self::from_error(error)
    }
}
