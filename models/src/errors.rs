// models/src/errors.rs
use std::io;
pub use thiserror::Error;
use anyhow::Error as AnyhowError;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeJsonError;
use tokio::task::JoinError;

/// Error taxonomy shared by every crate in the workspace.
///
/// Backend and provider failures are carried as strings: callers convert
/// them into boolean/enum signals at the store boundary and never re-throw
/// (see the session store), so the payload only has to be loggable.
#[derive(Debug, Serialize, Deserialize, Error, Clone)]
pub enum HubError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("Authentication error: {0}")]
    Auth(String),
    #[error("Authorization error: {0}")]
    Authorization(String),
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Backend rejected the request: {0}")]
    BackendRejected(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Deserialization error: {0}")]
    DeserializationError(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("entity with id {0} was not found")]
    NotFound(String),
    #[error("Validation error: {0}")]
    Validation(ValidationError),
    #[error("An internal error occurred: {0}")]
    InternalError(String),
    #[error("An unknown error occurred.")]
    Unknown,
}

// Implement the From trait for &str
impl From<&str> for HubError {
    fn from(error: &str) -> Self {
        HubError::InvalidRequest(error.to_string())
    }
}

impl From<reqwest::Error> for HubError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            HubError::NetworkError(format!("Backend unreachable: {}", err))
        } else if err.is_decode() {
            HubError::DeserializationError(format!("Backend response decode error: {}", err))
        } else {
            HubError::NetworkError(format!("HTTP error: {}", err))
        }
    }
}

// Implement From for serde_json::Error
impl From<SerdeJsonError> for HubError {
    fn from(err: SerdeJsonError) -> Self {
        HubError::SerializationError(format!("JSON serialization error: {}", err))
    }
}

// Implement From for anyhow::Error
impl From<AnyhowError> for HubError {
    fn from(err: AnyhowError) -> Self {
        HubError::InternalError(format!("Underlying operation failed: {}", err))
    }
}

// Implement From for io::Error
impl From<io::Error> for HubError {
    fn from(err: io::Error) -> Self {
        HubError::Io(format!("IO error: {}", err))
    }
}

// Implement From for JoinError
impl From<JoinError> for HubError {
    fn from(err: JoinError) -> Self {
        HubError::InternalError(format!("Task failed to join: {}", err))
    }
}

// Implement From for ValidationError
impl From<ValidationError> for HubError {
    fn from(err: ValidationError) -> Self {
        HubError::Validation(err)
    }
}

#[derive(Debug, Serialize, Deserialize, Error, PartialEq, Clone)]
pub enum ValidationError {
    #[error("invalid value provided")]
    InvalidValue,
    #[error("required field '{0}' is missing or empty")]
    MissingField(String),
    #[error("unknown status value '{0}'")]
    UnknownStatus(String),
    #[error("occupied count {occupied} exceeds total capacity {total}")]
    OccupancyExceedsTotal { occupied: u32, total: u32 },
    #[error("quantity must be greater than zero")]
    ZeroQuantity,
    #[error("malformed phone number: {0}")]
    MalformedPhoneNumber(String),
    #[error("invalid date format: {0}")]
    InvalidDateFormat(String),
}

/// A type alias for a `Result` that returns a `HubError` on failure.
pub type HubResult<T> = Result<T, HubError>;

/// A type alias for a `Result` that returns a `ValidationError` on failure.
pub type ValidationResult<T> = Result<T, ValidationError>;
