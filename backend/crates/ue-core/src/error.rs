use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Upstream data error: {message} {location}")]
    UpstreamData {
        message: String,
        location: ErrorLocation,
    },

    #[error("Persistence error: {message} {location}")]
    Persistence {
        message: String,
        location: ErrorLocation,
    },

    #[error("Operation aborted: {message} {location}")]
    Aborted {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        CoreError::Validation {
            message: message.into(),
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        CoreError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        CoreError::UpstreamData {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn persistence<S: Into<String>>(message: S) -> Self {
        CoreError::Persistence {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn aborted<S: Into<String>>(message: S) -> Self {
        CoreError::Aborted {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Prefix the message with call-site context. The variant and the
    /// original location are kept, so callers never reclassify a failure.
    pub fn context(self, context: &str) -> Self {
        let prefix = |message: String| format!("{context}: {message}");
        match self {
            CoreError::Validation {
                message,
                field,
                location,
            } => CoreError::Validation {
                message: prefix(message),
                field,
                location,
            },
            CoreError::NotFound { message, location } => CoreError::NotFound {
                message: prefix(message),
                location,
            },
            CoreError::UpstreamData { message, location } => CoreError::UpstreamData {
                message: prefix(message),
                location,
            },
            CoreError::Persistence { message, location } => CoreError::Persistence {
                message: prefix(message),
                location,
            },
            CoreError::Aborted { message, location } => CoreError::Aborted {
                message: prefix(message),
                location,
            },
        }
    }

    /// Human-readable message without the location suffix
    pub fn message(&self) -> &str {
        match self {
            CoreError::Validation { message, .. }
            | CoreError::NotFound { message, .. }
            | CoreError::UpstreamData { message, .. }
            | CoreError::Persistence { message, .. }
            | CoreError::Aborted { message, .. } => message,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::NotFound { .. })
    }
}

pub type Result<T> = StdResult<T, CoreError>;
