//! REST API error types
//!
//! Every failure leaves the server as `{"error": {"code", "message", "field"?}}`
//! with a status code matching its category.

use ue_core::CoreError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Malformed request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Enrichment sources failed while creating a user (400)
    #[error("Enrichment failed: {message} {location}")]
    EnrichmentFailed {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        /// Server-side cause, logged but never sent to the client
        detail: Option<String>,
        location: ErrorLocation,
    },

    /// Request deadline exceeded (503)
    #[error("Unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create-path mapping: upstream failures are the client's problem
    /// (unknown name) and answer 400 instead of 500.
    #[track_caller]
    pub fn from_create(e: CoreError) -> Self {
        match e {
            CoreError::UpstreamData { message, .. } => ApiError::EnrichmentFailed {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            other => ApiError::from(other),
        }
    }

    /// Update-path mapping: a missing user is reported as an internal
    /// failure with a "User not found" message.
    #[track_caller]
    pub fn from_update(e: CoreError) -> Self {
        match e {
            CoreError::NotFound { message, .. } => ApiError::Internal {
                message,
                detail: None,
                location: ErrorLocation::from(Location::caller()),
            },
            other => ApiError::from(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal {
                detail: Some(detail),
                ..
            } => log::error!("{} ({})", self, detail),
            _ => log::error!("{}", self),
        }

        let (status, code, message, field) = match self {
            ApiError::NotFound { message, .. } => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", message, None)
            }
            ApiError::Validation { message, field, .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message, field)
            }
            ApiError::BadRequest { message, .. } => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", message, None)
            }
            ApiError::EnrichmentFailed { message, .. } => {
                (StatusCode::BAD_REQUEST, "ENRICHMENT_FAILED", message, None)
            }
            ApiError::Internal { message, .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", message, None)
            }
            ApiError::Unavailable { message, .. } => {
                (StatusCode::SERVICE_UNAVAILABLE, "ABORTED", message, None)
            }
        };

        let body = ApiErrorBody {
            code: code.into(),
            message,
            field,
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert core errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            CoreError::NotFound { message, .. } => ApiError::NotFound { message, location },
            CoreError::UpstreamData { message, .. } => ApiError::Internal {
                message,
                detail: None,
                location,
            },
            // Store details stay in the log
            CoreError::Persistence { message, .. } => ApiError::Internal {
                message: "Database operation failed".to_string(),
                detail: Some(message),
                location,
            },
            CoreError::Aborted { message, .. } => ApiError::Unavailable { message, location },
        }
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: Some("id".to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert JSON body rejections to API errors
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(e: JsonRejection) -> Self {
        ApiError::bad_request(format!("Invalid request body: {}", e.body_text()))
    }
}

/// Convert query string rejections to API errors
impl From<QueryRejection> for ApiError {
    #[track_caller]
    fn from(e: QueryRejection) -> Self {
        ApiError::bad_request(format!("Invalid query string: {}", e.body_text()))
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
