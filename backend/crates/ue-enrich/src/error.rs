use ue_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures talking to, or interpreting, an upstream prediction source
#[derive(Error, Debug)]
pub enum EnrichError {
    #[error("{upstream} request failed: {message} {location}")]
    Http {
        upstream: &'static str,
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("{upstream} returned HTTP {status} {location}")]
    Status {
        upstream: &'static str,
        status: u16,
        location: ErrorLocation,
    },

    #[error("Invalid {upstream} URL '{url}': {message} {location}")]
    InvalidUrl {
        upstream: &'static str,
        url: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("{upstream} response has no usable '{field}' {location}")]
    MissingField {
        upstream: &'static str,
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("HTTP client setup failed: {message} {location}")]
    Client {
        message: String,
        location: ErrorLocation,
    },
}

impl EnrichError {
    #[track_caller]
    pub fn http(upstream: &'static str, err: reqwest::Error) -> Self {
        EnrichError::Http {
            upstream,
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn missing_field(upstream: &'static str, field: &'static str) -> Self {
        EnrichError::MissingField {
            upstream,
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message for API consumers, without the source location
    pub fn summary(&self) -> String {
        match self {
            EnrichError::Http {
                upstream, message, ..
            } => format!("{upstream} request failed: {message}"),
            EnrichError::Status {
                upstream, status, ..
            } => format!("{upstream} returned HTTP {status}"),
            EnrichError::InvalidUrl { upstream, url, .. } => {
                format!("invalid {upstream} URL '{url}'")
            }
            EnrichError::MissingField {
                upstream, field, ..
            } => format!("{field} not found in {upstream} response"),
            EnrichError::Client { message, .. } => format!("HTTP client setup failed: {message}"),
        }
    }
}

impl From<EnrichError> for CoreError {
    #[track_caller]
    fn from(e: EnrichError) -> Self {
        log::warn!("Enrichment failed: {}", e);
        CoreError::upstream(e.summary())
    }
}

pub type Result<T> = std::result::Result<T, EnrichError>;
