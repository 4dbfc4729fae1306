use ue_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Store failures surface to the service as persistence errors,
/// except a missing row which is a not-found.
impl From<DbError> for CoreError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::Sqlx {
                source: sqlx::Error::RowNotFound,
                ..
            } => CoreError::not_found("Resource not found"),
            DbError::Sqlx { source, .. } => {
                CoreError::persistence(format!("Database operation failed: {source}"))
            }
            DbError::Migration { message, .. } => {
                CoreError::persistence(format!("Database migration error: {message}"))
            }
            DbError::Initialization { message, .. } => {
                CoreError::persistence(format!("Database initialization error: {message}"))
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
