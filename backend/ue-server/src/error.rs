use thiserror::Error;

/// Startup failures of the server binary
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] ue_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] ue_db::DbError),

    #[error("Enrichment client error: {0}")]
    Enrichment(#[from] ue_enrich::EnrichError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
