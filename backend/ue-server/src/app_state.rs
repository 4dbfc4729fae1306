use ue_core::{CoreError, Enricher, Result as CoreResult, UserService};
use ue_db::UserRepository;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use log::error;
use sqlx::SqlitePool;

/// Shared state for the HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub service: UserService,
    pub pool: SqlitePool,
    pub handler_timeout: Duration,
}

impl AppState {
    /// Wire the SQLite store and the given enricher into a `UserService`
    pub fn new(pool: SqlitePool, enricher: Arc<dyn Enricher>, handler_timeout: Duration) -> Self {
        let store = Arc::new(UserRepository::new(pool.clone()));
        Self {
            service: UserService::new(store, enricher),
            pool,
            handler_timeout,
        }
    }

    /// Run `operation` under the handler deadline. On expiry the future is
    /// dropped, which cancels any outstanding upstream or database call.
    pub async fn within_deadline<T, F>(&self, name: &str, operation: F) -> CoreResult<T>
    where
        F: Future<Output = CoreResult<T>>,
    {
        match tokio::time::timeout(self.handler_timeout, operation).await {
            Ok(result) => result,
            Err(_elapsed) => {
                error!(
                    "{} timed out after {}ms",
                    name,
                    self.handler_timeout.as_millis()
                );
                Err(CoreError::aborted(format!(
                    "{} timed out after {}ms",
                    name,
                    self.handler_timeout.as_millis()
                )))
            }
        }
    }
}
