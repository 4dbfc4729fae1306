use crate::{
    AppState, create_user, delete_user, get_user, health, list_users, missing_id, update_user,
};

use axum::{
    Router,
    routing::{delete, get, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // User endpoints
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user))
        .route("/users/update/{id}", put(update_user))
        .route("/users/update/", put(missing_id))
        .route("/users/delete/{id}", delete(delete_user))
        .route("/users/delete/", delete(missing_id))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
