//! User REST API handlers
//!
//! Every handler runs its service call under the configured deadline.

use crate::{
    ApiError, ApiResult, AppState, CreateUserRequest, ListUsersQuery, UpdateUserRequest, UserDto,
};

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use log::info;
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// POST /users
///
/// Enrich and store a new user. Answers 201 with an empty body.
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(req) = payload?;

    let user = state
        .within_deadline("create user", state.service.create(req.into()))
        .await
        .map_err(ApiError::from_create)?;

    info!("POST /users created {}", user.id);

    Ok(StatusCode::CREATED)
}

/// GET /users?sort_by=<field>&sort_order=<asc|desc>
///
/// List all users as a bare JSON array
pub async fn list_users(
    State(state): State<AppState>,
    query: Result<Query<ListUsersQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<UserDto>>> {
    let Query(query) = query?;

    let users = state
        .within_deadline(
            "list users",
            state
                .service
                .list(query.sort_by.as_deref(), query.sort_order.as_deref()),
        )
        .await?;

    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserDto>> {
    let user_id = Uuid::parse_str(&id)?;

    let user = state
        .within_deadline("get user", state.service.get(user_id))
        .await?;

    Ok(Json(user.into()))
}

/// PUT /users/update/{id}
///
/// Apply a sparse update. Answers 200 with an empty body; an unknown id
/// answers 500.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let user_id = Uuid::parse_str(&id)?;
    let Json(req) = payload?;

    state
        .within_deadline("update user", state.service.update(user_id, req.into()))
        .await
        .map_err(ApiError::from_update)?;

    Ok(StatusCode::OK)
}

/// DELETE /users/delete/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let user_id = Uuid::parse_str(&id)?;

    state
        .within_deadline("delete user", state.service.delete(user_id))
        .await?;

    Ok(StatusCode::OK)
}

/// PUT /users/update/ and DELETE /users/delete/ without an id
pub async fn missing_id() -> ApiError {
    ApiError::bad_request("id has not been provided")
}
