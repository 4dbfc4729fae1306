use crate::ApiError;

use ue_core::CoreError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn into_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "user not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = into_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "user not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_core_validation_maps_to_400_with_field() {
    let error = ApiError::from(CoreError::validation("name is required", Some("name")));

    let (status, json) = into_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "name");
}

#[tokio::test]
async fn test_core_persistence_maps_to_500_without_details() {
    let error = ApiError::from(CoreError::persistence("CHECK constraint failed: age >= 0"));

    let (status, json) = into_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "Database operation failed");
}

#[tokio::test]
async fn test_core_aborted_maps_to_503() {
    let error = ApiError::from(CoreError::aborted("create user timed out after 10ms"));

    let (status, json) = into_json(error).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"]["code"], "ABORTED");
}

#[tokio::test]
async fn test_upstream_on_create_maps_to_400() {
    let error = ApiError::from_create(CoreError::upstream("age not found in age source response"));

    let (status, json) = into_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "ENRICHMENT_FAILED");
}

#[tokio::test]
async fn test_upstream_elsewhere_maps_to_500() {
    let error = ApiError::from(CoreError::upstream("age not found"));

    let (status, _json) = into_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_invalid_uuid_maps_to_validation_error() {
    let parse_error = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();
    let error = ApiError::from(parse_error);

    let (status, json) = into_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "id");
}

#[tokio::test]
async fn test_not_found_on_update_maps_to_500() {
    let error = ApiError::from_update(CoreError::not_found("User 42 not found"));

    let (status, json) = into_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "User 42 not found");
}

#[tokio::test]
async fn test_validation_on_update_keeps_400() {
    let error = ApiError::from_update(CoreError::validation("age must be non-negative", Some("age")));

    let (status, json) = into_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "age");
}

#[test]
fn test_persistence_cause_is_kept_for_the_log_only() {
    let error = ApiError::from(CoreError::persistence("CHECK constraint failed: age >= 0"));

    match error {
        ApiError::Internal {
            message, detail, ..
        } => {
            assert_eq!(message, "Database operation failed");
            assert_eq!(detail.as_deref(), Some("CHECK constraint failed: age >= 0"));
        }
        other => panic!("unexpected variant: {other:?}"),
    }
}
