#![allow(dead_code)]

//! Test infrastructure for ue-server API tests

use ue_core::{Enricher, Enrichment, NewUser, Result as CoreResult, User};
use ue_db::UserRepository;
use ue_enrich::{EnrichmentClient, EnrichmentSources};
use ue_server::AppState;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use tower::ServiceExt;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const HANDLER_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a test pool with in-memory SQLite and migrations applied
pub async fn create_test_pool() -> SqlitePool {
    ue_db::connect_in_memory()
        .await
        .expect("Failed to create test database")
}

/// Mount the three prediction sources answering for any name:
/// age 34, female, and GB as the most probable country.
pub async fn mount_prediction_sources(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/age"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"age": 34})))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/gender"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"gender": "female"})))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/country"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"country": [
            {"country_id": "PL", "probability": 0.2},
            {"country_id": "GB", "probability": 0.5},
            {"country_id": "GB", "probability": 0.3}
        ]})))
        .mount(server)
        .await;
}

pub fn enrichment_client(server: &MockServer) -> EnrichmentClient {
    let base = server.uri();
    EnrichmentClient::new(
        EnrichmentSources {
            age_url: format!("{base}/age"),
            gender_url: format!("{base}/gender"),
            country_url: format!("{base}/country"),
        },
        Duration::from_secs(2),
    )
    .expect("Failed to build enrichment client")
}

/// AppState backed by an in-memory database and the given mock sources
pub async fn create_test_app_state(server: &MockServer) -> AppState {
    let pool = create_test_pool().await;
    AppState::new(pool, Arc::new(enrichment_client(server)), HANDLER_TIMEOUT)
}

/// Enricher that never answers within any reasonable deadline
pub struct StalledEnricher;

#[async_trait]
impl Enricher for StalledEnricher {
    async fn enrich(&self, _name: &str) -> CoreResult<Enrichment> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(Enrichment {
            age: 1,
            gender: "male".into(),
            country_id: "US".into(),
        })
    }
}

/// Insert a user directly, bypassing enrichment
pub async fn insert_user(pool: &SqlitePool, name: &str, age: i32) -> User {
    UserRepository::new(pool.clone())
        .insert(&NewUser {
            name: name.to_string(),
            surname: "Lovelace".to_string(),
            patronymic: String::new(),
            age,
            gender: "female".to_string(),
            country_id: "GB".to_string(),
        })
        .await
        .expect("Failed to insert test user")
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Send one request through the router and collect status and raw body
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

pub fn parse_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap()
}
