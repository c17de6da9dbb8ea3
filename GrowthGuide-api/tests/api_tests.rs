use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use growth_guide_api::api::create_app;
use growth_guide_api::api::handlers::health::create_health_service;
use growth_guide_api::config::AppConfig;
use growth_guide_data::reference::load_bundled;
use growth_guide_data::InMemoryReferenceStore;
use growth_guide_domain::services::create_default_growth_service;
use growth_guide_domain::testing::fixture_store;

fn app_with_store(store: InMemoryReferenceStore) -> Router {
    let store = Arc::new(store);
    create_app(
        create_default_growth_service(store.clone()),
        create_health_service(store),
        Arc::new(AppConfig::default()),
    )
}

fn test_app() -> Router {
    app_with_store(fixture_store())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };
    (status, value)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_bmi_percentile_endpoint() {
    let (status, body) = send(
        test_app(),
        post_json(
            "/api/v1/bmi/percentile",
            json!({ "gender": "boy", "age_months": 30, "height_cm": 95.0, "weight_kg": 14.2 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bmi"], 15.73);
    assert_eq!(body["percentile"], "p50");
    assert_eq!(body["description"], "Normal (15-85%)");
}

#[tokio::test]
async fn test_bmi_percentile_against_bundled_tables() {
    let app = app_with_store(load_bundled().unwrap());
    let (status, body) = send(
        app,
        post_json(
            "/api/v1/bmi/percentile",
            json!({ "gender": "girl", "age_months": 60, "height_cm": 110.0, "weight_kg": 18.5 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bmi"], 15.29);
    assert_ne!(body["percentile"], "unknown");
}

#[tokio::test]
async fn test_age_out_of_range_is_not_an_error() {
    let (status, body) = send(
        test_app(),
        post_json(
            "/api/v1/bmi/percentile",
            json!({ "gender": "girl", "age_months": 250, "height_cm": 160.0, "weight_kg": 50.0 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["percentile"], "unknown");
    assert_eq!(body["description"], "age out of range");
}

#[tokio::test]
async fn test_zero_height_is_bad_request() {
    let (status, body) = send(
        test_app(),
        post_json(
            "/api/v1/bmi/percentile",
            json!({ "gender": "boy", "age_months": 30, "height_cm": 0.0, "weight_kg": 14.2 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_measurement");
}

#[tokio::test]
async fn test_unknown_gender_is_bad_request() {
    let (status, body) = send(
        test_app(),
        post_json(
            "/api/v1/bmi/percentile",
            json!({ "gender": "other", "age_months": 30, "height_cm": 95.0, "weight_kg": 14.2 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_adult_bmi_endpoint() {
    let (status, body) = send(
        test_app(),
        post_json(
            "/api/v1/bmi/adult",
            json!({ "gender": "girl", "height_cm": 165.0, "weight_kg": 64.0 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bmi"], 23.51);
    assert_eq!(body["category"], "normal");
}

#[tokio::test]
async fn test_growth_percentile_endpoint() {
    let (status, body) = send(
        test_app(),
        post_json(
            "/api/v1/growth/percentile",
            json!({ "metric": "weight", "gender": "girl", "age": 6, "value": 7.3 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["percentile"], "p50");
    assert_eq!(body["description"], "Average weight (25-50%)");
}

#[tokio::test]
async fn test_growth_percentile_for_missing_table() {
    let (status, body) = send(
        test_app(),
        post_json(
            "/api/v1/growth/percentile",
            json!({ "metric": "height", "gender": "girl", "age": 12, "value": 75.0 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["percentile"], "unknown");
    assert_eq!(body["description"], "unsupported gender");
}

#[tokio::test]
async fn test_age_endpoint() {
    let (status, body) = send(test_app(), get("/api/v1/age?age_date=2020-01-00")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["precision"], "month");
    assert!(body["years"].as_i64().unwrap() >= 5);
    assert!(body["storage"].as_str().unwrap().contains(" years "));
}

#[tokio::test]
async fn test_age_endpoint_rejects_impossible_date() {
    let (status, body) = send(test_app(), get("/api/v1/age?age_date=2025-02-30")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_date");
}

#[tokio::test]
async fn test_age_endpoint_requires_date() {
    let (status, body) = send(test_app(), get("/api/v1/age")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, body) = send(app_with_store(load_bundled().unwrap()), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["components"]["reference_data"]["status"], "ok");
    assert_eq!(body["environment"], "development");
}

#[tokio::test]
async fn test_health_endpoint_with_sparse_tables() {
    let (status, body) = send(test_app(), get("/health")).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["components"]["reference_data"]["status"], "degraded");
}

#[tokio::test]
async fn test_bundled_tables_classify_every_month() {
    let app = app_with_store(load_bundled().unwrap());

    for age_months in [0, 1, 7, 31, 100, 227, 228] {
        let (status, body) = send(
            app.clone(),
            post_json(
                "/api/v1/bmi/percentile",
                json!({"gender": "boy", "age_months": age_months, "height_cm": 100.0, "weight_kg": 16.0}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_ne!(body["percentile"], "unknown", "age {}", age_months);
    }
}

#[tokio::test]
async fn test_health_endpoint_with_empty_store() {
    let (status, body) = send(app_with_store(InMemoryReferenceStore::new()), get("/health")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn test_security_headers_applied() {
    let response = test_app().oneshot(get("/health")).await.unwrap();

    assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(response.headers()[header::X_FRAME_OPTIONS], "DENY");
}

#[tokio::test]
async fn test_openapi_document_served() {
    let (status, body) = send(test_app(), get("/api-docs/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/v1/bmi/percentile"].is_object());
}
