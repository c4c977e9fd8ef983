//! HTTP-level tests driving the router with `tower::ServiceExt::oneshot`.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use home_energy_estimator::{api, config::Config};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> Router {
    let cfg = Config::default();
    let state = api::AppState::from_config(&cfg);
    api::router(state, &cfg)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn estimate_happy_path() {
    let req = post_json(
        "/api/v1/estimate",
        json!({ "bhk": 2, "appliances": { "air_conditioner": true } }),
    );
    let response = test_app().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["bhk"], 2);
    assert!((body["total_kw"].as_f64().unwrap() - 6.6).abs() < 1e-9);
    assert_eq!(body["breakdown"].as_array().unwrap().len(), 5);
    assert_eq!(body["chart"].as_array().unwrap().len(), 3);
    assert_eq!(body["rate_per_kwh"], 6.0);

    let monthly = body["cost"]["monthly"].as_f64().unwrap();
    assert!((monthly - 6.6 * 24.0 * 30.0 * 6.0).abs() < 1e-6);
}

#[tokio::test]
async fn estimate_defaults_to_no_appliances() {
    let req = post_json("/api/v1/estimate", json!({ "bhk": 1 }));
    let response = test_app().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!((body["total_kw"].as_f64().unwrap() - 2.4).abs() < 1e-9);
    assert_eq!(body["chart"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn estimate_rejects_invalid_category() {
    let req = post_json("/api/v1/estimate", json!({ "bhk": 4 }));
    let response = test_app().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "BadRequest");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("invalid BHK category: 4"));
}

#[tokio::test]
async fn ratings_exposes_static_tables() {
    let req = Request::builder()
        .uri("/api/v1/ratings")
        .body(Body::empty())
        .unwrap();
    let response = test_app().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["light_unit_kw"], 0.4);
    assert_eq!(body["fan_unit_kw"], 0.8);

    let appliances = body["appliances"].as_array().unwrap();
    assert_eq!(appliances.len(), 3);
    assert_eq!(appliances[0]["label"], "AC");
    assert_eq!(appliances[0]["rating_kw"], 3.0);

    let fixtures = body["fixtures"].as_array().unwrap();
    assert_eq!(fixtures.len(), 3);
    assert_eq!(fixtures[2]["bhk"], 3);
    assert_eq!(fixtures[2]["lights"], 4);
    assert!((fixtures[2]["base_kw"].as_f64().unwrap() - 4.8).abs() < 1e-9);
}

#[tokio::test]
async fn tips_follow_selection() {
    let req = post_json(
        "/api/v1/tips",
        json!({ "appliances": { "refrigerator": true } }),
    );
    let response = test_app().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let sheets = body.as_array().unwrap();
    assert_eq!(sheets.len(), 3);
    assert_eq!(sheets[0]["category"], "Lighting");
    assert_eq!(sheets[1]["category"], "Fans");
    assert_eq!(sheets[2]["category"], "Refrigerator");
}

#[tokio::test]
async fn health_endpoints() {
    for uri in ["/api/v1/healthz", "/health/live", "/health/ready"] {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = test_app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }

    let req = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = test_app().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["engine"]["status"], "healthy");
}
