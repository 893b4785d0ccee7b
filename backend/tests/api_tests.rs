//! HTTP API tests
//!
//! Drives the full router in-process with `tower::ServiceExt::oneshot`.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use vansuraksha_backend::{config::PredictionConfig, create_app, AppState, Config};

fn app() -> Router {
    create_app(AppState::new(Config::default()))
}

async fn send(request: Request<Body>) -> (StatusCode, Vec<u8>) {
    send_to(app(), request).await
}

async fn send_to(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let (status, body) = send(Request::get(uri).body(Body::empty()).unwrap()).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post_raw(uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, body) = send(request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

// ============================================================================
// Prediction
// ============================================================================

#[tokio::test]
async fn test_predict_severe() {
    let (status, body) = post_raw(
        "/api/v1/predict",
        &json!({"temperature": 42, "humidity": 18, "windSpeed": 22}).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["riskLevel"], "severe");
    assert_eq!(body["confidence"], 0.92);
    assert_eq!(body["factors"]["windSpeed"], 22.0);
    assert_eq!(body["factors"]["vegetationIndex"], 0.65);
    assert_eq!(
        body["recommendation"],
        "Immediate action required. Deploy fire prevention teams and issue public warnings."
    );
}

#[tokio::test]
async fn test_predict_accepts_numeric_strings() {
    let (status, body) = post_raw(
        "/api/v1/predict",
        r#"{"temperature": "38", "humidity": "25"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["riskLevel"], "high");
    assert_eq!(body["confidence"], 0.85);
}

#[tokio::test]
async fn test_predict_defaults_malformed_fields() {
    let (status, body) = post_raw(
        "/api/v1/predict",
        r#"{"temperature": "scorching", "humidity": null, "windSpeed": [1, 2]}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["factors"]["temperature"], 35.0);
    assert_eq!(body["factors"]["humidity"], 30.0);
    assert_eq!(body["factors"]["windSpeed"], 15.0);
    assert_eq!(body["riskLevel"], "moderate");
}

#[tokio::test]
async fn test_predict_never_rejects_body() {
    for body in ["", "not json at all", "true", "{\"temperature\": "] {
        let (status, json) = post_raw("/api/v1/predict", body).await;
        assert_eq!(status, StatusCode::OK, "body {:?}", body);
        assert_eq!(json["riskLevel"], "moderate");
        assert_eq!(json["confidence"], 0.78);
    }
}

#[tokio::test]
async fn test_predict_out_of_range_number_defaults_one_field() {
    let (status, body) = post_raw(
        "/api/v1/predict",
        r#"{"temperature":38,"humidity":10,"windSpeed":1e400}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["riskLevel"], "high");
    assert_eq!(body["factors"]["temperature"], 38.0);
    assert_eq!(body["factors"]["humidity"], 10.0);
    assert_eq!(body["factors"]["windSpeed"], 15.0);
}

#[tokio::test]
async fn test_predict_reads_leading_number_of_text() {
    let (status, body) = post_raw(
        "/api/v1/predict",
        r#"{"temperature": "38 °C", "humidity": "25%"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["riskLevel"], "high");

    let (status, body) = get_json("/api/v1/predict?temperature=42C&humidity=18").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["riskLevel"], "severe");
    assert_eq!(body["factors"]["temperature"], 42.0);
}

#[tokio::test(start_paused = true)]
async fn test_predict_with_simulated_delay() {
    let config = Config {
        prediction: PredictionConfig {
            simulated_delay_ms: 1500,
        },
        ..Config::default()
    };
    let request = Request::post("/api/v1/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"temperature": 42, "humidity": 18}"#))
        .unwrap();

    let start = tokio::time::Instant::now();
    let (status, body) = send_to(create_app(AppState::new(config)), request).await;
    assert!(start.elapsed() >= std::time::Duration::from_millis(1500));

    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["riskLevel"], "severe");
    assert_eq!(body["confidence"], 0.92);
}

#[tokio::test]
async fn test_predict_query_with_repeated_key() {
    let (status, body) =
        get_json("/api/v1/predict?temperature=38&temperature=39&humidity=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["riskLevel"], "high");
    assert_eq!(body["factors"]["temperature"], 38.0);
}

#[tokio::test]
async fn test_predict_from_query() {
    let (status, body) =
        get_json("/api/v1/predict?temperature=28&humidity=65&windSpeed=5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["riskLevel"], "low");
    assert_eq!(body["confidence"], 0.71);

    let (status, body) = get_json("/api/v1/predict?temperature=abc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["factors"]["temperature"], 35.0);
}

#[tokio::test]
async fn test_risk_level_legend() {
    let (status, body) = get_json("/api/v1/risk-levels").await;
    assert_eq!(status, StatusCode::OK);

    let levels = body.as_array().unwrap();
    assert_eq!(levels.len(), 4);
    assert_eq!(levels[0]["level"], "low");
    assert_eq!(levels[3]["label"], "Severe Risk");
    assert_eq!(levels[3]["radiusMeters"], 30000);
    assert_eq!(levels[2]["confidence"], 0.85);
}

// ============================================================================
// Regions, map and dashboard
// ============================================================================

#[tokio::test]
async fn test_list_regions() {
    let (status, body) = get_json("/api/v1/regions").await;
    assert_eq!(status, StatusCode::OK);

    let regions = body.as_array().unwrap();
    assert_eq!(regions.len(), 6);
    assert_eq!(regions[0]["region"], "Western Ghats, Karnataka");
    assert_eq!(regions[0]["predictedDate"], "2025-11-16");
}

#[tokio::test]
async fn test_filter_regions_by_level() {
    let (status, body) = get_json("/api/v1/regions?level=low").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["4", "6"]);
}

#[tokio::test]
async fn test_unknown_level_is_rejected() {
    let (status, body) = get_json("/api/v1/regions?level=extreme").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["field"], "level");
}

#[tokio::test]
async fn test_regions_csv_export() {
    let response = app()
        .oneshot(
            Request::get("/api/v1/regions?format=csv")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.starts_with("id,region,latitude,longitude,riskLevel"));
    assert_eq!(text.lines().count(), 7);
}

#[tokio::test]
async fn test_get_region() {
    let (status, body) = get_json("/api/v1/regions/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["riskLevel"], "severe");
    assert_eq!(body["confidence"], 0.92);

    let (status, body) = get_json("/api/v1/regions/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_map_view() {
    let (status, body) = get_json("/api/v1/map").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["zoom"], 5);
    assert_eq!(body["center"]["latitude"], 20.5937);
    assert_eq!(body["markers"].as_array().unwrap().len(), 6);
    assert_eq!(body["markers"][3]["color"], "#22c55e");
}

#[tokio::test]
async fn test_dashboard() {
    let (status, body) = get_json("/api/v1/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stats"]["totalPredictions"], 1247);
    assert_eq!(body["stats"]["highRiskZones"], 23);
    assert_eq!(body["stats"]["averageConfidence"], 0.82);
    assert_eq!(body["stats"]["regionsMonitored"], 156);
    assert_eq!(body["recentPredictions"].as_array().unwrap().len(), 5);
    assert_eq!(body["priorityRegions"], 3);
    assert_eq!(body["distribution"][0]["level"], "severe");
    assert_eq!(body["distribution"][0]["count"], 1);
}

// ============================================================================
// Contact and health
// ============================================================================

#[tokio::test]
async fn test_contact_accepted() {
    let (status, body) = post_raw(
        "/api/v1/contact",
        &json!({
            "name": "Ravi",
            "email": "ravi@example.in",
            "subject": "Field trial",
            "message": "We would like to pilot the service."
        })
        .to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["id"].as_str().is_some());
    assert!(body["receivedAt"].as_str().is_some());
}

#[tokio::test]
async fn test_contact_invalid_email() {
    let (status, body) = post_raw(
        "/api/v1/contact",
        &json!({
            "name": "Ravi",
            "email": "ravi",
            "subject": "Field trial",
            "message": "Hello"
        })
        .to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "email");
}

#[tokio::test]
async fn test_contact_missing_field_is_named() {
    let (status, body) = post_raw(
        "/api/v1/contact",
        &json!({
            "name": "Ravi",
            "email": "ravi@example.in",
            "subject": "Field trial"
        })
        .to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["field"], "message");
}

#[tokio::test]
async fn test_contact_blank_name_is_rejected() {
    let (status, body) = post_raw(
        "/api/v1/contact",
        &json!({
            "name": "   ",
            "email": "ravi@example.in",
            "subject": "Field trial",
            "message": "Hello"
        })
        .to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "name");
}

#[tokio::test]
async fn test_contact_unreadable_body() {
    for body in ["not json", r#"{"name": 42}"#] {
        let (status, json) = post_raw("/api/v1/contact", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {:?}", body);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get_json("/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(Request::get("/health").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}
