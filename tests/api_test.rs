//! Stateless endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

use aetheris::AetherisConfig;
use common::{build_test_app, build_test_app_with_config, create_session, get_json, post_json};

#[tokio::test]
async fn test_health() {
    let app = build_test_app();
    let (status, json) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], aetheris::VERSION);
}

#[tokio::test]
async fn test_page_metadata() {
    let app = build_test_app();
    let (status, json) = get_json(&app, "/api/page").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "Aetheris Global AI");
    assert_eq!(json["icon"], "🌍");
    assert_eq!(json["layout"], "wide");
}

#[tokio::test]
async fn test_currency_table() {
    let app = build_test_app();
    let (status, json) = get_json(&app, "/api/currencies").await;
    assert_eq!(status, StatusCode::OK);

    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["code"], "INR");
    assert_eq!(rows[0]["rate"], 1.0);
    assert_eq!(rows[1]["label"], "USD ($)");
    assert_eq!(rows[1]["rate"], 0.012);
    assert_eq!(rows[2]["symbol"], "€");
    assert_eq!(rows[2]["rate"], 0.011);
}

#[tokio::test]
async fn test_assistant() {
    let app = build_test_app();
    let (status, json) = post_json(&app, "/api/assistant", &json!({ "message": "visa rules" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["reply"],
        "Analysis for 'visa rules' is complete. Logistics optimized."
    );

    let (_, json) = post_json(&app, "/api/assistant", &json!({ "message": "" })).await;
    assert!(json["reply"].is_null());
}

#[tokio::test]
async fn test_configured_session_defaults() {
    let mut config = AetherisConfig::default();
    config.defaults.origin = "Chennai".to_string();
    config.defaults.days = 10;
    let app = build_test_app_with_config(config);

    let id = create_session(&app).await;
    let (_, view) = get_json(&app, &format!("/api/sessions/{id}")).await;
    assert_eq!(view["inputs"]["origin"], "Chennai");
    assert_eq!(view["inputs"]["days"], 10);
}
