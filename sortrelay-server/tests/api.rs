//! Integration tests for the device endpoint
//!
//! Drives the assembled router with in-memory requests; no socket involved.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use sortrelay_server::{router, AppState};

fn app() -> Router {
    router(Arc::new(AppState::new()))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

#[tokio::test]
async fn offline_before_any_reading() {
    let response = app().oneshot(get("/api/esp32")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({"status": "offline"}));
}

#[tokio::test]
async fn post_then_get_roundtrip() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/esp32",
            r#"{"color":"Merah","weightGrams":145}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let accepted = body_json(response).await;
    assert_eq!(accepted["status"], "accepted");
    assert_eq!(accepted["reading"]["category"], "small");

    let response = app.oneshot(get("/api/esp32")).await.unwrap();
    let json = body_json(response).await;
    assert_eq!(json["status"], "online");
    assert_eq!(json["color"], "Merah");
    assert_eq!(json["weightGrams"], 145.0);
    assert_eq!(json["category"], "small");
    assert!(json["timestamp"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn supplied_category_is_recomputed() {
    let app = app();

    // Firmware wire shape including its own wrong classification
    app.clone()
        .oneshot(post_json(
            "/api/esp32",
            r#"{"warna":"Hijau","berat":450,"kategori":"Kecil","status":"ONLINE"}"#,
        ))
        .await
        .unwrap();

    let json = body_json(app.oneshot(get("/api/esp32")).await.unwrap()).await;
    assert_eq!(json["category"], "large");
}

#[tokio::test]
async fn invalid_payload_is_rejected_and_state_unchanged() {
    let app = app();

    app.clone()
        .oneshot(post_json(
            "/api/esp32",
            r#"{"color":"yellow","weightGrams":320}"#,
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(post_json("/api/esp32", r#"{"color":"red","weightGrams":-5}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let rejected = body_json(response).await;
    assert_eq!(rejected["status"], "rejected");
    assert_eq!(rejected["error"], "weight -5 is negative");

    let response = app
        .clone()
        .oneshot(post_json("/api/esp32", r#"{"weightGrams":100}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // State still reflects the one valid reading
    let json = body_json(app.oneshot(get("/api/esp32")).await.unwrap()).await;
    assert_eq!(json["status"], "online");
    assert_eq!(json["weightGrams"], 320.0);
}

#[tokio::test]
async fn malformed_json_is_a_client_error() {
    let response = app()
        .oneshot(post_json("/api/esp32", "{not json"))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn history_is_newest_first() {
    let app = app();

    for (color, weight) in [("Merah", 145.0), ("Kuning", 250.0), ("Hijau", 450.0)] {
        app.clone()
            .oneshot(post_json(
                "/api/esp32",
                &format!(r#"{{"color":"{color}","weightGrams":{weight}}}"#),
            ))
            .await
            .unwrap();
    }

    let response = app.oneshot(get("/api/esp32/history")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let history = json.as_array().unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0]["color"], "Hijau");
    assert_eq!(history[0]["category"], "large");
    assert_eq!(history[1]["color"], "Kuning");
    assert_eq!(history[2]["color"], "Merah");
}
