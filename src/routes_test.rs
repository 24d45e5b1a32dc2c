use axum::http::HeaderValue;

use super::*;

#[tokio::test]
async fn healthz_reports_healthy_service() {
    let Json(health) = healthz().await;
    assert_eq!(health, Health { status: "healthy", service: "quantix" });
}

#[test]
fn health_serializes_as_flat_object() {
    let json = serde_json::to_value(Health { status: "healthy", service: "quantix" }).unwrap();
    assert_eq!(json, serde_json::json!({ "status": "healthy", "service": "quantix" }));
}

#[test]
fn cors_layer_builds_for_any_and_listed_origins() {
    let _any = cors_layer(&AllowedOrigins::Any);
    let _listed = cors_layer(&AllowedOrigins::List(vec![HeaderValue::from_static("http://localhost:5173")]));
}
