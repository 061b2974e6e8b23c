use axum::response::Json;
use serde_json::{json, Value};

/// Liveness endpoint for deploy checks and uptime monitors
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "fittrack-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
