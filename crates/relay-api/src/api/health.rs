/// Liveness endpoint
use axum::Json;
use serde_json::{Value, json};

/// Liveness handler. Always succeeds, independent of configuration and
/// provider state.
pub async fn handler() -> Json<Value> {
    Json(json!({ "Hello": "API is running" }))
}
