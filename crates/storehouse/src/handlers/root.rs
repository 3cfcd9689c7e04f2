use axum::Json;
use serde_json::{json, Value};

/// Handler for GET /
pub async fn hello() -> Json<Value> {
    Json(json!({ "message": "hello world again" }))
}
