//! GET /        greeting
//! GET /health  liveness probe, does not touch the database

use axum::Json;
use serde_json::{json, Value};

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
