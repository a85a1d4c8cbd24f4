//! Root and liveness endpoints.

use axum::{http::StatusCode, Json};

/// GET / - Greeting.
#[axum::debug_handler]
pub async fn hello() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Hello World" }))
}

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting connections.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
