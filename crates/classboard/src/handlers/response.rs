//! Success envelope shared by every `/v1` endpoint.

use axum::Json;
use serde::Serialize;

/// `{"message": "OK", "statusCode": "200", "data": ...}`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub message: &'static str,
    pub status_code: &'static str,
    pub data: T,
}

/// Wraps `data` in the success envelope.
pub fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        message: "OK",
        status_code: "200",
        data,
    })
}
