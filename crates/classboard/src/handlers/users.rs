use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
    Json,
};

use classboard_core::classroom::{CreateUserRequest, DomainError, User};

use crate::{
    handlers::{
        response::{ok, ApiResponse},
        AppError,
    },
    state::AppState,
};

/// Header carrying the registration API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Rejects the request unless it carries the configured API key.
///
/// Runs as route middleware, before the body is extracted.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let candidate = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    if !state.api_key_matches(candidate) {
        tracing::warn!(uri = %request.uri(), "Rejected request with missing or invalid API key");
        return Err(DomainError::InvalidApiKey.into());
    }

    Ok(next.run(request).await)
}

/// Register a teacher (POST /v1/user/teacher).
#[axum::debug_handler]
pub async fn create_teacher(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let user = state
        .user_service
        .create_teacher_user(payload.into_new_user())
        .await?;

    tracing::info!(user_id = %user.user_id, "Registered teacher");

    Ok(ok(user))
}

/// Register a student (POST /v1/user/student).
#[axum::debug_handler]
pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let user = state
        .user_service
        .create_student_user(payload.into_new_user())
        .await?;

    tracing::info!(user_id = %user.user_id, "Registered student");

    Ok(ok(user))
}
