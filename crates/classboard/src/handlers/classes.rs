use axum::{
    extract::{Path, State},
    Json,
};

use classboard_core::classroom::{Class, ClassList, CreateClassRequest};

use crate::{
    handlers::{
        pagination::Pagination,
        response::{ok, ApiResponse},
        AppError,
    },
    state::AppState,
};

/// Create a class (POST /v1/class).
#[axum::debug_handler]
pub async fn create_class(
    State(state): State<AppState>,
    Json(payload): Json<CreateClassRequest>,
) -> Result<Json<ApiResponse<Class>>, AppError> {
    let class = state
        .class_service
        .create_class(payload.into_new_class())
        .await?;

    tracing::info!(class_id = %class.class_id, teacher_id = %class.teacher_id, "Created class");

    Ok(ok(class))
}

/// List classes (GET /v1/class/list?page=&limit=).
#[axum::debug_handler]
pub async fn list_classes(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> Result<Json<ApiResponse<ClassList>>, AppError> {
    let classes = state.class_service.read_class_list(page).await?;

    Ok(ok(classes))
}

/// Get a class by ID (GET /v1/class/{class_id}).
#[axum::debug_handler]
pub async fn get_class(
    State(state): State<AppState>,
    Path(class_id): Path<String>,
) -> Result<Json<ApiResponse<Class>>, AppError> {
    let class = state.class_service.read_class(&class_id).await?;

    Ok(ok(class))
}
