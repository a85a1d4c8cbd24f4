use axum::{
    extract::{Path, State},
    Json,
};

use classboard_core::classroom::{ClassNotice, ClassNoticeList, ClassNoticeRequest};

use crate::{
    handlers::{
        pagination::Pagination,
        response::{ok, ApiResponse},
        AppError,
    },
    state::AppState,
};

/// Post a notice to a class (POST /v1/class/notice/{class_id}).
#[axum::debug_handler]
pub async fn create_notice(
    State(state): State<AppState>,
    Path(class_id): Path<String>,
    Json(payload): Json<ClassNoticeRequest>,
) -> Result<Json<ApiResponse<ClassNotice>>, AppError> {
    let notice = state
        .class_service
        .create_class_notice(payload.into_new_notice(class_id))
        .await?;

    tracing::info!(class_id = %notice.class_id, notice_id = notice.id, "Created class notice");

    Ok(ok(notice))
}

/// List notices of a class (GET /v1/class/notice/{class_id}/list?page=&limit=).
#[axum::debug_handler]
pub async fn list_notices(
    State(state): State<AppState>,
    Path(class_id): Path<String>,
    Pagination(page): Pagination,
) -> Result<Json<ApiResponse<ClassNoticeList>>, AppError> {
    let notices = state
        .class_service
        .read_class_notice_list(&class_id, page)
        .await?;

    Ok(ok(notices))
}

/// Update a notice (PUT /v1/class/notice/{class_id}/{notice_id}).
#[axum::debug_handler]
pub async fn update_notice(
    State(state): State<AppState>,
    Path((class_id, notice_id)): Path<(String, i64)>,
    Json(payload): Json<ClassNoticeRequest>,
) -> Result<Json<ApiResponse<ClassNotice>>, AppError> {
    let notice = state
        .class_service
        .update_class_notice(payload.into_update(class_id, notice_id))
        .await?;

    tracing::info!(class_id = %notice.class_id, notice_id, "Updated class notice");

    Ok(ok(notice))
}

/// Delete a notice (DELETE /v1/class/notice/{class_id}/{notice_id}).
#[axum::debug_handler]
pub async fn delete_notice(
    State(state): State<AppState>,
    Path((class_id, notice_id)): Path<(String, i64)>,
) -> Result<Json<ApiResponse<ClassNotice>>, AppError> {
    let notice = state
        .class_service
        .delete_class_notice(&class_id, notice_id)
        .await?;

    tracing::info!(%class_id, notice_id, "Deleted class notice");

    Ok(ok(notice))
}
