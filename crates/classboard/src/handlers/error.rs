use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use classboard_core::classroom::{domain_error_to_status_code, DomainError};

pub struct AppError(pub anyhow::Error);

/// Error body returned to clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    status_code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, body) = if let Some(domain_error) = self.0.downcast_ref::<DomainError>() {
            let code = domain_error_to_status_code(domain_error);
            let status_code =
                StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let body = ErrorBody {
                status_code: domain_error.code().to_string(),
                message: domain_error.to_string(),
            };
            (status_code, body)
        } else {
            tracing::error!(error = %self.0, "Unhandled error");
            let body = ErrorBody {
                status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16().to_string(),
                message: "Internal Server Error".to_string(),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, body)
        };

        (status_code, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
