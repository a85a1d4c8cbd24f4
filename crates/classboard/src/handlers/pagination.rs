use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use classboard_core::classroom::DomainError;
use classboard_core::storage::PageRequest;

use crate::handlers::AppError;

/// `?page=&limit=` query parameters. Missing values fall back to the defaults.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl PageParams {
    /// Validates the parameters into a page request.
    pub fn into_page_request(self) -> Result<PageRequest, DomainError> {
        PageRequest::new(
            self.page.unwrap_or(PageRequest::DEFAULT_PAGE),
            self.limit.unwrap_or(PageRequest::DEFAULT_LIMIT),
        )
        .map_err(|err| DomainError::InvalidPagination(err.to_string()))
    }
}

/// Validated `?page=&limit=` extractor.
///
/// Unparseable values are rejected as `InvalidPagination`, like out-of-range ones.
#[derive(Debug)]
pub struct Pagination(pub PageRequest);

impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| DomainError::InvalidPagination(rejection.body_text()))?;

        Ok(Pagination(params.into_page_request()?))
    }
}
