//! Pure functions for mapping domain errors to HTTP status codes.

use super::DomainError;

/// Maps a [`DomainError`] to an HTTP status code.
///
/// - `InvalidApiKey` -> 401 (Unauthorized)
/// - `StorageUnavailable` -> 500 (Internal Server Error)
/// - every other kind -> 400 (Bad Request)
///
/// # Examples
///
/// ```
/// use classboard_core::classroom::{domain_error_to_status_code, DomainError};
///
/// assert_eq!(domain_error_to_status_code(&DomainError::ClassNotFound), 400);
/// assert_eq!(domain_error_to_status_code(&DomainError::InvalidApiKey), 401);
/// ```
pub fn domain_error_to_status_code(error: &DomainError) -> u16 {
    match error {
        DomainError::InvalidApiKey => 401,
        DomainError::StorageUnavailable => 500,
        DomainError::ClassNotFound
        | DomainError::ClassNoticeNotFound
        | DomainError::ClassCreationFailed
        | DomainError::ClassNoticeCreationFailed
        | DomainError::ClassNoticeUpdateFailed
        | DomainError::ClassNoticeDeleteFailed
        | DomainError::UserCreationFailed
        | DomainError::InvalidPagination(_) => 400,
    }
}
