use thiserror::Error;

/// Domain errors surfaced by the services and the HTTP boundary.
///
/// Every variant carries a stable machine-readable code (see [`DomainError::code`])
/// and a human message (its `Display`). Storage and cache failures never leak
/// through as-is; the services translate them into one of these kinds.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Class not found")]
    ClassNotFound,
    #[error("Class Notice not found")]
    ClassNoticeNotFound,
    #[error("Class creation failed")]
    ClassCreationFailed,
    #[error("Class Notice creation failed")]
    ClassNoticeCreationFailed,
    #[error("Class Notice update failed")]
    ClassNoticeUpdateFailed,
    #[error("Class Notice delete failed")]
    ClassNoticeDeleteFailed,
    #[error("User creation failed")]
    UserCreationFailed,
    #[error("Invalid API Key")]
    InvalidApiKey,
    #[error("Invalid pagination: {0}")]
    InvalidPagination(String),
    #[error("Storage unavailable")]
    StorageUnavailable,
}

impl DomainError {
    /// Returns the stable error code reported to clients.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::ClassNotFound => "40000",
            DomainError::ClassNoticeNotFound => "40001",
            DomainError::ClassCreationFailed => "40002",
            DomainError::ClassNoticeCreationFailed => "40003",
            DomainError::ClassNoticeUpdateFailed => "40004",
            DomainError::ClassNoticeDeleteFailed => "40005",
            DomainError::UserCreationFailed => "40006",
            DomainError::InvalidPagination(_) => "40007",
            DomainError::InvalidApiKey => "40100",
            DomainError::StorageUnavailable => "50000",
        }
    }
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, DomainError>;
