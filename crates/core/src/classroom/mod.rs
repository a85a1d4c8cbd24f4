mod error;
mod http_mapping;
mod requests;
mod types;

pub use error::{DomainError, Result};
pub use http_mapping::domain_error_to_status_code;
pub use requests::{
    generate_id, ClassNoticeRequest, ClassNoticeUpdate, CreateClassRequest, CreateUserRequest,
    NewClass, NewClassNotice, NewUser,
};
pub use types::{Class, ClassList, ClassNotice, ClassNoticeList, User, UserRole};
