mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{
    build_key, class_key, class_list_key, class_notice_list_key, READ_CLASS, READ_CLASS_LIST,
    READ_CLASS_NOTICE_LIST,
};
pub use serialization::{deserialize, serialize, SerializationError};
pub use traits::{ttl_seconds, Cache};
