mod error;
mod traits;
mod types;

pub use error::{PageError, RepositoryError, Result};
pub use traits::{ClassRepository, UserRepository};
pub use types::{Page, PageRequest};
