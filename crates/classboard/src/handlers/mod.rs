pub mod classes;
pub mod error;
pub mod health;
pub mod notices;
pub mod pagination;
pub mod response;
pub mod users;

pub use error::AppError;
