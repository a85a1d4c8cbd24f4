//! Application services.
//!
//! Services translate storage failures into `DomainError`s and own the
//! cache-aside read path.

mod class;
mod user;

#[cfg(test)]
pub(crate) mod test_support;

pub use class::ClassService;
pub use user::UserService;
