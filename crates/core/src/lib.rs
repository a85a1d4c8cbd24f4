//! Functional core for classboard.
//!
//! Pure domain types, the domain error taxonomy, and the traits the
//! imperative shell implements: [`cache::Cache`] for the ephemeral store and
//! [`storage::ClassRepository`] / [`storage::UserRepository`] for the durable
//! store.

pub mod cache;
pub mod classroom;
pub mod storage;
