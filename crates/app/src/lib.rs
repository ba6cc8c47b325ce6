//! Shared domain and persistence modules for the storefront management console.

pub mod context;
pub mod database;
pub mod domain;

mod uuids;

pub use uuids::TypedUuid;
