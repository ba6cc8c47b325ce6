//! Resident listing

pub mod errors;
pub mod page;
pub mod records;
mod repository;
pub mod service;
pub mod sort;

pub use errors::ListingServiceError;
pub use service::*;
