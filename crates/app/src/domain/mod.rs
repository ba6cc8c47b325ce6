//! Domain modules

pub mod listing;
pub mod products;
