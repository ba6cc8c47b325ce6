//! Listing service errors.

use std::num::TryFromIntError;

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListingServiceError {
    #[error("storage error")]
    Sql(#[from] Error),

    #[error("invalid row count")]
    InvalidCount(#[from] TryFromIntError),
}
