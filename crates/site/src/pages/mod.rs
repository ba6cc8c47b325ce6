//! Server-rendered pages

pub(crate) mod residents;
