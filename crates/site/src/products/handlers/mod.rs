//! Product Handlers

pub(crate) mod delete;
pub(crate) mod update;
