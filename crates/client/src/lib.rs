//! Browser-side synchronization logic for the product management page.
//!
//! The page shows a grid of product cards. This crate owns the client-side
//! model of those cards and the flows that keep them in sync with the
//! server: modal editing, deletion, the photo preview carousel, and the
//! pagination control. Presentation and navigation sit behind seams
//! ([`edit::CardView`], [`delete::PageNavigator`]) so every flow is testable
//! without a DOM.
//!
//! Mutations are optimistic-after-confirmation: the card model and the view
//! change only once the server has acknowledged the request.

pub mod api;
pub mod card;
pub mod carousel;
pub mod delete;
pub mod edit;
pub mod notices;
pub mod pagination;
