//! Client-side catalog state for the storefront.
//!
//! [`CatalogStore`] owns the group, category, product and promotion
//! collections, refreshes them from the backend, and exposes filtered views
//! for rendering.

pub mod collection;
pub mod store;
pub mod views;

pub use collection::{Collection, CollectionStatus, FetchFailure};
pub use store::CatalogStore;
pub use views::ALL_CATEGORIES_LABEL;
