pub mod client;
pub mod error;
pub mod normalize;
pub mod wire;

pub use client::{StorefrontClient, DEFAULT_BASE_URL};
pub use error::{ClientError, FailureKind};
pub use normalize::normalize_product;
pub use wire::{merge_product, patch_to_wire, wire_to_domain};
