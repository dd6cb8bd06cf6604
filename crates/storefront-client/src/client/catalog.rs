//! Collection listing endpoints.

use serde_json::Value;
use storefront_core::{Category, Group, Product, Promotion};

use crate::error::ClientError;
use crate::normalize::normalize_product;

use super::StorefrontClient;

impl StorefrontClient {
    /// Lists all groups (`GET /groups`).
    ///
    /// # Errors
    ///
    /// - [`ClientError::Network`] on transport failure.
    /// - [`ClientError::HttpStatus`] on any non-2xx status.
    /// - [`ClientError::Decode`] if the body is not an array of groups.
    pub async fn list_groups(&self) -> Result<Vec<Group>, ClientError> {
        self.get_json("groups").await
    }

    /// Lists all categories (`GET /categories`).
    ///
    /// # Errors
    ///
    /// Same as [`Self::list_groups`].
    pub async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        self.get_json("categories").await
    }

    /// Lists all promotions (`GET /promotions`).
    ///
    /// # Errors
    ///
    /// Same as [`Self::list_groups`].
    pub async fn list_promotions(&self) -> Result<Vec<Promotion>, ClientError> {
        self.get_json("promotions").await
    }

    /// Lists products exactly as the backend returns them (`GET /products`).
    ///
    /// # Errors
    ///
    /// Same as [`Self::list_groups`]; a body that is not a JSON array is a
    /// [`ClientError::Decode`].
    pub async fn list_raw_products(&self) -> Result<Vec<Value>, ClientError> {
        self.get_json("products").await
    }

    /// Lists products and normalizes each record into a canonical [`Product`].
    ///
    /// Individual records never fail normalization; only a transport, status,
    /// or top-level decode failure makes the whole listing fail.
    ///
    /// # Errors
    ///
    /// Same as [`Self::list_raw_products`].
    pub async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        let raw = self.list_raw_products().await?;
        Ok(raw.iter().map(normalize_product).collect())
    }
}
