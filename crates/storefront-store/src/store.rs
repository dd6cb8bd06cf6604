//! The catalog store: four collections and the actions that refresh or
//! mutate them.

use storefront_client::{merge_product, normalize_product, ClientError, StorefrontClient};
use storefront_core::{Category, Group, Product, ProductPatch, Promotion};

use crate::collection::Collection;

/// Client-side state for the storefront.
///
/// Construct one at startup and hand it to whatever renders the catalog.
/// Fetch actions absorb failures into the collection status; write actions
/// return them. No write touches local state until the backend confirms it.
#[derive(Debug)]
pub struct CatalogStore {
    client: StorefrontClient,
    pub(crate) groups: Collection<Group>,
    pub(crate) categories: Collection<Category>,
    pub(crate) products: Collection<Product>,
    pub(crate) promotions: Collection<Promotion>,
}

impl CatalogStore {
    #[must_use]
    pub fn new(client: StorefrontClient) -> Self {
        Self {
            client,
            groups: Collection::default(),
            categories: Collection::default(),
            products: Collection::default(),
            promotions: Collection::default(),
        }
    }

    #[must_use]
    pub fn client(&self) -> &StorefrontClient {
        &self.client
    }

    #[must_use]
    pub fn groups(&self) -> &Collection<Group> {
        &self.groups
    }

    #[must_use]
    pub fn categories(&self) -> &Collection<Category> {
        &self.categories
    }

    #[must_use]
    pub fn products(&self) -> &Collection<Product> {
        &self.products
    }

    #[must_use]
    pub fn promotions(&self) -> &Collection<Promotion> {
        &self.promotions
    }

    // -----------------------------------------------------------------------
    // Fetch actions
    // -----------------------------------------------------------------------

    pub async fn fetch_groups(&mut self) {
        self.groups.begin_loading();
        let result = self.client.list_groups().await;
        self.groups.settle("groups", result);
    }

    pub async fn fetch_categories(&mut self) {
        self.categories.begin_loading();
        let result = self.client.list_categories().await;
        self.categories.settle("categories", result);
    }

    /// Refreshes products, normalizing every raw record.
    pub async fn fetch_products(&mut self) {
        self.products.begin_loading();
        let result = self.client.list_products().await;
        self.products.settle("products", result);
    }

    pub async fn fetch_promotions(&mut self) {
        self.promotions.begin_loading();
        let result = self.client.list_promotions().await;
        self.promotions.settle("promotions", result);
    }

    /// Refreshes all four collections concurrently.
    ///
    /// Returns once every request has settled. A failed request does not
    /// cancel the others; each collection records its own outcome.
    pub async fn fetch_all(&mut self) {
        self.groups.begin_loading();
        self.categories.begin_loading();
        self.products.begin_loading();
        self.promotions.begin_loading();

        let client = &self.client;
        let (groups, categories, products, promotions) = tokio::join!(
            client.list_groups(),
            client.list_categories(),
            client.list_products(),
            client.list_promotions(),
        );

        self.groups.settle("groups", groups);
        self.categories.settle("categories", categories);
        self.products.settle("products", products);
        self.promotions.settle("promotions", promotions);
    }

    // -----------------------------------------------------------------------
    // Write actions
    // -----------------------------------------------------------------------

    /// Sends a partial update for product `id` and merges the backend's
    /// response over the stored record.
    ///
    /// Returns the updated product. If `id` is not in the local collection the
    /// normalized server record is returned without being inserted.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`] from the backend call; the products
    /// collection is left unchanged in that case.
    pub async fn update_product(
        &mut self,
        id: i64,
        patch: &ProductPatch,
    ) -> Result<Product, ClientError> {
        let record = self
            .client
            .update_product(id, patch)
            .await
            .inspect_err(|e| tracing::error!(product_id = id, error = %e, "product update failed"))?;

        let mut updated = None;
        for existing in self
            .products
            .items_mut()
            .iter_mut()
            .filter(|p| p.id == Some(id))
        {
            *existing = merge_product(existing, &record);
            updated = Some(existing.clone());
        }

        let product = updated.unwrap_or_else(|| {
            tracing::debug!(product_id = id, "updated product is not in the local collection");
            let mut fresh = normalize_product(&record);
            fresh.id.get_or_insert(id);
            fresh
        });

        tracing::info!(product_id = id, "product updated");
        Ok(product)
    }

    /// Deletes product `id` on the backend, then drops it locally.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`] from the backend call; the products
    /// collection is left unchanged in that case.
    pub async fn delete_product(&mut self, id: i64) -> Result<(), ClientError> {
        self.client
            .delete_product(id)
            .await
            .inspect_err(|e| tracing::error!(product_id = id, error = %e, "product delete failed"))?;

        self.products.items_mut().retain(|p| p.id != Some(id));
        tracing::info!(product_id = id, "product deleted");
        Ok(())
    }

    /// Deletes every product on the backend, then empties the local collection.
    ///
    /// Does not ask for confirmation; that belongs to the caller.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`] from the backend call; the products
    /// collection is left unchanged in that case.
    pub async fn delete_all_products(&mut self) -> Result<(), ClientError> {
        self.client
            .delete_all_products()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "bulk product delete failed"))?;

        let removed = self.products.len();
        self.products.items_mut().clear();
        tracing::info!(removed, "all products deleted");
        Ok(())
    }
}
