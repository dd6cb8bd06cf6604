//! Derived read views over the store's collections.
//!
//! Each view is recomputed from the current contents on every call.
//! Dangling references (a category pointing at a missing group, an unknown
//! group name) produce empty results rather than errors.

use storefront_core::{Category, Product};

use crate::store::CatalogStore;

/// Label prepended to the category menu.
pub const ALL_CATEGORIES_LABEL: &str = "All";

impl CatalogStore {
    /// Categories belonging to the group named `group_name`.
    #[must_use]
    pub fn categories_by_group_name(&self, group_name: &str) -> Vec<&Category> {
        let Some(group_id) = self.group_id_by_name(group_name) else {
            return Vec::new();
        };
        self.categories
            .items()
            .iter()
            .filter(|c| c.group_id == group_id)
            .collect()
    }

    /// Products belonging to the group named `group_name`.
    #[must_use]
    pub fn products_by_group_name(&self, group_name: &str) -> Vec<&Product> {
        let Some(group_id) = self.group_id_by_name(group_name) else {
            return Vec::new();
        };
        self.products
            .items()
            .iter()
            .filter(|p| p.group_id == group_id)
            .collect()
    }

    #[must_use]
    pub fn products_by_category_id(&self, category_id: i64) -> Vec<&Product> {
        self.products
            .items()
            .iter()
            .filter(|p| p.category_id == category_id)
            .collect()
    }

    /// Products that sold more than [`storefront_core::POPULAR_SOLD_THRESHOLD`] units.
    #[must_use]
    pub fn popular_products(&self) -> Vec<&Product> {
        self.products
            .items()
            .iter()
            .filter(|p| p.is_popular())
            .collect()
    }

    /// Menu labels: `"All"` followed by every category name in collection order.
    #[must_use]
    pub fn category_names(&self) -> Vec<&str> {
        std::iter::once(ALL_CATEGORIES_LABEL)
            .chain(self.categories.items().iter().map(|c| c.name.as_str()))
            .collect()
    }

    #[must_use]
    pub fn product_by_id(&self, id: i64) -> Option<&Product> {
        self.products.items().iter().find(|p| p.id == Some(id))
    }

    #[must_use]
    pub fn category_by_id(&self, id: i64) -> Option<&Category> {
        self.categories.items().iter().find(|c| c.id == Some(id))
    }

    /// ID of the first group whose name matches exactly. A matching group
    /// that was never persisted has no ID and therefore matches nothing.
    fn group_id_by_name(&self, group_name: &str) -> Option<i64> {
        self.groups
            .items()
            .iter()
            .find(|g| g.name == group_name)
            .and_then(|g| g.id)
    }
}
