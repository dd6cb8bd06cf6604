//! Storefront page routes.
//!
//! Mirrors the storefront's URL scheme: `/`, `/categories/:categoryId`,
//! `/products/:productId`. Anything else redirects to the home page.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Route {
    Home,
    Category { category_id: i64 },
    Product { product_id: i64 },
}

impl Route {
    /// Resolves a storefront path. Query strings and fragments are ignored;
    /// unknown paths and non-numeric IDs fall back to [`Route::Home`].
    pub(crate) fn resolve(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            ["categories", id] => id
                .parse()
                .map_or(Route::Home, |category_id| Route::Category { category_id }),
            ["products", id] => id
                .parse()
                .map_or(Route::Home, |product_id| Route::Product { product_id }),
            _ => Route::Home,
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Category { .. } => "category",
            Route::Product { .. } => "product",
        }
    }
}
