use serde::{Deserialize, Serialize};

/// Fallback for a product whose description is missing or blank.
pub const DEFAULT_DETAIL: &str = "No description available";

/// Fallback discount badge color (emerald).
pub const DEFAULT_DISCOUNT_COLOR: &str = "#10b981";

/// A product counts as popular once it has sold strictly more than this many units.
pub const POPULAR_SOLD_THRESHOLD: i64 = 10;

/// A product in its canonical client-side shape.
///
/// Produced by the normalizer from whatever the backend returns. The serde
/// representation is itself a valid normalizer input, so a canonical record
/// normalizes back to itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend-assigned ID; absent before first persistence.
    pub id: Option<i64>,
    pub name: String,
    pub detail: String,
    pub vendor: Option<String>,
    pub rating: f64,
    /// Free-form size label, e.g. `"500g"`.
    pub size: String,
    /// Ordered image references; the first one is the thumbnail.
    pub image: Vec<String>,
    pub price: f64,
    /// Discount percentage, e.g. `17.0` for a 17% promotion.
    pub promotion_as_percentage: f64,
    pub discount_color: String,
    pub category_id: i64,
    /// `true` iff [`Product::stock`] is greater than zero.
    pub in_stock: bool,
    /// Raw stock value as the backend reports it (wire name `instock`).
    /// Kept as a float so fractional counts still read as in stock.
    #[serde(rename = "instock")]
    pub stock: f64,
    pub count_sold: i64,
    pub group_id: i64,
}

impl Default for Product {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            detail: DEFAULT_DETAIL.to_string(),
            vendor: None,
            rating: 0.0,
            size: String::new(),
            image: Vec::new(),
            price: 0.0,
            promotion_as_percentage: 0.0,
            discount_color: DEFAULT_DISCOUNT_COLOR.to_string(),
            category_id: 0,
            in_stock: false,
            stock: 0.0,
            count_sold: 0,
            group_id: 0,
        }
    }
}

impl Product {
    /// Returns `true` if the product sold more than [`POPULAR_SOLD_THRESHOLD`] units.
    #[must_use]
    pub fn is_popular(&self) -> bool {
        self.count_sold > POPULAR_SOLD_THRESHOLD
    }

    /// Price after applying `promotion_as_percentage`, never below zero.
    #[must_use]
    pub fn discounted_price(&self) -> f64 {
        let pct = self.promotion_as_percentage.clamp(0.0, 100.0);
        self.price * (100.0 - pct) / 100.0
    }

    /// First image reference, used as the product thumbnail.
    #[must_use]
    pub fn thumbnail(&self) -> Option<&str> {
        self.image.first().map(String::as_str)
    }
}

/// A partial product update. Only fields set to `Some` are sent to the backend.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub detail: Option<String>,
    pub vendor: Option<String>,
    pub rating: Option<f64>,
    pub size: Option<String>,
    pub image: Option<Vec<String>>,
    pub price: Option<f64>,
    pub promotion_as_percentage: Option<f64>,
    pub discount_color: Option<String>,
    pub category_id: Option<i64>,
    pub in_stock: Option<bool>,
    pub count_sold: Option<i64>,
    pub group_id: Option<i64>,
}

impl ProductPatch {
    /// Returns `true` if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(count_sold: i64) -> Product {
        Product {
            id: Some(1),
            name: "Seeds of Change Organic Quinoa".to_string(),
            price: 28.85,
            promotion_as_percentage: 17.0,
            image: vec!["quinoa-1.png".to_string(), "quinoa-2.png".to_string()],
            count_sold,
            ..Product::default()
        }
    }

    #[test]
    fn default_product_uses_fallback_strings() {
        let product = Product::default();
        assert_eq!(product.detail, DEFAULT_DETAIL);
        assert_eq!(product.discount_color, DEFAULT_DISCOUNT_COLOR);
        assert!(!product.in_stock);
        assert!(product.id.is_none());
    }

    #[test]
    fn is_popular_is_strictly_above_threshold() {
        assert!(!make_product(10).is_popular());
        assert!(make_product(11).is_popular());
    }

    #[test]
    fn discounted_price_applies_percentage() {
        let product = make_product(0);
        let expected = 28.85 * 0.83;
        assert!((product.discounted_price() - expected).abs() < 1e-9);
    }

    #[test]
    fn discounted_price_clamps_out_of_range_percentage() {
        let mut product = make_product(0);
        product.promotion_as_percentage = 150.0;
        assert!(product.discounted_price().abs() < f64::EPSILON);
    }

    #[test]
    fn thumbnail_is_first_image() {
        assert_eq!(make_product(0).thumbnail(), Some("quinoa-1.png"));
        assert_eq!(Product::default().thumbnail(), None);
    }

    #[test]
    fn serialized_product_uses_wire_stock_names() {
        let mut product = make_product(0);
        product.stock = 4.0;
        product.in_stock = true;
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["instock"], 4.0);
        assert_eq!(value["inStock"], true);
        assert_eq!(value["discountColor"], DEFAULT_DISCOUNT_COLOR);
        assert_eq!(value["promotionAsPercentage"], 17.0);
    }

    #[test]
    fn product_patch_is_empty_by_default() {
        assert!(ProductPatch::default().is_empty());
        let patch = ProductPatch {
            in_stock: Some(false),
            ..ProductPatch::default()
        };
        assert!(!patch.is_empty());
    }
}
