//! Normalization from raw backend product records to [`storefront_core::Product`].
//!
//! The backend is loosely typed: numbers may arrive as strings, the stock
//! field is spelled `instock` or `inStock`, the group reference `groupId` or
//! `group`, and `image` is sometimes a JSON-encoded array inside a string.
//! Every function here is total; malformed input degrades to defaults.

use serde_json::{Map, Value};
use storefront_core::{Product, DEFAULT_DETAIL, DEFAULT_DISCOUNT_COLOR};

/// Normalizes one raw product record into a canonical [`Product`].
///
/// Never fails. Numeric fields that cannot be parsed become `0`, blank
/// `detail`/`discountcolor` fall back to [`DEFAULT_DETAIL`] and
/// [`DEFAULT_DISCOUNT_COLOR`], and a non-object input yields
/// [`Product::default`].
#[must_use]
pub fn normalize_product(raw: &Value) -> Product {
    let Some(fields) = raw.as_object() else {
        return Product::default();
    };

    let stock = number_or_zero(stock_field(fields));

    Product {
        id: fields.get("id").and_then(coerce_number).map(truncate),
        name: fields.get("name").and_then(scalar_text).unwrap_or_default(),
        detail: non_blank(fields.get("detail")).unwrap_or_else(|| DEFAULT_DETAIL.to_string()),
        vendor: non_blank(fields.get("vendor")),
        rating: number_or_zero(fields.get("rating")),
        size: fields.get("size").and_then(scalar_text).unwrap_or_default(),
        image: image_list(fields.get("image")),
        price: number_or_zero(fields.get("price")),
        promotion_as_percentage: number_or_zero(fields.get("promotionAsPercentage")),
        discount_color: non_blank(first_present(fields, &["discountcolor", "discountColor"]))
            .unwrap_or_else(|| DEFAULT_DISCOUNT_COLOR.to_string()),
        category_id: integer_or_zero(fields.get("categoryId")),
        in_stock: stock > 0.0,
        stock,
        count_sold: integer_or_zero(fields.get("countSold")),
        group_id: integer_or_zero(first_present(fields, &["groupId", "group"])),
    }
}

/// The numeric stock field: `instock`, falling back to the boolean-ish `inStock`.
fn stock_field(fields: &Map<String, Value>) -> Option<&Value> {
    first_present(fields, &["instock", "inStock"])
}

/// Returns the first key whose value is present and not `null`.
pub(crate) fn first_present<'a>(
    fields: &'a Map<String, Value>,
    keys: &[&str],
) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| fields.get(*key))
        .find(|v| !v.is_null())
}

/// Coerces a JSON value to a finite number the way the backend's loose
/// typing implies: numeric strings parse, booleans are 1/0.
pub(crate) fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    };
    n.filter(|n| n.is_finite())
}

fn number_or_zero(value: Option<&Value>) -> f64 {
    value.and_then(coerce_number).unwrap_or(0.0)
}

fn integer_or_zero(value: Option<&Value>) -> i64 {
    value.and_then(coerce_number).map_or(0, truncate)
}

#[allow(clippy::cast_possible_truncation)]
fn truncate(n: f64) -> i64 {
    // `as` saturates at the i64 bounds.
    n.trunc() as i64
}

/// Renders a scalar as text; arrays, objects and `null` have no text form.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Trimmed text, or `None` when missing or whitespace-only.
fn non_blank(value: Option<&Value>) -> Option<String> {
    value
        .and_then(scalar_text)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Decodes the `image` field into an ordered list of references.
///
/// Accepts a JSON array, a string holding a JSON-encoded array, or a bare
/// reference string. Anything that does not decode to an array is treated
/// as a single reference.
fn image_list(value: Option<&Value>) -> Vec<String> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
        Some(Value::String(s)) if s.trim().is_empty() => Vec::new(),
        Some(Value::String(s)) => match serde_json::from_str::<Value>(s) {
            Ok(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
            _ => vec![s.clone()],
        },
        Some(other) => scalar_text(other).into_iter().collect(),
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
