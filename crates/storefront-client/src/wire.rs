//! Field-name translation between the client's canonical names and the
//! backend's wire names.
//!
//! | canonical       | wire            |
//! |-----------------|-----------------|
//! | `inStock` bool  | `instock` 1/0   |
//! | `groupId`       | `group`         |
//! | `discountColor` | `discountcolor` |

use serde_json::{Map, Value};
use storefront_core::{Product, ProductPatch};

use crate::normalize::{first_present, normalize_product};

/// Translates a [`ProductPatch`] into the JSON body the backend's
/// `PATCH /products/:id` expects. Only fields set on the patch are emitted.
#[must_use]
pub fn patch_to_wire(patch: &ProductPatch) -> Map<String, Value> {
    let mut body = Map::new();

    let mut put = |key: &str, value: Option<Value>| {
        if let Some(value) = value {
            body.insert(key.to_string(), value);
        }
    };

    put("name", patch.name.clone().map(Value::from));
    put("detail", patch.detail.clone().map(Value::from));
    put("vendor", patch.vendor.clone().map(Value::from));
    put("rating", patch.rating.map(Value::from));
    put("size", patch.size.clone().map(Value::from));
    put("image", patch.image.clone().map(Value::from));
    put("price", patch.price.map(Value::from));
    put(
        "promotionAsPercentage",
        patch.promotion_as_percentage.map(Value::from),
    );
    put("discountcolor", patch.discount_color.clone().map(Value::from));
    put("categoryId", patch.category_id.map(Value::from));
    put(
        "instock",
        patch.in_stock.map(|in_stock| Value::from(i64::from(in_stock))),
    );
    put("countSold", patch.count_sold.map(Value::from));
    put("group", patch.group_id.map(Value::from));

    body
}

/// Rewrites wire field names in a backend record to their canonical names.
///
/// A record carrying only a boolean `inStock` gains a matching numeric
/// `instock`, so it overrides a previously retained stock count when merged.
#[must_use]
pub fn wire_to_domain(fields: &Map<String, Value>) -> Map<String, Value> {
    let mut out = fields.clone();

    if first_present(fields, &["instock"]).is_none() {
        if let Some(flag) = first_present(fields, &["inStock"]) {
            let stock = match flag {
                Value::Bool(b) => Value::from(i64::from(*b)),
                other => other.clone(),
            };
            out.insert("instock".to_string(), stock);
        }
    }

    rename(&mut out, "group", "groupId");
    rename(&mut out, "discountcolor", "discountColor");

    out
}

/// Moves `from` to `to` unless `to` already holds a non-null value.
fn rename(fields: &mut Map<String, Value>, from: &str, to: &str) {
    let Some(value) = fields.remove(from) else {
        return;
    };
    if fields.get(to).is_none_or(Value::is_null) {
        fields.insert(to.to_string(), value);
    }
}

/// Merges a server-returned record over an existing product.
///
/// Every field the server sent replaces the stored one; fields it omitted
/// keep their previous values. A `null` id from the server never replaces a
/// stored one. The merged record is normalized again, so the result is
/// canonical even if the server sent loosely typed values.
#[must_use]
pub fn merge_product(existing: &Product, server: &Value) -> Product {
    let mut merged = match serde_json::to_value(existing) {
        Ok(Value::Object(fields)) => fields,
        _ => Map::new(),
    };

    if let Some(fields) = server.as_object() {
        for (key, value) in wire_to_domain(fields) {
            if key == "id" && value.is_null() {
                continue;
            }
            merged.insert(key, value);
        }
    }

    normalize_product(&Value::Object(merged))
}
