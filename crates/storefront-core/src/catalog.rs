//! Catalog entities that the backend returns in their canonical shape.
//!
//! Unlike [`crate::Product`], groups, categories and promotions need no
//! normalization beyond field defaults: the backend already uses the same
//! camelCase names the client does. Unset columns arrive as `null` and are
//! read the same as missing ones.

use serde::{Deserialize, Deserializer, Serialize};

/// A top-level grouping of categories and products (e.g. `"Fruits"`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
    /// Backend-assigned ID; absent before first persistence.
    pub id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Category {
    pub id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub product_count: i64,
    /// CSS color used as the category tile background.
    #[serde(deserialize_with = "null_as_default")]
    pub color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    /// Reference to [`Group::id`]. Some backends call this field `group`.
    #[serde(alias = "group", deserialize_with = "null_as_default")]
    pub group_id: i64,
}

/// A promotional banner shown on the storefront home page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Promotion {
    pub id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub button_text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub button_color: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
