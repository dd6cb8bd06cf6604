use serde_json::json;

use super::*;

// -----------------------------------------------------------------------
// normalize_product: stock
// -----------------------------------------------------------------------

#[test]
fn missing_stock_field_is_out_of_stock() {
    let product = normalize_product(&json!({"id": 1, "name": "Quinoa"}));
    assert!(!product.in_stock);
    assert!(product.stock.abs() < f64::EPSILON);
}

#[test]
fn positive_instock_is_in_stock() {
    let product = normalize_product(&json!({"id": 1, "instock": 3}));
    assert!(product.in_stock);
    assert!((product.stock - 3.0).abs() < f64::EPSILON);
}

#[test]
fn zero_negative_and_garbage_instock_are_out_of_stock() {
    for raw in [json!(0), json!(-2), json!("lots"), json!(null), json!([1])] {
        let product = normalize_product(&json!({"instock": raw}));
        assert!(!product.in_stock, "expected out of stock for {raw}");
    }
}

#[test]
fn fractional_instock_is_in_stock() {
    for raw in [json!(0.5), json!("0.9")] {
        let product = normalize_product(&json!({"instock": raw}));
        assert!(product.in_stock, "expected in stock for {raw}");
        assert!(product.stock > 0.0 && product.stock < 1.0);
    }
}

#[test]
fn numeric_string_instock_is_parsed() {
    let product = normalize_product(&json!({"instock": " 7 "}));
    assert!(product.in_stock);
    assert!((product.stock - 7.0).abs() < f64::EPSILON);
}

#[test]
fn boolean_in_stock_is_used_when_instock_absent() {
    let product = normalize_product(&json!({"inStock": true}));
    assert!(product.in_stock);
    assert!((product.stock - 1.0).abs() < f64::EPSILON);

    let product = normalize_product(&json!({"inStock": false}));
    assert!(!product.in_stock);
    assert!(product.stock.abs() < f64::EPSILON);
}

#[test]
fn instock_wins_over_in_stock() {
    let product = normalize_product(&json!({"instock": 0, "inStock": true}));
    assert!(!product.in_stock);
}

// -----------------------------------------------------------------------
// normalize_product: image
// -----------------------------------------------------------------------

#[test]
fn json_encoded_image_array_is_decoded() {
    let product = normalize_product(&json!({"image": "[\"a.png\",\"b.png\"]"}));
    assert_eq!(product.image, vec!["a.png", "b.png"]);
}

#[test]
fn bare_image_string_becomes_single_element() {
    let product = normalize_product(&json!({"image": "a.png"}));
    assert_eq!(product.image, vec!["a.png"]);
}

#[test]
fn malformed_json_image_is_kept_verbatim() {
    let product = normalize_product(&json!({"image": "[\"a.png\","}));
    assert_eq!(product.image, vec!["[\"a.png\","]);
}

#[test]
fn json_encoded_non_array_image_is_wrapped() {
    let product = normalize_product(&json!({"image": "{\"src\":\"a.png\"}"}));
    assert_eq!(product.image, vec!["{\"src\":\"a.png\"}"]);
}

#[test]
fn image_array_is_taken_verbatim() {
    let product = normalize_product(&json!({"image": ["x.png", "y.png"]}));
    assert_eq!(product.image, vec!["x.png", "y.png"]);
}

#[test]
fn missing_or_blank_image_is_empty() {
    assert!(normalize_product(&json!({})).image.is_empty());
    assert!(normalize_product(&json!({"image": null})).image.is_empty());
    assert!(normalize_product(&json!({"image": "  "})).image.is_empty());
}

// -----------------------------------------------------------------------
// normalize_product: numbers
// -----------------------------------------------------------------------

#[test]
fn non_numeric_price_is_zero() {
    let product = normalize_product(&json!({"price": "N/A"}));
    assert!(product.price.abs() < f64::EPSILON);
}

#[test]
fn numeric_strings_are_parsed() {
    let product = normalize_product(&json!({
        "rating": "4.5",
        "price": "28.85",
        "promotionAsPercentage": "17",
        "countSold": "12",
        "categoryId": "3"
    }));
    assert!((product.rating - 4.5).abs() < f64::EPSILON);
    assert!((product.price - 28.85).abs() < f64::EPSILON);
    assert!((product.promotion_as_percentage - 17.0).abs() < f64::EPSILON);
    assert_eq!(product.count_sold, 12);
    assert_eq!(product.category_id, 3);
}

#[test]
fn non_finite_strings_are_zero() {
    let product = normalize_product(&json!({"rating": "NaN", "price": "inf"}));
    assert!(product.rating.abs() < f64::EPSILON);
    assert!(product.price.abs() < f64::EPSILON);
}

#[test]
fn missing_id_stays_absent() {
    assert!(normalize_product(&json!({"name": "Draft"})).id.is_none());
    assert!(normalize_product(&json!({"id": "abc"})).id.is_none());
    assert_eq!(normalize_product(&json!({"id": "42"})).id, Some(42));
}

#[test]
fn group_falls_back_to_wire_name() {
    assert_eq!(normalize_product(&json!({"group": 2})).group_id, 2);
    assert_eq!(normalize_product(&json!({"groupId": 5, "group": 2})).group_id, 5);
    assert_eq!(normalize_product(&json!({"group": "default"})).group_id, 0);
}

// -----------------------------------------------------------------------
// normalize_product: strings
// -----------------------------------------------------------------------

#[test]
fn blank_detail_and_discount_color_fall_back() {
    let product = normalize_product(&json!({"detail": "   ", "discountcolor": ""}));
    assert_eq!(product.detail, DEFAULT_DETAIL);
    assert_eq!(product.discount_color, DEFAULT_DISCOUNT_COLOR);
}

#[test]
fn detail_and_discount_color_are_trimmed() {
    let product = normalize_product(&json!({
        "detail": "  Organic quinoa.  ",
        "discountcolor": " #f74b81 "
    }));
    assert_eq!(product.detail, "Organic quinoa.");
    assert_eq!(product.discount_color, "#f74b81");
}

#[test]
fn blank_vendor_is_none() {
    assert!(normalize_product(&json!({"vendor": " "})).vendor.is_none());
    assert_eq!(
        normalize_product(&json!({"vendor": "NestFood"})).vendor.as_deref(),
        Some("NestFood")
    );
}

#[test]
fn non_object_input_is_default_product() {
    assert_eq!(normalize_product(&json!("oops")), Product::default());
    assert_eq!(normalize_product(&json!(null)), Product::default());
}

// -----------------------------------------------------------------------
// normalize_product: idempotence
// -----------------------------------------------------------------------

#[test]
fn normalizing_canonical_output_is_identity() {
    let raw = json!({
        "id": 9,
        "name": "Foster Farms Takeout Crispy Classic",
        "detail": "  ",
        "vendor": "Stouffer",
        "rating": "4.0",
        "size": "1kg",
        "image": "[\"wings-1.png\",\"wings-2.png\"]",
        "price": 17.85,
        "promotionAsPercentage": "14",
        "discountcolor": "#3bb77e",
        "categoryId": 2,
        "instock": 5,
        "countSold": "30",
        "group": 1
    });
    let first = normalize_product(&raw);
    let canonical = serde_json::to_value(&first).unwrap();
    let second = normalize_product(&canonical);
    assert_eq!(first, second);
}

#[test]
fn normalizing_default_product_is_identity() {
    let canonical = serde_json::to_value(Product::default()).unwrap();
    assert_eq!(normalize_product(&canonical), Product::default());
}

#[test]
fn fractional_stock_survives_renormalization() {
    let first = normalize_product(&json!({"id": 4, "instock": "0.5"}));
    let second = normalize_product(&serde_json::to_value(&first).unwrap());
    assert!(second.in_stock);
    assert_eq!(first, second);
}
