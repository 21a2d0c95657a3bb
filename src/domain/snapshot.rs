// src/domain/snapshot.rs

use crate::domain::sequence::{classify_sequence, SizeSequential};
use crate::scraper::models::ShopProduct;
use ::scraper::Html;
use serde::{Deserialize, Serialize};

/// Sentinel for an absent price/discount comparison.
pub const NO_VALUE: &str = "-";

/// Sentinel size string for products with a single default variant.
pub const DEFAULT_SIZE: &str = "Default";

/// The storefront's placeholder variant title for unsized products.
const DEFAULT_VARIANT_TITLE: &str = "Default Title";

/// Option names under which this storefront exposes sizes.
const SIZE_OPTION_NAMES: [&str; 4] = ["Size", "Taglia", "Options", "option"];

/// Personalization products whose "sizes" are not real sizes. One
/// canonical list, matched case-insensitively against the title.
const CUSTOMIZATION_KEYWORDS: [&str; 4] = [
    "Add Your Name/Number",
    "Add name/number",
    "Choose a player",
    "Choose a Patch",
];

/// One catalog row at a point in time. Immutable once persisted;
/// serialized as a CSV row, one per product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub product_id: i64,
    pub title: String,
    pub current_price: String,
    pub original_price: String,
    pub discount_amount: String,
    pub discount_percent: String,
    pub handle: String,
    pub size_type: String,
    /// Comma-joined raw size labels in variant presentation order,
    /// or `Default` when the product has no size variants.
    pub size: String,
    /// `Yes` / `No` / `-` (see [`SizeSequential`]).
    pub size_sequential: String,
    pub description: String,
}

/// True when the title marks a name/number/patch personalization product.
/// Those never get a size-sequence verdict.
pub fn is_customization_product(title: &str) -> bool {
    let title = title.to_lowercase();
    CUSTOMIZATION_KEYWORDS
        .iter()
        .any(|keyword| title.contains(&keyword.to_lowercase()))
}

/// Builds one [`ProductSnapshot`] from a raw storefront record.
///
/// Returns `None` for a record with no variants; there is nothing to
/// price or size, and the storefront treats those as unlisted.
pub fn build_snapshot(product: &ShopProduct, currency: &str) -> Option<ProductSnapshot> {
    let first_variant = product.variants.first()?;

    // Which option carries the sizing, if any.
    let size_type = product
        .options
        .iter()
        .find(|opt| SIZE_OPTION_NAMES.contains(&opt.name.as_str()))
        .map(|opt| opt.name.clone())
        .unwrap_or_else(|| DEFAULT_VARIANT_TITLE.to_string());

    // Variant titles in presentation order, skipping the placeholder.
    let sizes: Vec<String> = product
        .variants
        .iter()
        .filter(|v| v.title != DEFAULT_VARIANT_TITLE)
        .map(|v| v.title.clone())
        .collect();

    let size_string = if sizes.is_empty() {
        DEFAULT_SIZE.to_string()
    } else {
        sizes.join(",")
    };

    let size_sequential = if size_string == DEFAULT_SIZE || is_customization_product(&product.title)
    {
        SizeSequential::NotApplicable
    } else {
        classify_sequence(&sizes)
    };

    // Pricing comes from the first variant. A compare-at of "0.00" (or
    // none) means no comparison price exists.
    let current_price = first_variant.price.parse::<f64>().unwrap_or(0.0);
    let compare_price = first_variant
        .compare_at_price
        .as_deref()
        .filter(|raw| *raw != "0.00")
        .and_then(|raw| raw.parse::<f64>().ok())
        .unwrap_or(0.0);

    let has_discount = compare_price > current_price;
    let discount_amount = compare_price - current_price;
    let discount_percent = if has_discount {
        discount_amount / compare_price * 100.0
    } else {
        0.0
    };

    Some(ProductSnapshot {
        product_id: product.id,
        title: product.title.clone(),
        current_price: format_price(current_price, currency),
        original_price: if compare_price > 0.0 {
            format_price(compare_price, currency)
        } else {
            NO_VALUE.to_string()
        },
        discount_amount: if has_discount {
            format_price(discount_amount, currency)
        } else {
            NO_VALUE.to_string()
        },
        discount_percent: if has_discount {
            format_percent(discount_percent)
        } else {
            NO_VALUE.to_string()
        },
        handle: product.handle.clone(),
        size_type,
        size: size_string,
        size_sequential: size_sequential.as_str().to_string(),
        description: clean_description(product.body_html.as_deref().unwrap_or("")),
    })
}

/// Builds snapshots for a whole fetch, skipping variantless records.
pub fn build_snapshots(products: &[ShopProduct], currency: &str) -> Vec<ProductSnapshot> {
    let mut rows = Vec::with_capacity(products.len());
    for product in products {
        match build_snapshot(product, currency) {
            Some(row) => rows.push(row),
            None => eprintln!("⚠️ Skipping product {} (no variants)", product.id),
        }
    }
    rows
}

/// Leading currency symbol, fixed 2-decimal mantissa.
pub fn format_price(amount: f64, currency: &str) -> String {
    format!("{currency}{amount:.2}")
}

/// 1-decimal mantissa, trailing percent sign.
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.1}%")
}

/// Strip the storefront's HTML description down to readable text,
/// collapsing runs of whitespace.
pub fn clean_description(body_html: &str) -> String {
    if body_html.is_empty() {
        return String::new();
    }

    let fragment = Html::parse_fragment(body_html);
    let text: Vec<&str> = fragment.root_element().text().collect();

    text.join(" ").split_whitespace().collect::<Vec<_>>().join(" ")
}
