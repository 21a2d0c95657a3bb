use crate::domain::snapshot::ProductSnapshot;
use crate::scraper::models::{ShopOption, ShopProduct, ShopVariant};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// A fresh per-test directory under the system temp dir.
pub fn temp_dir(prefix: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "{prefix}_{}",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

pub fn variant(title: &str, price: &str, compare_at: Option<&str>) -> ShopVariant {
    ShopVariant {
        title: title.to_string(),
        price: price.to_string(),
        compare_at_price: compare_at.map(str::to_string),
    }
}

/// A product with a Size option and one 45.00 variant per size label.
pub fn sized_product(id: i64, title: &str, sizes: &[&str]) -> ShopProduct {
    ShopProduct {
        id,
        title: title.to_string(),
        handle: title.to_lowercase().replace(' ', "-"),
        body_html: Some(format!("<p>{title}</p>")),
        options: vec![ShopOption {
            name: "Size".to_string(),
        }],
        variants: sizes.iter().map(|s| variant(s, "45.00", None)).collect(),
    }
}

/// A snapshot row with no discount and sequential sizes; tests override
/// the fields under scrutiny.
pub fn snapshot_row(id: i64, title: &str) -> ProductSnapshot {
    ProductSnapshot {
        product_id: id,
        title: title.to_string(),
        current_price: "€45.00".to_string(),
        original_price: "-".to_string(),
        discount_amount: "-".to_string(),
        discount_percent: "-".to_string(),
        handle: title.to_lowercase().replace(' ', "-"),
        size_type: "Size".to_string(),
        size: "S,M,L".to_string(),
        size_sequential: "Yes".to_string(),
        description: String::new(),
    }
}
