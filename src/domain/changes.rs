// src/domain/changes.rs

use crate::domain::snapshot::{ProductSnapshot, NO_VALUE};
use serde::Serialize;
use std::collections::HashMap;

/// A product present in the current snapshot but not the previous one.
#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    pub product_id: i64,
    pub title: String,
    pub price: String,
}

/// A `size_sequential` transition for a product present in both
/// snapshots. Records the raw before/after values; the "fixed"/"broken"
/// framing is purely presentational and lives in the formatter.
#[derive(Debug, Clone, Serialize)]
pub struct SizeChange {
    pub product_id: i64,
    pub title: String,
    pub from: String,
    pub to: String,
    pub sizes: String,
}

/// A product whose previous snapshot had no discount and whose current
/// one does.
#[derive(Debug, Clone, Serialize)]
pub struct NewDiscount {
    pub product_id: i64,
    pub title: String,
    pub current_price: String,
    pub original_price: String,
    pub discount_percent: String,
}

/// Everything that changed between two snapshots. Ephemeral: computed on
/// demand, handed to the formatter (or serialized for structured
/// consumers), never persisted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChangeSet {
    pub new_products: Vec<NewProduct>,
    pub size_changes: Vec<SizeChange>,
    pub new_discounts: Vec<NewDiscount>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.new_products.is_empty()
            && self.size_changes.is_empty()
            && self.new_discounts.is_empty()
    }
}

/// Compares the current snapshot against the previous one, keyed by
/// product id. `None` for previous (first run, no baseline) yields an
/// empty change set; products that vanished are not reported.
pub fn diff_snapshots(
    current: &[ProductSnapshot],
    previous: Option<&[ProductSnapshot]>,
) -> ChangeSet {
    let previous = match previous {
        Some(rows) => rows,
        None => return ChangeSet::default(),
    };

    let previous_by_id: HashMap<i64, &ProductSnapshot> =
        previous.iter().map(|row| (row.product_id, row)).collect();

    let mut changes = ChangeSet::default();

    for row in current {
        let prior = match previous_by_id.get(&row.product_id) {
            Some(prior) => *prior,
            None => {
                changes.new_products.push(NewProduct {
                    product_id: row.product_id,
                    title: row.title.clone(),
                    price: row.current_price.clone(),
                });
                continue;
            }
        };

        if row.size_sequential != prior.size_sequential {
            changes.size_changes.push(SizeChange {
                product_id: row.product_id,
                title: row.title.clone(),
                from: prior.size_sequential.clone(),
                to: row.size_sequential.clone(),
                sizes: row.size.clone(),
            });
        }

        if prior.discount_amount == NO_VALUE && row.discount_amount != NO_VALUE {
            changes.new_discounts.push(NewDiscount {
                product_id: row.product_id,
                title: row.title.clone(),
                current_price: row.current_price.clone(),
                original_price: row.original_price.clone(),
                discount_percent: row.discount_percent.clone(),
            });
        }
    }

    changes
}
