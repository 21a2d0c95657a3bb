// src/tests/formatter_tests.rs

use crate::domain::changes::{diff_snapshots, ChangeSet, NewDiscount, NewProduct, SizeChange};
use crate::notify::{format_notifications, pack_entries};
use crate::tests::utils::snapshot_row;

fn sample_changes() -> ChangeSet {
    ChangeSet {
        new_products: vec![NewProduct {
            product_id: 1,
            title: "Away Jersey".to_string(),
            price: "€90.00".to_string(),
        }],
        size_changes: vec![
            SizeChange {
                product_id: 2,
                title: "Home Jersey".to_string(),
                from: "No".to_string(),
                to: "Yes".to_string(),
                sizes: "S,M,L".to_string(),
            },
            SizeChange {
                product_id: 3,
                title: "Third Jersey".to_string(),
                from: "Yes".to_string(),
                to: "No".to_string(),
                sizes: "M,S,L".to_string(),
            },
        ],
        new_discounts: vec![NewDiscount {
            product_id: 4,
            title: "Track Jacket".to_string(),
            current_price: "€45.00".to_string(),
            original_price: "€60.00".to_string(),
            discount_percent: "25.0%".to_string(),
        }],
    }
}

#[test]
fn one_block_per_non_empty_category() {
    let messages = format_notifications(&sample_changes());

    assert_eq!(messages.len(), 3);
    assert!(messages[0].starts_with("🆕 New Products (1 found)"));
    assert!(messages[1].starts_with("📐 Size Changes (2 found)"));
    assert!(messages[2].starts_with("💰 New Discounts (1 found)"));
}

#[test]
fn empty_change_set_yields_no_messages() {
    let current = vec![snapshot_row(1, "Home Jersey")];
    let changes = diff_snapshots(&current, Some(&current));

    assert!(format_notifications(&changes).is_empty());
}

#[test]
fn transition_direction_is_framed_as_fixed_or_broken() {
    let messages = format_notifications(&sample_changes());

    assert!(messages[1].contains("• Home Jersey - ✅ Fixed (S,M,L)"));
    assert!(messages[1].contains("• Third Jersey - ❌ Broken (M,S,L)"));
}

#[test]
fn discount_entries_carry_both_prices_and_percent() {
    let messages = format_notifications(&sample_changes());

    assert!(messages[2].contains("• Track Jacket\n  €45.00 (was €60.00) - 25.0%"));
}

#[test]
fn packing_respects_the_limit_without_splitting_entries() {
    let entries: Vec<String> = (0..50).map(|i| format!("• Product number {i:02}")).collect();

    let chunks = pack_entries("🆕 New Products (50 found)", &entries, 200);

    assert!(chunks.len() > 1);
    for chunk in &chunks {
        // Every chunk is self-contained: the category header opens each
        // one, not just the first.
        assert!(chunk.starts_with("🆕 New Products (50 found)"));
        assert!(chunk.len() <= 200, "chunk over limit: {}", chunk.len());
    }

    // Every entry survives, whole, exactly once.
    let joined = chunks.join("\n");
    for entry in &entries {
        assert_eq!(joined.matches(entry.as_str()).count(), 1);
    }
}

#[test]
fn an_oversized_entry_still_goes_out_alone() {
    let entries = vec!["• ".to_string() + &"x".repeat(500)];

    let chunks = pack_entries("Header", &entries, 100);

    assert_eq!(chunks.len(), 1);
    assert!(chunks[0].contains(&entries[0]));
}
