// src/notify/formatter.rs

use crate::domain::changes::ChangeSet;

/// Soft cap per message, comfortably under the transport's hard 4096
/// character limit.
pub const MESSAGE_SOFT_LIMIT: usize = 3500;

/// Renders a change set into notification messages, one or more per
/// non-empty category. Every entry is self-contained: packing against
/// the length cap happens at entry boundaries, never mid-product.
pub fn format_notifications(changes: &ChangeSet) -> Vec<String> {
    let mut messages = Vec::new();

    if !changes.new_products.is_empty() {
        let header = format!("🆕 New Products ({} found)", changes.new_products.len());
        let entries: Vec<String> = changes
            .new_products
            .iter()
            .map(|p| format!("• {} - {}", p.title, p.price))
            .collect();
        messages.extend(pack_entries(&header, &entries, MESSAGE_SOFT_LIMIT));
    }

    if !changes.size_changes.is_empty() {
        let header = format!("📐 Size Changes ({} found)", changes.size_changes.len());
        let entries: Vec<String> = changes
            .size_changes
            .iter()
            .map(|c| {
                let status = if c.to == "Yes" { "✅ Fixed" } else { "❌ Broken" };
                format!("• {} - {} ({})", c.title, status, c.sizes)
            })
            .collect();
        messages.extend(pack_entries(&header, &entries, MESSAGE_SOFT_LIMIT));
    }

    if !changes.new_discounts.is_empty() {
        let header = format!("💰 New Discounts ({} found)", changes.new_discounts.len());
        let entries: Vec<String> = changes
            .new_discounts
            .iter()
            .map(|d| {
                format!(
                    "• {}\n  {} (was {}) - {}",
                    d.title, d.current_price, d.original_price, d.discount_percent
                )
            })
            .collect();
        messages.extend(pack_entries(&header, &entries, MESSAGE_SOFT_LIMIT));
    }

    messages
}

/// Greedily packs whole entries into messages no longer than `limit`.
/// Every message opens with the header, so a reader of any chunk can
/// tell which category it belongs to; an entry that would overflow the
/// current message starts a new one. A single oversized entry still goes
/// out alone rather than being split.
pub fn pack_entries(header: &str, entries: &[String], limit: usize) -> Vec<String> {
    let mut messages = Vec::new();
    let mut current = format!("{header}\n");
    let mut packed = 0usize;

    for entry in entries {
        // +1 for the joining newline
        if packed > 0 && current.len() + entry.len() + 1 > limit {
            messages.push(std::mem::replace(&mut current, format!("{header}\n")));
            packed = 0;
        }
        current.push('\n');
        current.push_str(entry);
        packed += 1;
    }

    messages.push(current);
    messages
}
