//! Plain-text persistence for the inventory store.
//!
//! The on-disk format is a fixed contract shared with files written by
//! earlier versions of the tool: one labeled block per item, in store order,
//! terminated by a `---` line. Price values carry a literal `P` currency
//! marker and are rendered with two decimals; ids are zero-padded to three
//! digits.
//!
//! ```text
//! ID: 001
//! Name: Widget
//! Brand: Acme
//! Price: 9.99
//! Quantity: 10
//! Price History: P9.99 P8.50
//! Stock History: 10 5
//! ---
//! ```
//!
//! Loading is deliberately lenient (default-fill): lines that match no known
//! label are ignored, a block missing fields keeps zero/empty defaults, and
//! each record is repaired on `---` so its histories end in the current
//! price/quantity. Save failures leave the in-memory store untouched.

use crate::error::Result;
use crate::model::Item;
use std::fs;
use std::path::Path;

const LABEL_ID: &str = "ID: ";
const LABEL_NAME: &str = "Name: ";
const LABEL_BRAND: &str = "Brand: ";
const LABEL_PRICE: &str = "Price: ";
const LABEL_QUANTITY: &str = "Quantity: ";
const LABEL_PRICE_HISTORY: &str = "Price History: ";
const LABEL_STOCK_HISTORY: &str = "Stock History: ";
const RECORD_END: &str = "---";
const PRICE_MARKER: char = 'P';

/// Write all items to `path`, replacing any previous contents.
pub fn save(items: &[Item], path: &Path) -> Result<()> {
    fs::write(path, render(items))?;
    Ok(())
}

/// Read items back from `path`. A missing or unreadable file is an error;
/// callers treat it as "no existing inventory" and start empty.
pub fn load(path: &Path) -> Result<Vec<Item>> {
    let content = fs::read_to_string(path)?;
    Ok(parse(&content))
}

fn render(items: &[Item]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&format!("{}{:03}\n", LABEL_ID, item.id));
        out.push_str(&format!("{}{}\n", LABEL_NAME, item.name));
        out.push_str(&format!("{}{}\n", LABEL_BRAND, item.brand));
        out.push_str(&format!("{}{:.2}\n", LABEL_PRICE, item.price));
        out.push_str(&format!("{}{}\n", LABEL_QUANTITY, item.quantity));

        out.push_str(LABEL_PRICE_HISTORY);
        for price in &item.price_history {
            out.push_str(&format!("{}{:.2} ", PRICE_MARKER, price));
        }
        out.push('\n');

        out.push_str(LABEL_STOCK_HISTORY);
        for quantity in &item.stock_history {
            out.push_str(&format!("{} ", quantity));
        }
        out.push('\n');

        out.push_str(RECORD_END);
        out.push('\n');
    }
    out
}

fn parse(content: &str) -> Vec<Item> {
    let mut items = Vec::new();
    let mut current = Item::default();

    for line in content.lines() {
        if let Some(rest) = line.strip_prefix(LABEL_ID) {
            current.id = rest.trim().parse().unwrap_or(0);
        } else if let Some(rest) = line.strip_prefix(LABEL_NAME) {
            current.name = rest.to_string();
        } else if let Some(rest) = line.strip_prefix(LABEL_BRAND) {
            current.brand = rest.to_string();
        } else if let Some(rest) = line.strip_prefix(LABEL_PRICE) {
            current.price = rest.trim().parse().unwrap_or(0.0);
        } else if let Some(rest) = line.strip_prefix(LABEL_QUANTITY) {
            current.quantity = rest.trim().parse().unwrap_or(0);
        } else if let Some(rest) = line.strip_prefix(LABEL_PRICE_HISTORY) {
            current.price_history = rest
                .split_whitespace()
                .filter_map(|token| token.trim_start_matches(PRICE_MARKER).parse().ok())
                .collect();
        } else if let Some(rest) = line.strip_prefix(LABEL_STOCK_HISTORY) {
            current.stock_history = rest
                .split_whitespace()
                .filter_map(|token| token.parse().ok())
                .collect();
        } else if line == RECORD_END {
            items.push(seal(std::mem::take(&mut current)));
        }
        // Anything else is ignored (default-fill policy).
    }

    items
}

/// Restore the history invariant for a loaded record: histories are never
/// empty and always end in the current value. Files written by older
/// versions can violate both.
fn seal(mut item: Item) -> Item {
    if item.price_history.last() != Some(&item.price) {
        item.price_history.push(item.price);
    }
    if item.stock_history.last() != Some(&item.quantity) {
        item.stock_history.push(item.quantity);
    }
    item
}
