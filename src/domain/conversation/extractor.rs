//! Free-text menu item extraction.
//!
//! Maps a customer message to order lines by testing every catalog item's
//! display name as a case-insensitive substring of the message. This is a
//! deliberate heuristic, kept at parity with the rule-based baseline rather
//! than grown into an NLU system:
//!
//! - false positives: an item name embedded in unrelated phrasing matches,
//!   and an item whose name is a substring of another's matches alongside it
//! - false negatives: plurals, synonyms, and typos never match
//!
//! Matches are independent per item. A name occurring twice in one message
//! still yields a single quantity-1 line, and returned lines follow catalog
//! iteration order, not position in the message.

use tracing::debug;

use crate::domain::catalog::Catalog;
use crate::domain::order::OrderLine;

/// Extracts order lines for every catalog item named in the message.
pub fn extract(message: &str, catalog: &Catalog) -> Vec<OrderLine> {
    let message = message.to_lowercase();

    let lines: Vec<OrderLine> = catalog
        .items()
        .iter()
        .filter(|item| message.contains(&item.name().to_lowercase()))
        .map(OrderLine::from_item)
        .collect();

    if !lines.is_empty() {
        debug!(
            matched = lines.len(),
            items = ?lines.iter().map(|l| l.menu_item_name()).collect::<Vec<_>>(),
            "extracted menu items from message"
        );
    }
    lines
}
