//! Order lines and the candidate → line builder.

use serde::{Deserialize, Serialize};

use crate::extract::Candidate;
use crate::menu::MenuCatalog;

// ---------------------------------------------------------------------------
// OrderLine
// ---------------------------------------------------------------------------

/// One priced row of an order: Item, Quantity, Unit price, Total.
///
/// `item` is the canonical menu name, or the raw candidate text when the
/// assisted variant found no confident match (then `unit_price` is 0).
/// `total` is always `quantity × unit_price`; mutate quantity only through
/// [`set_quantity`](OrderLine::set_quantity) so the two never drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Canonical menu name, or raw candidate text if unmatched.
    pub item: String,
    /// Ordered quantity, always ≥ 1.
    pub quantity: u32,
    /// Unit price from the catalog; 0 for unmatched items.
    pub unit_price: u32,
    /// `quantity × unit_price` (saturating).
    pub total: u32,
}

impl OrderLine {
    /// Build a line with its total computed.
    pub fn new(item: impl Into<String>, quantity: u32, unit_price: u32) -> Self {
        let quantity = quantity.max(1);
        Self {
            item: item.into(),
            quantity,
            unit_price,
            total: quantity.saturating_mul(unit_price),
        }
    }

    /// Set the quantity (floored at 1) and recompute the total.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.max(1);
        self.total = self.quantity.saturating_mul(self.unit_price);
    }
}

// ---------------------------------------------------------------------------
// build_lines
// ---------------------------------------------------------------------------

/// Price each candidate against the catalog and emit ordered lines.
///
/// Candidate order is preserved, and duplicates are **not** merged: two
/// candidates resolving to the same canonical name stay separate lines, the
/// way they were spoken.  Unknown names price to the catalog's 0 sentinel.
pub fn build_lines(candidates: Vec<Candidate>, catalog: &MenuCatalog) -> Vec<OrderLine> {
    candidates
        .into_iter()
        .map(|c| {
            let unit_price = catalog.lookup_price(&c.name);
            OrderLine::new(c.name, c.quantity, unit_price)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
