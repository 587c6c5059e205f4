//! Cart pricing snapshot.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Pricing breakdown for a cart, computed on demand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of all line totals.
    pub subtotal: Money,
    /// Sum of quantities (header badge).
    pub item_count: i64,
    /// Per-line breakdown.
    pub line_items: Vec<LineItemPricing>,
}

impl CartPricing {
    /// Heading for the line list (e.g., "Items (2)").
    pub fn heading(&self) -> String {
        format!("Items ({})", self.line_items.len())
    }
}

/// Pricing breakdown for a single line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemPricing {
    /// Product in this line.
    pub product_id: ProductId,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// unit_price * quantity.
    pub total: Money,
}
