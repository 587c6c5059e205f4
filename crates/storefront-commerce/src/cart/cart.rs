//! Cart ledger and line item types.

use crate::cart::{CartPricing, LineItemPricing};
use crate::catalog::CatalogEntry;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A shopping cart.
///
/// Line items are private so every change goes through the methods below,
/// which keep each line's quantity at 1 or more.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct Cart {
    items: Vec<LineItem>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Create a cart holding one of each entry, in order.
    pub fn with_entries(entries: &[CatalogEntry]) -> Result<Self, CommerceError> {
        let currency = entries.first().map(|e| e.price.currency).unwrap_or_default();
        let mut cart = Self::new(currency);
        for entry in entries {
            cart.add_item(entry, 1)?;
        }
        Ok(cart)
    }

    /// Add an entry to the cart, merging with an existing line.
    pub fn add_item(&mut self, entry: &CatalogEntry, quantity: i64) -> Result<(), CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if entry.price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: entry.price.currency.code().to_string(),
            });
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == entry.id) {
            existing.quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            tracing::debug!(id = %entry.id, quantity = existing.quantity, "cart line merged");
            return Ok(());
        }

        self.items.push(LineItem::from_entry(entry, quantity));
        tracing::debug!(id = %entry.id, quantity, "cart line added");
        Ok(())
    }

    /// Set a line's quantity.
    ///
    /// A quantity below 1 removes the line instead. Unknown ids are ignored.
    /// Returns whether the cart changed.
    pub fn change_quantity(&mut self, id: &ProductId, new_quantity: i64) -> bool {
        if new_quantity < 1 {
            return self.remove(id);
        }
        match self.items.iter_mut().find(|i| &i.id == id) {
            Some(item) if item.quantity != new_quantity => {
                tracing::debug!(%id, from = item.quantity, to = new_quantity, "cart quantity changed");
                item.quantity = new_quantity;
                true
            }
            _ => false,
        }
    }

    /// Raise a line's quantity by one.
    pub fn increment(&mut self, id: &ProductId) -> bool {
        match self.get(id) {
            Some(item) => {
                let next = item.quantity.saturating_add(1);
                self.change_quantity(id, next)
            }
            None => false,
        }
    }

    /// Lower a line's quantity by one, removing the line when it was at 1.
    pub fn decrement_or_remove(&mut self, id: &ProductId) -> bool {
        match self.get(id) {
            Some(item) => {
                let next = item.quantity - 1;
                self.change_quantity(id, next)
            }
            None => false,
        }
    }

    /// Remove a line. Returns false if it was not in the cart.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        let removed = self.items.len() < len_before;
        if removed {
            tracing::debug!(%id, "cart line removed");
        }
        removed
    }

    /// Apply a user action.
    pub fn apply(&mut self, action: &CartAction) -> bool {
        match action {
            CartAction::Increment(id) => self.increment(id),
            CartAction::DecrementOrRemove(id) => self.decrement_or_remove(id),
            CartAction::Remove(id) => self.remove(id),
            CartAction::SetQuantity(id, quantity) => self.change_quantity(id, *quantity),
        }
    }

    /// Sum of unit price times quantity over all lines. Zero when empty.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        let lines = self
            .items
            .iter()
            .map(LineItem::total)
            .collect::<Result<Vec<_>, _>>()?;
        Money::try_sum(lines.iter(), self.currency).ok_or(CommerceError::Overflow)
    }

    /// Total for one line.
    pub fn line_total(&self, id: &ProductId) -> Option<Result<Money, CommerceError>> {
        self.get(id).map(LineItem::total)
    }

    /// Get total item count (sum of quantities), saturating at `i64::MAX`.
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0_i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Get number of lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a line by product id.
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// All lines, in the order they were added.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Calculate a pricing snapshot.
    pub fn calculate_pricing(&self) -> Result<CartPricing, CommerceError> {
        let line_items = self
            .items
            .iter()
            .map(|item| {
                Ok(LineItemPricing {
                    product_id: item.id.clone(),
                    unit_price: item.unit_price,
                    quantity: item.quantity,
                    total: item.total()?,
                })
            })
            .collect::<Result<Vec<_>, CommerceError>>()?;

        Ok(CartPricing {
            subtotal: self.subtotal()?,
            item_count: self.item_count(),
            line_items,
        })
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product in this line.
    pub id: ProductId,
    /// Product title (denormalized for display).
    pub title: String,
    /// Image URL (denormalized for display).
    pub image_url: String,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity, always 1 or more.
    pub quantity: i64,
}

impl LineItem {
    fn from_entry(entry: &CatalogEntry, quantity: i64) -> Self {
        Self {
            id: entry.id.clone(),
            title: entry.title.clone(),
            image_url: entry.image_url.clone(),
            unit_price: entry.price,
            quantity,
        }
    }

    /// Unit price times quantity.
    pub fn total(&self) -> Result<Money, CommerceError> {
        self.unit_price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}

/// A user action against the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartAction {
    Increment(ProductId),
    DecrementOrRemove(ProductId),
    Remove(ProductId),
    SetQuantity(ProductId, i64),
}

impl FromStr for CartAction {
    type Err = CommerceError;

    /// Parse `inc:ID`, `dec:ID`, `remove:ID` or `set:ID=N`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CommerceError::InvalidCartAction(s.to_string());
        let (verb, arg) = s.split_once(':').ok_or_else(invalid)?;
        let arg = arg.trim();
        if arg.is_empty() {
            return Err(invalid());
        }

        match verb.trim().to_lowercase().as_str() {
            "inc" | "increment" => Ok(CartAction::Increment(arg.into())),
            "dec" | "decrement" => Ok(CartAction::DecrementOrRemove(arg.into())),
            "remove" | "rm" => Ok(CartAction::Remove(arg.into())),
            "set" => {
                let (id, qty) = arg.split_once('=').ok_or_else(invalid)?;
                let qty = qty.trim().parse::<i64>().map_err(|_| invalid())?;
                Ok(CartAction::SetQuantity(id.trim().into(), qty))
            }
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u32, cents: i64) -> CatalogEntry {
        CatalogEntry::new(id, format!("Product {id}"), Money::new(cents, Currency::USD))
    }

    fn cart_with(lines: &[(u32, i64, i64)]) -> Cart {
        let mut cart = Cart::new(Currency::USD);
        for &(id, cents, qty) in lines {
            cart.add_item(&entry(id, cents), qty).unwrap();
        }
        cart
    }

    #[test]
    fn test_empty_cart_subtotal_is_zero() {
        let cart = Cart::new(Currency::USD);
        assert!(cart.is_empty());
        assert!(cart.subtotal().unwrap().is_zero());
    }

    #[test]
    fn test_subtotal() {
        let cart = cart_with(&[(1, 1000, 2)]);
        assert_eq!(cart.subtotal().unwrap().amount_cents, 2000);

        let cart = cart_with(&[(1, 1000, 2), (2, 2000, 1)]);
        assert_eq!(cart.subtotal().unwrap().amount_cents, 4000);
    }

    #[test]
    fn test_add_same_item_merges() {
        let mut cart = cart_with(&[(1, 1000, 1)]);
        cart.add_item(&entry(1, 1000), 2).unwrap();
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_add_rejects_zero_quantity() {
        let mut cart = Cart::new(Currency::USD);
        assert_eq!(
            cart.add_item(&entry(1, 1000), 0),
            Err(CommerceError::InvalidQuantity(0))
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_change_quantity() {
        let mut cart = cart_with(&[(1, 1000, 1)]);
        assert!(cart.change_quantity(&ProductId::new("1"), 5));
        assert_eq!(cart.item_count(), 5);
        assert!(!cart.change_quantity(&ProductId::new("1"), 5));
    }

    #[test]
    fn test_change_quantity_below_one_removes() {
        let mut cart = cart_with(&[(1, 1000, 3)]);
        assert!(cart.change_quantity(&ProductId::new("1"), 0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_decrement_from_one_removes() {
        let mut cart = cart_with(&[(1, 1000, 2), (2, 500, 1)]);
        let id = ProductId::new("1");

        assert!(cart.decrement_or_remove(&id));
        assert_eq!(cart.get(&id).unwrap().quantity, 1);

        assert!(cart.decrement_or_remove(&id));
        assert!(cart.get(&id).is_none());
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_increment() {
        let mut cart = cart_with(&[(1, 1000, 1)]);
        assert!(cart.increment(&ProductId::new("1")));
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut cart = cart_with(&[(1, 1000, 1)]);
        let before = cart.clone();
        let missing = ProductId::new("99");

        assert!(!cart.remove(&missing));
        assert!(!cart.increment(&missing));
        assert!(!cart.decrement_or_remove(&missing));
        assert!(!cart.change_quantity(&missing, 4));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_reduces_subtotal_by_line_total() {
        let mut cart = cart_with(&[(1, 149999, 1), (2, 7999, 3)]);
        let id = ProductId::new("2");
        let before = cart.subtotal().unwrap();
        let line = cart.line_total(&id).unwrap().unwrap();

        assert!(cart.remove(&id));
        let after = cart.subtotal().unwrap();
        assert_eq!(before.amount_cents - after.amount_cents, line.amount_cents);
        assert!(cart.get(&id).is_none());
    }

    #[test]
    fn test_seeded_cart() {
        let cart = Cart::with_entries(&crate::catalog::seed::cart_lines()).unwrap();
        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.subtotal().unwrap().display(), "$1579.98");
    }

    #[test]
    fn test_item_count_saturates() {
        let mut cart = cart_with(&[(1, 1, i64::MAX)]);
        cart.add_item(&entry(2, 1), 5).unwrap();
        assert_eq!(cart.item_count(), i64::MAX);
    }

    #[test]
    fn test_subtotal_overflow_is_an_error() {
        let cart = cart_with(&[(1, i64::MAX, 1), (2, 1, 1)]);
        assert_eq!(cart.subtotal(), Err(CommerceError::Overflow));
    }

    #[test]
    fn test_pricing_snapshot() {
        let cart = cart_with(&[(1, 1000, 2), (2, 2000, 1)]);
        let pricing = cart.calculate_pricing().unwrap();
        assert_eq!(pricing.subtotal.amount_cents, 4000);
        assert_eq!(pricing.item_count, 3);
        assert_eq!(pricing.line_items[0].total.amount_cents, 2000);
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!(
            "inc:1".parse::<CartAction>().unwrap(),
            CartAction::Increment(ProductId::new("1"))
        );
        assert_eq!(
            "dec: 2".parse::<CartAction>().unwrap(),
            CartAction::DecrementOrRemove(ProductId::new("2"))
        );
        assert_eq!(
            "set:1=4".parse::<CartAction>().unwrap(),
            CartAction::SetQuantity(ProductId::new("1"), 4)
        );
        assert!("bump:1".parse::<CartAction>().is_err());
        assert!("set:1=x".parse::<CartAction>().is_err());
        assert!("remove:".parse::<CartAction>().is_err());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn action() -> impl Strategy<Value = CartAction> {
            let id = (1u32..=4).prop_map(ProductId::from);
            prop_oneof![
                id.clone().prop_map(CartAction::Increment),
                id.clone().prop_map(CartAction::DecrementOrRemove),
                id.clone().prop_map(CartAction::Remove),
                (id, -3i64..6).prop_map(|(id, q)| CartAction::SetQuantity(id, q)),
            ]
        }

        proptest! {
            /// Property: no sequence of actions leaves a line below quantity 1.
            #[test]
            fn quantities_stay_positive(actions in proptest::collection::vec(action(), 0..40)) {
                let mut cart = cart_with(&[(1, 1000, 1), (2, 250, 2), (3, 999, 1)]);
                for a in &actions {
                    cart.apply(a);
                    prop_assert!(cart.items().iter().all(|i| i.quantity >= 1));
                }
            }

            /// Property: subtotal always equals the sum of line totals.
            #[test]
            fn subtotal_matches_lines(actions in proptest::collection::vec(action(), 0..40)) {
                let mut cart = cart_with(&[(1, 1000, 1), (2, 250, 2), (3, 999, 1)]);
                for a in &actions {
                    cart.apply(a);
                }
                let expected: i64 = cart
                    .items()
                    .iter()
                    .map(|i| i.unit_price.amount_cents * i.quantity)
                    .sum();
                prop_assert_eq!(cart.subtotal().unwrap().amount_cents, expected);
            }
        }
    }
}
