//! Shopping cart module.
//!
//! Contains the cart ledger, its line items, and the pricing snapshot.

#[allow(clippy::module_inception)]
mod cart;
mod pricing;

pub use cart::{Cart, CartAction, LineItem};
pub use pricing::{CartPricing, LineItemPricing};
