//! Checkout module.
//!
//! Contains shipping methods, order totals, the checkout form, and order
//! confirmation.

mod confirmation;
mod form;
mod shipping;
mod totals;

pub use confirmation::{place_order, OrderConfirmation};
pub use form::{CheckoutForm, Country, FieldError, FormField, ValidationErrors};
pub use shipping::{ShippingMethod, ShippingSelection};
pub use totals::{
    compute_totals, default_tax_rate, OrderPricing, OrderTotals, ShippingPolicy,
    DEFAULT_SHIPPING_CENTS,
};
