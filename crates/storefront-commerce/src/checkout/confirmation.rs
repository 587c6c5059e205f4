//! Placing an order from a validated checkout form.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::checkout::{CheckoutForm, OrderPricing, OrderTotals, ShippingMethod, ShippingSelection};
use crate::error::CommerceError;
use crate::money::Money;

/// Toast shown after a successful submission. No payment is taken.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderConfirmation {
    pub title: &'static str,
    pub message: &'static str,
    pub totals: OrderTotals,
    pub shipping: Option<ShippingSelection>,
    pub placed_at: DateTime<Utc>,
}

impl OrderConfirmation {
    pub const TITLE: &'static str = "Order Placed!";
    pub const MESSAGE: &'static str =
        "Thank you for your purchase. A confirmation has been sent to your email.";
}

/// Validate the form and total the order.
pub fn place_order(
    form: &CheckoutForm,
    subtotal: Money,
    pricing: &OrderPricing,
    methods: &[ShippingMethod],
) -> Result<OrderConfirmation, CommerceError> {
    form.validate()?;

    let selected = form.selected_method(methods)?;
    let totals = pricing.totals(subtotal, selected)?;
    tracing::info!(total = %totals.display_total(), "order placed");

    Ok(OrderConfirmation {
        title: OrderConfirmation::TITLE,
        message: OrderConfirmation::MESSAGE,
        totals,
        shipping: selected.map(ShippingSelection::from_method),
        placed_at: Utc::now(),
    })
}
