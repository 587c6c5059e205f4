//! Shipping method types.

use crate::error::CommerceError;
use crate::ids::ShippingMethodId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A shipping method option.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingMethod {
    /// Unique identifier ("standard", "express").
    pub id: ShippingMethodId,
    /// Display name.
    pub name: String,
    /// Shipping price.
    pub price: Money,
    /// Minimum delivery days.
    pub min_delivery_days: Option<u32>,
    /// Maximum delivery days.
    pub max_delivery_days: Option<u32>,
}

impl ShippingMethod {
    /// Create a new shipping method.
    pub fn new(id: impl Into<ShippingMethodId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            min_delivery_days: None,
            max_delivery_days: None,
        }
    }

    /// Set the delivery window in business days.
    pub fn with_delivery_days(mut self, min: u32, max: u32) -> Self {
        self.min_delivery_days = Some(min);
        self.max_delivery_days = Some(max);
        self
    }

    /// Get delivery estimate string.
    pub fn delivery_estimate(&self) -> Option<String> {
        match (self.min_delivery_days, self.max_delivery_days) {
            (Some(min), Some(max)) if min == max => Some(format!("{} business days", min)),
            (Some(min), Some(max)) => Some(format!("{}-{} business days", min, max)),
            (Some(min), None) => Some(format!("{}+ business days", min)),
            (None, Some(max)) => Some(format!("Up to {} business days", max)),
            (None, None) => None,
        }
    }

    /// Check if this is free shipping.
    pub fn is_free(&self) -> bool {
        self.price.is_zero()
    }

    /// Radio-button label (e.g., "Standard Shipping (4-6 business days) $5.99").
    pub fn label(&self) -> String {
        match self.delivery_estimate() {
            Some(estimate) => format!("{} ({}) {}", self.name, estimate, self.price.display()),
            None => format!("{} {}", self.name, self.price.display()),
        }
    }

    /// Standard and express shipping, as offered at checkout.
    pub fn defaults(currency: Currency) -> Vec<ShippingMethod> {
        vec![
            ShippingMethod::new("standard", "Standard Shipping", Money::new(599, currency))
                .with_delivery_days(4, 6),
            ShippingMethod::new("express", "Express Shipping", Money::new(1599, currency))
                .with_delivery_days(1, 2),
        ]
    }

    /// Look up a method by id.
    pub fn find<'a>(methods: &'a [ShippingMethod], id: &str) -> Result<&'a ShippingMethod, CommerceError> {
        methods
            .iter()
            .find(|m| m.id.as_str() == id)
            .ok_or_else(|| CommerceError::UnknownShippingMethod(id.to_string()))
    }
}

/// A selected shipping method with rate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingSelection {
    /// Selected method ID.
    pub method_id: ShippingMethodId,
    /// Method name (denormalized).
    pub method_name: String,
    /// Rate charged.
    pub rate: Money,
    /// Delivery estimate.
    pub delivery_estimate: Option<String>,
}

impl ShippingSelection {
    /// Create from a shipping method.
    pub fn from_method(method: &ShippingMethod) -> Self {
        Self {
            method_id: method.id.clone(),
            method_name: method.name.clone(),
            rate: method.price,
            delivery_estimate: method.delivery_estimate(),
        }
    }
}
