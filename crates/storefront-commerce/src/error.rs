//! Commerce error types.
//!
//! Missing ids and out-of-range pages are not errors here; they resolve to
//! no-ops and empty pages. These variants cover input that cannot be
//! interpreted at all.

use crate::checkout::ValidationErrors;
use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Invalid quantity for an add-to-cart request.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity outside the selector's range.
    #[error("Quantity {value} is outside the allowed range {min}..={max}")]
    QuantityOutOfRange { value: i64, min: i64, max: i64 },

    /// Unknown sort key.
    #[error("Unknown sort order: {0}")]
    UnknownSortOrder(String),

    /// Unknown shipping method.
    #[error("Unknown shipping method: {0}")]
    UnknownShippingMethod(String),

    /// Malformed cart action.
    #[error("Invalid cart action: {0}")]
    InvalidCartAction(String),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Checkout form failed validation.
    #[error("Checkout form is invalid: {0}")]
    InvalidForm(#[from] ValidationErrors),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}
