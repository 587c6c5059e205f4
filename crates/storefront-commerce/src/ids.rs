//! Newtype IDs for type-safe identifiers.
//!
//! Seed data mixes numeric ids (`1`, `2`) and slug ids (`prod1`); both are
//! carried as strings so the ledger and listing never care which kind they got.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<u32> for $name {
            fn from(n: u32) -> Self {
                Self(n.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifies a catalog entry and the cart line that holds it.
    ProductId
);
define_id!(
    /// Identifies a shipping option ("standard", "express").
    ShippingMethodId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("prod-123");
        assert_eq!(id.as_str(), "prod-123");
    }

    #[test]
    fn test_numeric_and_slug_ids_share_a_type() {
        let numeric: ProductId = 7u32.into();
        let slug: ProductId = "prod1".into();
        assert_eq!(numeric.as_str(), "7");
        assert_ne!(numeric, slug);
    }

    #[test]
    fn test_id_display() {
        let id = ShippingMethodId::new("express");
        assert_eq!(format!("{}", id), "express");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ProductId::new("12");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"12\"");
    }
}
