//! Storefront domain types and logic.
//!
//! This crate holds everything the storefront computes, with no rendering:
//!
//! - **Catalog**: Catalog entries, the product detail page, seed data
//! - **Cart**: The cart ledger and its pricing snapshot
//! - **Listing**: Category/brand filters, sorting, pagination
//! - **Search**: Search box state and grouped suggestions
//! - **Checkout**: Shipping methods, order totals, form validation
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let mut cart = Cart::with_entries(&seed::cart_lines()).unwrap();
//! cart.increment(&ProductId::new("2"));
//!
//! let subtotal = cart.subtotal().unwrap();
//! assert_eq!(subtotal.display(), "$1659.97");
//!
//! let totals = OrderPricing::default().totals(subtotal, None).unwrap();
//! println!("Total: {}", totals.display_total());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;
pub mod checkout;
pub mod listing;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        seed, CatalogEntry, Gallery, GalleryImage, ProductDetail, QuantitySelector, StarRating,
        StockStatus,
    };

    // Cart
    pub use crate::cart::{Cart, CartAction, CartPricing, LineItem, LineItemPricing};

    // Listing
    pub use crate::listing::{
        apply_filters, paginate, sort, ListingPage, ListingState, Pagination, Selection,
        SortOrder, DEFAULT_PAGE_SIZE,
    };

    // Search
    pub use crate::search::{suggest, SearchBox, Suggestion, SuggestionGroup};

    // Checkout
    pub use crate::checkout::{
        compute_totals, place_order, CheckoutForm, OrderConfirmation, OrderPricing, OrderTotals,
        ShippingMethod, ShippingPolicy, ValidationErrors,
    };
}
