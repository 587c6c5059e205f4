//! Product catalog module.
//!
//! Contains catalog entries, the product detail page state, and the seed data.

mod detail;
mod product;
pub mod seed;

pub use detail::{
    Gallery, GalleryImage, ProductDetail, QuantitySelector, StockStatus, MAX_QUANTITY,
    MIN_QUANTITY, PLACEHOLDER_IMAGE,
};
pub use product::{CatalogEntry, StarRating, ADDED_TO_CART_TITLE, MAX_STARS};

use crate::error::CommerceError;
use crate::ids::ProductId;

/// Find an entry by id.
pub fn find<'a>(catalog: &'a [CatalogEntry], id: &ProductId) -> Result<&'a CatalogEntry, CommerceError> {
    catalog
        .iter()
        .find(|e| &e.id == id)
        .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
}
