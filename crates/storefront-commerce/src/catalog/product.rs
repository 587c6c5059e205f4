//! Catalog entry type and rating display helpers.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Number of stars in a rating row.
pub const MAX_STARS: u8 = 5;

/// Toast title shown after "Add to Cart" on a product card.
pub const ADDED_TO_CART_TITLE: &str = "Item Added to Cart";

/// A product record in the read-only catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Unit price.
    pub price: Money,
    /// Image shown on cards and cart lines.
    pub image_url: String,
    /// Average rating, 0.0 to 5.0.
    pub rating: f32,
    /// Number of reviews; drives popularity sorting.
    pub review_count: u32,
    /// Category name (e.g., "Laptops").
    pub category: String,
    /// Brand name (e.g., "Brand A").
    pub brand: String,
    /// Display-only badge. Not used by filtering or sorting.
    #[serde(default)]
    pub is_best_seller: bool,
}

impl CatalogEntry {
    /// Create an entry with no rating, category or brand.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            image_url: String::new(),
            rating: 0.0,
            review_count: 0,
            category: String::new(),
            brand: String::new(),
            is_best_seller: false,
        }
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Set rating and review count.
    pub fn with_rating(mut self, rating: f32, review_count: u32) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    /// Mark as a best seller.
    pub fn best_seller(mut self) -> Self {
        self.is_best_seller = true;
        self
    }

    /// Star breakdown for this entry's rating.
    pub fn stars(&self) -> StarRating {
        StarRating::from_rating(self.rating)
    }

    /// Confirmation shown after adding this entry from a product card.
    pub fn added_to_cart_message(&self) -> String {
        format!("{} has been successfully added to your cart.", self.title)
    }
}

/// How a rating renders as a row of stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarRating {
    /// Break a rating into full, half and empty stars.
    ///
    /// Any fractional part shows as one half star. Ratings outside
    /// `0..=5` are clamped so the row always has [`MAX_STARS`] stars.
    pub fn from_rating(rating: f32) -> Self {
        let rating = if rating.is_nan() {
            0.0
        } else {
            rating.clamp(0.0, MAX_STARS as f32)
        };
        let full = rating.floor() as u8;
        let half = rating.fract() > 0.0;
        let empty = MAX_STARS - full - u8::from(half);
        Self { full, half, empty }
    }

    /// Render as text (e.g., "★★★★½").
    pub fn render(&self) -> String {
        let mut s = "\u{2605}".repeat(self.full as usize);
        if self.half {
            s.push('\u{00bd}');
        }
        s.push_str(&"\u{2606}".repeat(self.empty as usize));
        s
    }
}
