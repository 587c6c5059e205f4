//! Product detail page state: gallery selection and quantity picker.

use crate::catalog::CatalogEntry;
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Image shown when a product has no gallery images.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/500x500.png?text=Product+Image";

/// Smallest selectable quantity.
pub const MIN_QUANTITY: i64 = 1;

/// Largest selectable quantity.
pub const MAX_QUANTITY: i64 = 5;

/// Stock badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StockStatus {
    #[default]
    InStock,
    OutOfStock,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }
}

/// One gallery image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

impl GalleryImage {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// Everything the product page shows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDetail {
    /// The underlying catalog record.
    pub entry: CatalogEntry,
    /// Long description.
    pub description: String,
    /// Specification rows (label, value).
    pub specifications: Vec<(String, String)>,
    /// Gallery images.
    pub images: Vec<GalleryImage>,
    /// Stock badge.
    pub stock: StockStatus,
}

impl ProductDetail {
    /// Start a gallery over this product's images.
    pub fn gallery(&self) -> Gallery {
        Gallery::new(self.images.clone())
    }
}

/// Image gallery with one selected image.
///
/// Never empty: a product without images gets a single placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<GalleryImage>,
    selected: usize,
}

impl Gallery {
    /// Create a gallery, selecting the first image.
    pub fn new(images: Vec<GalleryImage>) -> Self {
        let images = if images.is_empty() {
            vec![GalleryImage::new(PLACEHOLDER_IMAGE, "Product image placeholder")]
        } else {
            images
        };
        Self {
            images,
            selected: 0,
        }
    }

    /// Select an image by index. Out-of-range indices are ignored.
    ///
    /// Returns whether the selection changed.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.images.len() || index == self.selected {
            return false;
        }
        tracing::debug!(from = self.selected, to = index, "gallery selection changed");
        self.selected = index;
        true
    }

    /// The image in the main display.
    pub fn selected(&self) -> &GalleryImage {
        &self.images[self.selected]
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    /// Thumbnails are only shown when there is something to switch to.
    pub fn shows_thumbnails(&self) -> bool {
        self.images.len() > 1
    }
}

/// Quantity dropdown on the product page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantitySelector {
    value: i64,
}

impl QuantitySelector {
    pub fn new() -> Self {
        Self {
            value: MIN_QUANTITY,
        }
    }

    /// Options offered by the dropdown.
    pub fn options() -> impl Iterator<Item = i64> {
        MIN_QUANTITY..=MAX_QUANTITY
    }

    /// Choose a quantity from the dropdown.
    pub fn set(&mut self, value: i64) -> Result<(), CommerceError> {
        if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&value) {
            return Err(CommerceError::QuantityOutOfRange {
                value,
                min: MIN_QUANTITY,
                max: MAX_QUANTITY,
            });
        }
        self.value = value;
        Ok(())
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Confirmation text after "Add to Cart".
    pub fn added_message(&self) -> String {
        format!("Added {} item(s) to your cart.", self.value)
    }
}

impl Default for QuantitySelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<GalleryImage> {
        (0..n)
            .map(|i| GalleryImage::new(format!("img-{i}.jpg"), format!("image {i}")))
            .collect()
    }

    #[test]
    fn test_gallery_starts_on_first_image() {
        let gallery = Gallery::new(images(3));
        assert_eq!(gallery.selected_index(), 0);
        assert_eq!(gallery.selected().src, "img-0.jpg");
        assert!(gallery.shows_thumbnails());
    }

    #[test]
    fn test_gallery_select() {
        let mut gallery = Gallery::new(images(3));
        assert!(gallery.select(2));
        assert_eq!(gallery.selected().src, "img-2.jpg");
        assert!(!gallery.select(2));
    }

    #[test]
    fn test_gallery_ignores_out_of_range() {
        let mut gallery = Gallery::new(images(2));
        assert!(!gallery.select(5));
        assert_eq!(gallery.selected_index(), 0);
    }

    #[test]
    fn test_empty_gallery_gets_placeholder() {
        let gallery = Gallery::new(Vec::new());
        assert_eq!(gallery.images().len(), 1);
        assert_eq!(gallery.selected().src, PLACEHOLDER_IMAGE);
        assert!(!gallery.shows_thumbnails());
    }

    #[test]
    fn test_quantity_selector_range() {
        let mut qty = QuantitySelector::new();
        assert_eq!(qty.value(), 1);
        assert!(qty.set(5).is_ok());
        assert_eq!(qty.added_message(), "Added 5 item(s) to your cart.");
        assert!(qty.set(0).is_err());
        assert!(qty.set(6).is_err());
        assert_eq!(qty.value(), 5);
        assert_eq!(QuantitySelector::options().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }
}
