//! Listing pages, pagination and sidebar facets.

use crate::catalog::CatalogEntry;
use serde::{Deserialize, Serialize};

/// Products shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Return the slice for a 1-indexed page.
///
/// A page past the end (or page 0) yields an empty slice rather than
/// snapping back to the last page.
pub fn paginate<T>(entries: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = match (page - 1).checked_mul(page_size) {
        Some(start) if start < entries.len() => start,
        _ => return &[],
    };
    let end = start.saturating_add(page_size).min(entries.len());
    &entries[start..end]
}

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of matching items.
    pub total: usize,
    /// Total number of pages; 0 when nothing matches.
    pub total_pages: usize,
}

impl Pagination {
    /// Create pagination info.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let total_pages = if per_page == 0 {
            0
        } else {
            total.div_ceil(per_page)
        };
        Self {
            page,
            per_page,
            total,
            total_pages,
        }
    }

    /// Whether there's a next page.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether there's a previous page.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// The pager is only drawn when there is more than one page.
    pub fn shows_pager(&self) -> bool {
        self.total_pages > 1
    }

    /// Pager label (e.g., "Page 1 of 2").
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE, 0)
    }
}

/// One rendered page of the listing.
#[derive(Debug, Clone, Serialize)]
pub struct ListingPage<'a> {
    /// Entries on this page, in display order.
    pub items: Vec<&'a CatalogEntry>,
    /// Pagination info.
    pub pagination: Pagination,
    /// Breadcrumb label.
    pub breadcrumb: String,
}

impl<'a> ListingPage<'a> {
    /// Check if empty ("No Products Found").
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Result count line (e.g., "Showing 8 of 12 results").
    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {} results",
            self.items.len(),
            self.pagination.total
        )
    }
}

/// A sidebar facet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Facet {
    /// Facet name (e.g., "Category", "Brand").
    pub name: String,
    /// Facet values.
    pub values: Vec<FacetValue>,
}

impl Facet {
    /// Create a new facet with no values.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// Add a value to the facet.
    pub fn add_value(&mut self, value: impl Into<String>, count: usize, selected: bool) {
        self.values.push(FacetValue {
            value: value.into(),
            count,
            selected,
        });
    }
}

/// A single facet value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FacetValue {
    /// The value.
    pub value: String,
    /// Number of catalog entries with this value.
    pub count: usize,
    /// Whether currently selected.
    pub selected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_twelve_by_eight() {
        let items: Vec<u32> = (1..=12).collect();
        assert_eq!(paginate(&items, 1, 8), &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(paginate(&items, 2, 8), &[9, 10, 11, 12]);
        assert!(paginate(&items, 3, 8).is_empty());
    }

    #[test]
    fn test_paginate_degenerate_inputs() {
        let items: Vec<u32> = (1..=3).collect();
        assert!(paginate(&items, 0, 8).is_empty());
        assert!(paginate(&items, 1, 0).is_empty());
        assert!(paginate(&items, usize::MAX, 8).is_empty());
        assert!(paginate::<u32>(&[], 1, 8).is_empty());
    }

    #[test]
    fn test_pagination_counts() {
        let p = Pagination::new(1, 8, 12);
        assert_eq!(p.total_pages, 2);
        assert!(p.has_next());
        assert!(!p.has_prev());
        assert!(p.shows_pager());
        assert_eq!(p.label(), "Page 1 of 2");
    }

    #[test]
    fn test_pagination_single_or_empty() {
        let p = Pagination::new(1, 8, 5);
        assert_eq!(p.total_pages, 1);
        assert!(!p.shows_pager());

        let p = Pagination::new(1, 8, 0);
        assert_eq!(p.total_pages, 0);
        assert!(!p.has_next());
    }

    #[test]
    fn test_facet_values() {
        let mut facet = Facet::new("Brand");
        facet.add_value("Brand A", 3, true);
        assert_eq!(facet.values.len(), 1);
        assert!(facet.values[0].selected);
    }
}
