//! Listing filter state owned by the product listing view.

use crate::catalog::CatalogEntry;
use crate::listing::{apply_filters, paginate, sort, Facet, ListingPage, Pagination, Selection, SortOrder};
use serde::{Deserialize, Serialize};

/// Breadcrumb label when the listing was not reached through a search.
pub const ALL_PRODUCTS: &str = "All Products";

/// User-selected filters, sort order and page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingState {
    categories: Selection,
    brands: Selection,
    sort_order: SortOrder,
    current_page: usize,
    search: Option<String>,
}

impl ListingState {
    /// Fresh state: no filters, popularity order, page 1.
    pub fn new() -> Self {
        Self {
            categories: Selection::new(),
            brands: Selection::new(),
            sort_order: SortOrder::default(),
            current_page: 1,
            search: None,
        }
    }

    /// Attach the search term the listing was opened with.
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        let trimmed = query.trim();
        self.search = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    /// Toggle a category checkbox. Always returns to page 1.
    pub fn toggle_category(&mut self, category: &str) {
        let selected = self.categories.toggle(category);
        self.current_page = 1;
        tracing::debug!(category, selected, "category filter toggled");
    }

    /// Toggle a brand checkbox. Always returns to page 1.
    pub fn toggle_brand(&mut self, brand: &str) {
        let selected = self.brands.toggle(brand);
        self.current_page = 1;
        tracing::debug!(brand, selected, "brand filter toggled");
    }

    /// Change the sort order. The current page is kept.
    pub fn set_sort(&mut self, order: SortOrder) {
        self.sort_order = order;
    }

    /// Jump to a page. Page 0 is treated as page 1; pages past the end are
    /// kept and render as an empty page.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// "Next" pager button: stays within `1..=total_pages`.
    pub fn next_page(&mut self, total_pages: usize) {
        self.current_page = self.current_page.saturating_add(1).min(total_pages.max(1));
    }

    /// "Previous" pager button: never goes below page 1.
    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    pub fn categories(&self) -> &Selection {
        &self.categories
    }

    pub fn brands(&self) -> &Selection {
        &self.brands
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Breadcrumb label: the search term, or "All Products".
    pub fn breadcrumb(&self) -> &str {
        self.search().unwrap_or(ALL_PRODUCTS)
    }

    /// Filter, sort and paginate the catalog.
    pub fn view<'a>(&self, catalog: &'a [CatalogEntry], page_size: usize) -> ListingPage<'a> {
        let mut matches = apply_filters(catalog, &self.categories, &self.brands);
        sort(&mut matches, self.sort_order);

        let items = paginate(&matches, self.current_page, page_size).to_vec();
        let pagination = Pagination::new(self.current_page, page_size, matches.len());
        tracing::debug!(
            matches = pagination.total,
            page = pagination.page,
            shown = items.len(),
            sort = %self.sort_order,
            "listing page built"
        );

        ListingPage {
            items,
            pagination,
            breadcrumb: self.breadcrumb().to_string(),
        }
    }

    /// Sidebar facets with per-value catalog counts and selection flags.
    pub fn facets(&self, catalog: &[CatalogEntry], categories: &[&str], brands: &[&str]) -> Vec<Facet> {
        let build = |name: &str, values: &[&str], selection: &Selection, key: fn(&CatalogEntry) -> &str| {
            let mut facet = Facet::new(name);
            for value in values {
                let count = catalog.iter().filter(|e| key(e) == *value).count();
                facet.add_value(*value, count, selection.contains(value));
            }
            facet
        };

        vec![
            build("Category", categories, &self.categories, |e| e.category.as_str()),
            build("Brand", brands, &self.brands, |e| e.brand.as_str()),
        ]
    }
}

impl Default for ListingState {
    fn default() -> Self {
        Self::new()
    }
}
