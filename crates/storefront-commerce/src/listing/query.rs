//! Sort orders for the product listing.

use crate::catalog::CatalogEntry;
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

/// Sort options for the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Most reviewed first (default).
    #[default]
    Popularity,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::Popularity, SortOrder::PriceAsc, SortOrder::PriceDesc];

    /// Key used in the sort dropdown and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Popularity => "popularity",
            SortOrder::PriceAsc => "price-asc",
            SortOrder::PriceDesc => "price-desc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOrder::Popularity => "Popularity",
            SortOrder::PriceAsc => "Price: Low to High",
            SortOrder::PriceDesc => "Price: High to Low",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|o| o.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CommerceError::UnknownSortOrder(s.to_string()))
    }
}

/// Stable sort of entries by the given order. Ties keep their input order.
pub fn sort(entries: &mut [&CatalogEntry], order: SortOrder) {
    match order {
        SortOrder::PriceAsc => entries.sort_by_key(|e| e.price.amount_cents),
        SortOrder::PriceDesc => entries.sort_by_key(|e| Reverse(e.price.amount_cents)),
        SortOrder::Popularity => entries.sort_by_key(|e| Reverse(e.review_count)),
    }
}
