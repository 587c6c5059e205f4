//! Category and brand filters.

use crate::catalog::CatalogEntry;
use serde::{Deserialize, Serialize};

/// A set of selected facet values, kept in selection order.
///
/// An empty selection means "no restriction".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(Vec<String>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the value if absent, remove it if present.
    ///
    /// Returns whether the value is selected afterwards.
    pub fn toggle(&mut self, value: &str) -> bool {
        if let Some(pos) = self.0.iter().position(|v| v == value) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(value.to_string());
            true
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Whether a value passes this filter.
    pub fn admits(&self, value: &str) -> bool {
        self.is_empty() || self.contains(value)
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for value in iter {
            let value = value.into();
            if !selection.contains(&value) {
                selection.0.push(value);
            }
        }
        selection
    }
}

/// Keep the entries whose category and brand pass both selections.
///
/// Catalog order is preserved.
pub fn apply_filters<'a>(
    catalog: &'a [CatalogEntry],
    categories: &Selection,
    brands: &Selection,
) -> Vec<&'a CatalogEntry> {
    catalog
        .iter()
        .filter(|e| categories.admits(&e.category) && brands.admits(&e.brand))
        .collect()
}
