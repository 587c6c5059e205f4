//! Product listing module.
//!
//! Filtering by category and brand, sorting, pagination, and the state
//! object the listing view owns.

mod filter;
mod query;
mod results;
mod state;

pub use filter::{apply_filters, Selection};
pub use query::{sort, SortOrder};
pub use results::{paginate, Facet, FacetValue, ListingPage, Pagination, DEFAULT_PAGE_SIZE};
pub use state::{ListingState, ALL_PRODUCTS};
