//! Search module.
//!
//! Contains the search box state and label-matching suggestions.

mod suggest;

pub use suggest::{suggest, SearchBox, Suggestion, SuggestionGroup};
