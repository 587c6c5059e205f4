//! Search-as-you-type suggestions.

use serde::{Deserialize, Serialize};

/// A suggestion offered under the search box.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Suggestion {
    /// Slug (e.g., "gaming-laptop").
    pub value: String,
    /// Text matched against and shown (e.g., "Gaming Laptop").
    pub label: String,
    /// Heading the suggestion is listed under.
    pub group: String,
}

impl Suggestion {
    pub fn new(value: impl Into<String>, label: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            group: group.into(),
        }
    }
}

/// Suggestions sharing a heading.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SuggestionGroup<'a> {
    pub group: &'a str,
    pub suggestions: Vec<&'a Suggestion>,
}

/// Suggestions whose label contains the query, ignoring case.
///
/// An empty query matches nothing. Groups appear in the order their first
/// match appears in `source`.
pub fn suggest<'a>(source: &'a [Suggestion], query: &str) -> Vec<SuggestionGroup<'a>> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    let mut groups: Vec<SuggestionGroup<'a>> = Vec::new();
    for suggestion in source
        .iter()
        .filter(|s| s.label.to_lowercase().contains(&needle))
    {
        match groups.iter_mut().find(|g| g.group == suggestion.group) {
            Some(group) => group.suggestions.push(suggestion),
            None => groups.push(SuggestionGroup {
                group: &suggestion.group,
                suggestions: vec![suggestion],
            }),
        }
    }
    groups
}

/// Search box state: typed text and whether the dropdown is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBox {
    input: String,
    open: bool,
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Focusing the input opens the dropdown.
    pub fn focus(&mut self) {
        self.open = true;
    }

    /// A click outside the box closes the dropdown.
    pub fn dismiss(&mut self) {
        self.open = false;
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Groups to draw, empty when the dropdown is closed.
    pub fn visible<'a>(&self, source: &'a [Suggestion]) -> Vec<SuggestionGroup<'a>> {
        if !self.open {
            return Vec::new();
        }
        suggest(source, &self.input)
    }

    /// Pick a suggestion: fills the input, closes the dropdown, and returns
    /// the search term to open the listing with.
    pub fn select(&mut self, label: &str) -> String {
        self.input = label.to_string();
        self.open = false;
        tracing::info!(query = label, "search submitted");
        self.input.clone()
    }

    /// Submit the form. Blank input does nothing.
    pub fn submit(&mut self) -> Option<String> {
        if self.input.trim().is_empty() {
            return None;
        }
        let input = self.input.clone();
        Some(self.select(&input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed;

    fn labels(groups: &[SuggestionGroup<'_>]) -> Vec<(String, Vec<String>)> {
        groups
            .iter()
            .map(|g| {
                (
                    g.group.to_string(),
                    g.suggestions.iter().map(|s| s.label.clone()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        assert!(suggest(&seed::suggestions(), "").is_empty());
    }

    #[test]
    fn test_case_insensitive_match() {
        let source = seed::suggestions();
        let groups = suggest(&source, "LAPTOP");
        assert_eq!(
            labels(&groups),
            vec![("Laptops".to_string(), vec!["Gaming Laptop".to_string()])]
        );
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let source = seed::suggestions();
        let groups = suggest(&source, "o");
        let names: Vec<_> = groups.iter().map(|g| g.group).collect();
        assert_eq!(names, vec!["Laptops", "Accessories", "Monitors", "Audio", "Mobile"]);
        let laptops = groups.iter().find(|g| g.group == "Laptops").unwrap();
        assert_eq!(laptops.suggestions.len(), 3);
    }

    #[test]
    fn test_no_match() {
        assert!(suggest(&seed::suggestions(), "toaster").is_empty());
    }

    #[test]
    fn test_search_box_visibility() {
        let source = seed::suggestions();
        let mut search = SearchBox::new();
        search.set_input("mouse");
        assert!(search.visible(&source).is_empty());

        search.focus();
        assert_eq!(search.visible(&source).len(), 1);

        search.dismiss();
        assert!(search.visible(&source).is_empty());
    }

    #[test]
    fn test_select_and_submit() {
        let mut search = SearchBox::new();
        search.focus();
        assert_eq!(search.select("Webcam"), "Webcam");
        assert!(!search.is_open());
        assert_eq!(search.input(), "Webcam");

        search.set_input("   ");
        assert_eq!(search.submit(), None);

        search.set_input("usb hub");
        assert_eq!(search.submit().as_deref(), Some("usb hub"));
    }
}
