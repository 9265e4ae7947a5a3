//! Multi-select editor over a column's distinct values

use std::collections::{BTreeMap, BTreeSet};

use datagrid_core::FilterValue;
use serde::Serialize;

use crate::icons::IconName;

/// One row of the option list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextOption {
    pub value: String,
    pub count: usize,
    pub selected: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TextFilter {
    /// Distinct values with counts, sorted lexicographically
    options: Vec<(String, usize)>,
    selected: BTreeSet<String>,
    search: String,
}

impl TextFilter {
    pub const SEARCH_PLACEHOLDER: &'static str = "Search values...";
    pub const EMPTY_MESSAGE: &'static str = "No results found.";

    /// Editor seeded with the facet map and the committed selection
    pub fn new(facets: &BTreeMap<String, usize>, committed: Option<&FilterValue>) -> Self {
        let selected = match committed {
            Some(FilterValue::Text(values)) => values.clone(),
            _ => BTreeSet::new(),
        };
        Self {
            options: Vec::new(),
            selected,
            search: String::new(),
        }
        .with_facets(facets)
    }

    fn with_facets(mut self, facets: &BTreeMap<String, usize>) -> Self {
        self.set_facets(facets);
        self
    }

    /// Replace the option list, keeping the pending selection
    pub fn set_facets(&mut self, facets: &BTreeMap<String, usize>) {
        self.options = facets.iter().map(|(v, c)| (v.clone(), *c)).collect();
    }

    pub fn options(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|(value, _)| value.as_str())
    }

    pub fn selected(&self) -> &BTreeSet<String> {
        &self.selected
    }

    /// Add or remove one value. Returns the new pending value.
    pub fn toggle(&mut self, value: &str) -> Option<FilterValue> {
        if !self.selected.remove(value) {
            self.selected.insert(value.to_string());
        }
        tracing::trace!(value, selected = self.selected.len(), "Text filter toggled");
        self.value()
    }

    /// True when every option is selected
    pub fn all_selected(&self) -> bool {
        !self.options.is_empty()
            && self
                .options
                .iter()
                .all(|(value, _)| self.selected.contains(value))
    }

    /// Select every option, or clear the selection when all are selected
    pub fn select_all(&mut self) -> Option<FilterValue> {
        if self.all_selected() {
            self.selected.clear();
        } else {
            self.selected = self.options.iter().map(|(value, _)| value.clone()).collect();
        }
        self.value()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Pending value, `None` when nothing is selected
    pub fn value(&self) -> Option<FilterValue> {
        FilterValue::text(self.selected.iter().cloned())
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Narrow the displayed options. Does not change the pending value.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Options matching the search text
    pub fn visible_options(&self) -> Vec<TextOption> {
        let query = self.search.to_lowercase();
        self.options
            .iter()
            .filter(|(value, _)| query.is_empty() || value.to_lowercase().contains(&query))
            .map(|(value, count)| TextOption {
                value: value.clone(),
                count: *count,
                selected: self.selected.contains(value),
            })
            .collect()
    }

    /// Message shown instead of the option list when nothing matches
    pub fn empty_message(&self) -> Option<&'static str> {
        self.visible_options()
            .is_empty()
            .then_some(Self::EMPTY_MESSAGE)
    }

    /// Checkbox glyph of the Select All button
    pub fn select_all_icon(&self) -> IconName {
        if self.all_selected() {
            IconName::CheckSquare
        } else {
            IconName::Square
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn facets(values: &[(&str, usize)]) -> BTreeMap<String, usize> {
        values.iter().map(|(v, c)| (v.to_string(), *c)).collect()
    }

    fn abc() -> TextFilter {
        TextFilter::new(&facets(&[("c", 1), ("a", 2), ("b", 3)]), None)
    }

    #[test]
    fn test_options_are_sorted() {
        let filter = abc();
        assert_eq!(filter.options().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_toggle_emits_none_when_selection_empties() {
        let mut filter = abc();
        assert_eq!(filter.toggle("a"), FilterValue::text(["a"]));
        assert_eq!(filter.toggle("a"), None);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut filter = abc();
        filter.toggle("b");
        let before = filter.value();

        for value in ["a", "b", "z"] {
            filter.toggle(value);
            filter.toggle(value);
            assert_eq!(filter.value(), before);
        }
    }

    #[test]
    fn test_select_all_round_trip() {
        let mut filter = abc();
        filter.toggle("a");
        assert_eq!(filter.toggle("b"), FilterValue::text(["a", "b"]));
        assert_eq!(filter.select_all(), FilterValue::text(["a", "b", "c"]));
        assert_eq!(filter.select_all_icon(), IconName::CheckSquare);
        assert_eq!(filter.select_all(), None);
        assert_eq!(filter.select_all_icon(), IconName::Square);
    }

    #[test]
    fn test_select_all_without_options_stays_empty() {
        let mut filter = TextFilter::new(&BTreeMap::new(), None);
        assert_eq!(filter.select_all(), None);
        assert_eq!(filter.select_all(), None);
    }

    #[test]
    fn test_search_only_narrows_displayed_options() {
        let mut filter = TextFilter::new(
            &facets(&[("pending", 1), ("processing", 1), ("success", 2)]),
            FilterValue::text(["success"]).as_ref(),
        );
        filter.set_search("P");

        let visible: Vec<_> = filter
            .visible_options()
            .into_iter()
            .map(|o| o.value)
            .collect();
        assert_eq!(visible, vec!["pending", "processing"]);
        assert_eq!(filter.value(), FilterValue::text(["success"]));

        filter.set_search("zzz");
        assert_eq!(filter.empty_message(), Some(TextFilter::EMPTY_MESSAGE));
    }

    #[test]
    fn test_visible_options_carry_counts_and_selection() {
        let filter = TextFilter::new(
            &facets(&[("failed", 1), ("success", 2)]),
            FilterValue::text(["success"]).as_ref(),
        );
        assert_eq!(
            filter.visible_options(),
            vec![
                TextOption {
                    value: "failed".to_string(),
                    count: 1,
                    selected: false
                },
                TextOption {
                    value: "success".to_string(),
                    count: 2,
                    selected: true
                },
            ]
        );
    }
}
