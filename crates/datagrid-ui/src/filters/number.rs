//! Minimum / maximum editor for numeric columns
//!
//! Both fields keep the raw text the user typed so partial input such as
//! `-` or `1.` survives between keystrokes.

use datagrid_core::{FilterValue, NumberRange};

use crate::format_number;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberFilter {
    min: String,
    max: String,
}

impl NumberFilter {
    pub const MIN_LABEL: &'static str = "Minimum";
    pub const MAX_LABEL: &'static str = "Maximum";

    /// Editor seeded from the committed range; open bounds show as empty
    pub fn new(committed: Option<&FilterValue>) -> Self {
        match committed {
            Some(FilterValue::Number(range)) => Self {
                min: range.lower().map(format_number).unwrap_or_default(),
                max: range.upper().map(format_number).unwrap_or_default(),
            },
            _ => Self::default(),
        }
    }

    pub fn min(&self) -> &str {
        &self.min
    }

    pub fn max(&self) -> &str {
        &self.max
    }

    pub fn set_min(&mut self, text: impl Into<String>) -> Option<FilterValue> {
        self.min = text.into();
        tracing::trace!(min = %self.min, "Number filter minimum edited");
        self.value()
    }

    pub fn set_max(&mut self, text: impl Into<String>) -> Option<FilterValue> {
        self.max = text.into();
        tracing::trace!(max = %self.max, "Number filter maximum edited");
        self.value()
    }

    pub fn clear(&mut self) {
        self.min.clear();
        self.max.clear();
    }

    /// Pending range. Fields that are empty or not a number are open bounds;
    /// `None` when both are open.
    pub fn value(&self) -> Option<FilterValue> {
        NumberRange::from_bounds(parse_bound(&self.min), parse_bound(&self.max))
            .map(FilterValue::Number)
    }
}

fn parse_bound(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}
