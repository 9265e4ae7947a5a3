//! Global search state
//!
//! The query lives outside the table state. Every component that reads or
//! writes it takes a `&GlobalSearch` / `&mut GlobalSearch` parameter.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSearch {
    query: String,
}

impl GlobalSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        tracing::trace!(query = %self.query, "Global search changed");
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    /// Case-insensitive substring match. An empty query matches everything.
    pub fn matches_text(&self, text: &str) -> bool {
        self.query.is_empty() || text.to_lowercase().contains(&self.query.to_lowercase())
    }
}
