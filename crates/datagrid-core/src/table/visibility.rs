//! Column visibility state

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Hidden column ids. Columns are visible unless listed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnVisibility {
    hidden: BTreeSet<String>,
}

impl ColumnVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, column_id: &str) -> bool {
        !self.hidden.contains(column_id)
    }

    /// Returns true when the visibility actually changed
    pub fn set_visible(&mut self, column_id: &str, visible: bool) -> bool {
        if visible {
            self.hidden.remove(column_id)
        } else {
            self.hidden.insert(column_id.to_string())
        }
    }

    pub fn show_all(&mut self) {
        self.hidden.clear();
    }

    pub fn hidden_columns(&self) -> impl Iterator<Item = &str> {
        self.hidden.iter().map(String::as_str)
    }
}
