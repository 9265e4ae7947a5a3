//! Row selection keyed by the row's index in the source data

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSelection {
    selected: BTreeSet<usize>,
}

impl RowSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, row: usize) -> bool {
        self.selected.contains(&row)
    }

    pub fn set_selected(&mut self, row: usize, selected: bool) {
        if selected {
            self.selected.insert(row);
        } else {
            self.selected.remove(&row);
        }
    }

    /// Flip one row, returning its new state
    pub fn toggle(&mut self, row: usize) -> bool {
        let selected = !self.is_selected(row);
        self.set_selected(row, selected);
        selected
    }

    /// Select or deselect every row in `rows`
    pub fn set_all(&mut self, rows: &[usize], selected: bool) {
        for &row in rows {
            self.set_selected(row, selected);
        }
    }

    /// True when `rows` is non-empty and every row in it is selected
    pub fn all_selected(&self, rows: &[usize]) -> bool {
        !rows.is_empty() && rows.iter().all(|row| self.is_selected(*row))
    }

    /// True when some, but not all, rows in `rows` are selected
    pub fn some_selected(&self, rows: &[usize]) -> bool {
        rows.iter().any(|row| self.is_selected(*row)) && !self.all_selected(rows)
    }

    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.iter().copied()
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
