//! Tabular state: column filters, sorting, facets, visibility, pagination and
//! row selection over an in-memory row set.
//!
//! Row models and facet maps are derived on every call from the current
//! state; nothing is cached, so there is nothing to invalidate.

mod pagination;
mod selection;
mod sorting;
mod visibility;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::column::ColumnDef;
use crate::error::{GridError, Result};
use crate::filter::{ColumnFilter, FilterValue};
use crate::search::GlobalSearch;
use crate::types::RowData;

pub use pagination::PaginationState;
pub use selection::RowSelection;
pub use sorting::{ColumnSort, SortDirection, SortingState, compare_non_null_values};
pub use visibility::ColumnVisibility;

/// Everything the user can change about a table, apart from the global search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableState {
    pub sorting: SortingState,
    /// Active column filters, in the order they were first applied
    pub column_filters: Vec<ColumnFilter>,
    pub visibility: ColumnVisibility,
    pub pagination: PaginationState,
    pub selection: RowSelection,
}

/// Rows plus column definitions plus state
#[derive(Debug, Clone)]
pub struct Table<R> {
    columns: Vec<ColumnDef>,
    rows: Vec<R>,
    search_column: Option<String>,
    state: TableState,
}

impl<R: RowData> Table<R> {
    pub fn new(columns: Vec<ColumnDef>, rows: Vec<R>) -> Self {
        Self {
            columns,
            rows,
            search_column: None,
            state: TableState::default(),
        }
    }

    /// Restrict the global search to one column
    pub fn with_search_column(mut self, column_id: Option<String>) -> Self {
        self.search_column = column_id;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.state.pagination = PaginationState::new(page_size);
        self
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    pub fn column(&self, column_id: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    fn require_column(&self, column_id: &str) -> Result<&ColumnDef> {
        self.column(column_id)
            .ok_or_else(|| GridError::UnknownColumn(column_id.to_string()))
    }

    pub fn visible_columns(&self) -> impl Iterator<Item = &ColumnDef> {
        self.columns
            .iter()
            .filter(|c| self.state.visibility.is_visible(&c.id))
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&R> {
        self.rows.get(index)
    }

    pub fn search_column(&self) -> Option<&str> {
        self.search_column.as_deref()
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    // ---- column filters ----

    pub fn column_filters(&self) -> &[ColumnFilter] {
        &self.state.column_filters
    }

    pub fn filter_value(&self, column_id: &str) -> Option<&FilterValue> {
        self.state
            .column_filters
            .iter()
            .find(|f| f.column_id == column_id)
            .map(|f| &f.value)
    }

    pub fn is_filtered(&self, column_id: &str) -> bool {
        self.filter_value(column_id).is_some()
    }

    /// Commit a filter value, or remove the column's filter with `None`.
    /// Resets pagination to the first page.
    pub fn set_filter_value(&mut self, column_id: &str, value: Option<FilterValue>) -> Result<()> {
        let column = self.require_column(column_id)?;
        let Some(expected) = column.filter_kind else {
            tracing::warn!(column = column_id, "Rejected filter on non-filterable column");
            return Err(GridError::NotFilterable(column_id.to_string()));
        };

        match value {
            Some(value) => {
                if value.kind() != expected {
                    tracing::warn!(
                        column = column_id,
                        expected = expected.label(),
                        actual = value.kind().label(),
                        "Rejected filter with mismatched kind"
                    );
                    return Err(GridError::KindMismatch {
                        column: column_id.to_string(),
                        expected,
                        actual: value.kind(),
                    });
                }
                tracing::debug!(column = column_id, value = ?value, "Column filter committed");
                match self
                    .state
                    .column_filters
                    .iter_mut()
                    .find(|f| f.column_id == column_id)
                {
                    Some(existing) => existing.value = value,
                    None => self
                        .state
                        .column_filters
                        .push(ColumnFilter::new(column_id, value)),
                }
            }
            None => {
                tracing::debug!(column = column_id, "Column filter cleared");
                self.state.column_filters.retain(|f| f.column_id != column_id);
            }
        }
        self.state.pagination.first();
        Ok(())
    }

    pub fn reset_column_filters(&mut self) {
        tracing::debug!(
            count = self.state.column_filters.len(),
            "Column filters reset"
        );
        self.state.column_filters.clear();
        self.state.pagination.first();
    }

    // ---- sorting ----

    pub fn sorting(&self) -> &SortingState {
        &self.state.sorting
    }

    pub fn sort_direction(&self, column_id: &str) -> Option<SortDirection> {
        self.state.sorting.direction(column_id)
    }

    /// Advance the sort of one column (unsorted -> asc -> desc -> unsorted).
    /// Non-sortable columns are left untouched.
    pub fn toggle_sorting(&mut self, column_id: &str, multi: bool) -> Result<Option<SortDirection>> {
        let column = self.require_column(column_id)?;
        if !column.can_sort() {
            return Ok(None);
        }
        let direction = self.state.sorting.toggle(column_id, multi);
        tracing::debug!(column = column_id, direction = ?direction, multi, "Sorting toggled");
        Ok(direction)
    }

    pub fn clear_sorting(&mut self) {
        self.state.sorting.clear();
    }

    // ---- visibility ----

    pub fn is_column_visible(&self, column_id: &str) -> bool {
        self.state.visibility.is_visible(column_id)
    }

    /// Show or hide a column. Hiding a column with hiding disabled is a no-op.
    pub fn set_column_visibility(&mut self, column_id: &str, visible: bool) -> Result<()> {
        let column = self.require_column(column_id)?;
        if !visible && !column.can_hide() {
            return Ok(());
        }
        if self.state.visibility.set_visible(column_id, visible) {
            tracing::debug!(column = column_id, visible, "Column visibility changed");
        }
        Ok(())
    }

    /// Flip a column's visibility, returning the new state
    pub fn toggle_column_visibility(&mut self, column_id: &str) -> Result<bool> {
        let visible = !self.is_column_visible(column_id);
        self.set_column_visibility(column_id, visible)?;
        Ok(self.is_column_visible(column_id))
    }

    pub fn show_all_columns(&mut self) {
        self.state.visibility.show_all();
    }

    // ---- row models ----

    /// Whether `row` passes the global search
    pub fn row_matches_search(&self, row: &R, search: &GlobalSearch) -> bool {
        if !search.is_active() {
            return true;
        }
        match &self.search_column {
            Some(column_id) => search.matches_text(&row.value(column_id).to_string()),
            None => self
                .columns
                .iter()
                .any(|c| search.matches_text(&c.value_of(row).to_string())),
        }
    }

    fn row_passes(&self, row: &R, search: &GlobalSearch, skip_column: Option<&str>) -> bool {
        self.state
            .column_filters
            .iter()
            .filter(|f| Some(f.column_id.as_str()) != skip_column)
            .all(|f| f.value.matches(&row.value(&f.column_id)))
            && self.row_matches_search(row, search)
    }

    /// Indices of rows passing every column filter and the global search,
    /// in source order
    pub fn filtered_rows(&self, search: &GlobalSearch) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| self.row_passes(row, search, None))
            .map(|(index, _)| index)
            .collect()
    }

    pub fn filtered_row_count(&self, search: &GlobalSearch) -> usize {
        self.rows
            .iter()
            .filter(|row| self.row_passes(row, search, None))
            .count()
    }

    /// Filtered row indices in sort order
    pub fn sorted_rows(&self, search: &GlobalSearch) -> Vec<usize> {
        let mut indices = self.filtered_rows(search);
        self.state.sorting.sort_indices(&mut indices, &self.rows);
        indices
    }

    /// Row indices shown on the current page
    pub fn page_rows(&self, search: &GlobalSearch) -> Vec<usize> {
        let sorted = self.sorted_rows(search);
        let range = self.state.pagination.page_range(sorted.len());
        sorted[range].to_vec()
    }

    /// Distinct display values of a column with their counts, over the rows
    /// that pass every other column filter and the global search
    pub fn faceted_unique_values(
        &self,
        column_id: &str,
        search: &GlobalSearch,
    ) -> Result<BTreeMap<String, usize>> {
        self.require_column(column_id)?;
        let mut facets = BTreeMap::new();
        for row in &self.rows {
            if !self.row_passes(row, search, Some(column_id)) {
                continue;
            }
            if let Some(text) = row.value(column_id).filter_text() {
                *facets.entry(text).or_insert(0) += 1;
            }
        }
        Ok(facets)
    }

    // ---- pagination ----

    pub fn pagination(&self) -> &PaginationState {
        &self.state.pagination
    }

    pub fn pagination_mut(&mut self) -> &mut PaginationState {
        &mut self.state.pagination
    }

    // ---- row selection ----

    pub fn selection(&self) -> &RowSelection {
        &self.state.selection
    }

    /// Flip one row's selection. Indices outside the data are ignored.
    pub fn toggle_row_selected(&mut self, row: usize) -> bool {
        if row >= self.rows.len() {
            return false;
        }
        self.state.selection.toggle(row)
    }

    pub fn toggle_all_page_rows_selected(&mut self, selected: bool, search: &GlobalSearch) {
        let page = self.page_rows(search);
        self.state.selection.set_all(&page, selected);
    }

    pub fn is_all_page_rows_selected(&self, search: &GlobalSearch) -> bool {
        self.state.selection.all_selected(&self.page_rows(search))
    }

    pub fn is_some_page_rows_selected(&self, search: &GlobalSearch) -> bool {
        self.state.selection.some_selected(&self.page_rows(search))
    }

    pub fn selected_rows(&self) -> Vec<&R> {
        self.state
            .selection
            .selected()
            .filter_map(|index| self.rows.get(index))
            .collect()
    }
}
