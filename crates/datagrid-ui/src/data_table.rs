//! The composed grid
//!
//! `DataTable` owns the table state, the global search and every widget, and
//! passes the search to each widget explicitly.

use datagrid_core::{
    ColumnDef, FilterValue, GlobalSearch, GridError, GridSettings, Result, RowData, Table,
};
use serde::Serialize;

use crate::column_header::{ColumnHeader, HeaderView, SortIndicator};
use crate::column_visibility::ColumnVisibilityView;
use crate::filter_list::{ChipKey, ChipListView, FilterChip, FilterChipList};
use crate::filters::FilterEditor;
use crate::toolbar::{Toolbar, ToolbarView};

/// Pagination footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// 0-based
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    pub filtered_rows: usize,
    pub total_rows: usize,
    pub selected_rows: usize,
    pub can_previous: bool,
    pub can_next: bool,
}

impl PageInfo {
    /// "n of m row(s) selected."
    pub fn selection_summary(&self) -> String {
        format!(
            "{} of {} row(s) selected.",
            self.selected_rows, self.filtered_rows
        )
    }

    /// "Page x of y"
    pub fn page_summary(&self) -> String {
        format!("Page {} of {}", self.page_index + 1, self.page_count)
    }
}

pub struct DataTable<R> {
    table: Table<R>,
    search: GlobalSearch,
    toolbar: Toolbar,
    headers: Vec<ColumnHeader>,
    chips: FilterChipList,
    settings: GridSettings,
}

fn find_header<'a>(headers: &'a mut [ColumnHeader], column_id: &str) -> Result<&'a mut ColumnHeader> {
    headers
        .iter_mut()
        .find(|h| h.column_id() == column_id)
        .ok_or_else(|| GridError::UnknownColumn(column_id.to_string()))
}

impl<R: RowData> DataTable<R> {
    /// Grid over `data`. The global search matches `search_column` only, or
    /// every column when `None`.
    pub fn new(columns: Vec<ColumnDef>, data: Vec<R>, search_column: Option<&str>) -> Self {
        Self::with_settings(columns, data, search_column, GridSettings::default())
    }

    pub fn with_settings(
        columns: Vec<ColumnDef>,
        data: Vec<R>,
        search_column: Option<&str>,
        settings: GridSettings,
    ) -> Self {
        let headers = columns.iter().map(ColumnHeader::new).collect();
        let table = Table::new(columns, data)
            .with_search_column(search_column.map(str::to_string))
            .with_page_size(settings.page_size);
        tracing::debug!(
            rows = table.rows().len(),
            columns = table.columns().len(),
            search_column = ?search_column,
            "Data table created"
        );
        Self {
            table,
            search: GlobalSearch::new(),
            toolbar: Toolbar::new(settings.search_placeholder.clone()),
            headers,
            chips: FilterChipList::new(settings.date_display_format.clone()),
            settings,
        }
    }

    pub fn table(&self) -> &Table<R> {
        &self.table
    }

    pub fn search(&self) -> &GlobalSearch {
        &self.search
    }

    pub fn settings(&self) -> &GridSettings {
        &self.settings
    }

    pub fn chip_list(&self) -> &FilterChipList {
        &self.chips
    }

    /// Re-derive the option lists of open text popovers
    fn refresh_popovers(&mut self) -> Result<()> {
        for header in &mut self.headers {
            if let Some(popover) = header.popover_mut() {
                popover.refresh(&self.table, &self.search)?;
            }
        }
        Ok(())
    }

    // ---- toolbar ----

    pub fn set_search(&mut self, text: &str) -> Result<()> {
        self.toolbar
            .on_search_input(text, &mut self.search, &mut self.table);
        self.refresh_popovers()
    }

    pub fn toolbar_view(&self) -> ToolbarView {
        self.toolbar.view(&self.table, &self.search)
    }

    pub fn column_visibility_view(&self) -> ColumnVisibilityView {
        self.toolbar.view_options().view(&self.table)
    }

    pub fn set_column_visibility_search(&mut self, query: &str) {
        self.toolbar.view_options_mut().set_search_query(query);
    }

    pub fn toggle_column_visibility(&mut self, column_id: &str) -> Result<bool> {
        self.toolbar.view_options().toggle(&mut self.table, column_id)
    }

    pub fn set_column_visible(&mut self, column_id: &str, visible: bool) -> Result<()> {
        self.toolbar
            .view_options()
            .set_visible(&mut self.table, column_id, visible)
    }

    pub fn show_all_columns(&mut self) {
        self.toolbar.view_options().show_all(&mut self.table);
    }

    pub fn hide_all_columns(&mut self) -> Result<()> {
        self.toolbar.view_options().hide_all(&mut self.table)
    }

    // ---- headers ----

    /// Header cells of the visible columns, in column order
    pub fn header_views(&self) -> Vec<HeaderView> {
        self.headers
            .iter()
            .filter(|h| self.table.is_column_visible(h.column_id()))
            .map(|h| h.view(&self.table))
            .collect()
    }

    pub fn header(&self, column_id: &str) -> Option<&ColumnHeader> {
        self.headers.iter().find(|h| h.column_id() == column_id)
    }

    pub fn toggle_sort(&mut self, column_id: &str, multi: bool) -> Result<SortIndicator> {
        let header = find_header(&mut self.headers, column_id)?;
        if multi {
            header.activate_sort_multi(&mut self.table)
        } else {
            header.activate_sort(&mut self.table)
        }
    }

    // ---- filter popovers ----

    /// Open a column's filter popover. Returns `false` for columns without
    /// a filter.
    pub fn open_filter(&mut self, column_id: &str) -> Result<bool> {
        find_header(&mut self.headers, column_id)?.open_filter(&self.table, &self.search)
    }

    /// Editor of an open popover
    pub fn filter_editor_mut(&mut self, column_id: &str) -> Option<&mut FilterEditor> {
        self.headers
            .iter_mut()
            .find(|h| h.column_id() == column_id)?
            .popover_mut()?
            .editor_mut()
    }

    pub fn pending_filter_value(&self, column_id: &str) -> Option<FilterValue> {
        self.header(column_id)?.popover()?.pending_value()
    }

    /// Commit the open popover's pending value and close it
    pub fn apply_filter(&mut self, column_id: &str) -> Result<()> {
        let header = find_header(&mut self.headers, column_id)?;
        let popover = header
            .popover_mut()
            .ok_or_else(|| GridError::NotFilterable(column_id.to_string()))?;
        popover.apply(&mut self.table)?;
        self.refresh_popovers()
    }

    /// Clear the column's committed filter, keeping the popover open
    pub fn reset_filter(&mut self, column_id: &str) -> Result<bool> {
        let header = find_header(&mut self.headers, column_id)?;
        let popover = header
            .popover_mut()
            .ok_or_else(|| GridError::NotFilterable(column_id.to_string()))?;
        let reset = popover.reset(&mut self.table)?;
        self.refresh_popovers()?;
        Ok(reset)
    }

    pub fn dismiss_filter(&mut self, column_id: &str) {
        if let Some(popover) = self
            .headers
            .iter_mut()
            .find(|h| h.column_id() == column_id)
            .and_then(ColumnHeader::popover_mut)
        {
            popover.dismiss();
        }
    }

    /// Commit a value directly, bypassing the popover
    pub fn set_filter_value(&mut self, column_id: &str, value: Option<FilterValue>) -> Result<()> {
        self.table.set_filter_value(column_id, value)?;
        self.refresh_popovers()
    }

    // ---- filter chips ----

    pub fn has_filters(&self) -> bool {
        self.chips.has_filters(&self.table, &self.search)
    }

    pub fn chips(&self) -> Vec<FilterChip> {
        self.chips.chips(&self.table, &self.search)
    }

    pub fn chip_list_view(&self) -> Option<ChipListView> {
        self.chips.view(&self.table, &self.search)
    }

    pub fn remove_chip(&mut self, key: &ChipKey) -> Result<()> {
        self.chips.remove(key, &mut self.table, &mut self.search)?;
        self.refresh_popovers()
    }

    pub fn clear_all_filters(&mut self) -> Result<()> {
        self.chips.clear_all(&mut self.table, &mut self.search);
        self.refresh_popovers()
    }

    // ---- rows and pagination ----

    /// Rows of the current page with their source indices
    pub fn page_rows(&self) -> Vec<(usize, &R)> {
        self.table
            .page_rows(&self.search)
            .into_iter()
            .filter_map(|index| self.table.row(index).map(|row| (index, row)))
            .collect()
    }

    pub fn filtered_row_count(&self) -> usize {
        self.table.filtered_row_count(&self.search)
    }

    pub fn page_info(&self) -> PageInfo {
        let filtered = self.filtered_row_count();
        let pagination = self.table.pagination();
        PageInfo {
            page_index: pagination.current_page(filtered),
            page_count: pagination.page_count(filtered),
            page_size: pagination.page_size(),
            page_size_options: self.settings.page_size_options.clone(),
            filtered_rows: filtered,
            total_rows: self.table.rows().len(),
            selected_rows: self.table.selection().count(),
            can_previous: pagination.can_previous(filtered),
            can_next: pagination.can_next(filtered),
        }
    }

    pub fn next_page(&mut self) {
        let filtered = self.filtered_row_count();
        self.table.pagination_mut().next(filtered);
    }

    pub fn previous_page(&mut self) {
        let filtered = self.filtered_row_count();
        self.table.pagination_mut().previous(filtered);
    }

    pub fn first_page(&mut self) {
        self.table.pagination_mut().first();
    }

    pub fn last_page(&mut self) {
        let filtered = self.filtered_row_count();
        self.table.pagination_mut().last(filtered);
    }

    /// Jump to a 0-based page, clamped to the last page
    pub fn set_page(&mut self, page_index: usize) {
        let filtered = self.filtered_row_count();
        self.table.pagination_mut().set_page(page_index, filtered);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.table.pagination_mut().set_page_size(page_size);
    }

    // ---- row selection ----

    pub fn toggle_row_selected(&mut self, row: usize) -> bool {
        self.table.toggle_row_selected(row)
    }

    pub fn toggle_all_page_rows_selected(&mut self, selected: bool) {
        self.table
            .toggle_all_page_rows_selected(selected, &self.search);
    }

    pub fn is_all_page_rows_selected(&self) -> bool {
        self.table.is_all_page_rows_selected(&self.search)
    }

    pub fn is_some_page_rows_selected(&self) -> bool {
        self.table.is_some_page_rows_selected(&self.search)
    }

    pub fn selected_rows(&self) -> Vec<&R> {
        self.table.selected_rows()
    }
}
