//! Toolbar above the grid: global search input plus the view-options menu

use datagrid_core::{GlobalSearch, RowData, Table};
use serde::Serialize;

use crate::column_visibility::{ColumnVisibilityMenu, ColumnVisibilityView};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolbarView {
    pub search_placeholder: String,
    pub search_value: String,
    pub view_options: ColumnVisibilityView,
}

#[derive(Debug, Clone)]
pub struct Toolbar {
    placeholder: String,
    view_options: ColumnVisibilityMenu,
}

impl Default for Toolbar {
    fn default() -> Self {
        Self::new("Search...")
    }
}

impl Toolbar {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            view_options: ColumnVisibilityMenu::new(),
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn view_options(&self) -> &ColumnVisibilityMenu {
        &self.view_options
    }

    pub fn view_options_mut(&mut self) -> &mut ColumnVisibilityMenu {
        &mut self.view_options
    }

    /// Search input changed. Resets the table to its first page.
    pub fn on_search_input<R: RowData>(
        &self,
        text: &str,
        search: &mut GlobalSearch,
        table: &mut Table<R>,
    ) {
        search.set_query(text);
        table.pagination_mut().first();
    }

    pub fn view<R: RowData>(&self, table: &Table<R>, search: &GlobalSearch) -> ToolbarView {
        ToolbarView {
            search_placeholder: self.placeholder.clone(),
            search_value: search.query().to_string(),
            view_options: self.view_options.view(table),
        }
    }
}
