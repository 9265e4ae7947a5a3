//! Column visibility menu
//!
//! Lists the hideable columns with a checkbox each. A search box narrows the
//! list. Visibility itself lives in the table state.

use datagrid_core::{ColumnDef, Result, RowData, Table};
use serde::Serialize;

/// One checkbox row of the menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnVisibilityItem {
    pub column_id: String,
    pub title: String,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnVisibilityView {
    pub label: &'static str,
    pub items: Vec<ColumnVisibilityItem>,
    pub visible_count: usize,
    pub total_count: usize,
}

/// Column visibility menu state
#[derive(Debug, Clone, Default)]
pub struct ColumnVisibilityMenu {
    /// Current search query
    search_query: String,
}

impl ColumnVisibilityMenu {
    pub const LABEL: &'static str = "View";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    fn hideable<R: RowData>(table: &Table<R>) -> impl Iterator<Item = &ColumnDef> {
        table.columns().iter().filter(|c| c.can_hide())
    }

    /// Hideable columns matching the search query
    pub fn items<R: RowData>(&self, table: &Table<R>) -> Vec<ColumnVisibilityItem> {
        let query = self.search_query.to_lowercase();
        Self::hideable(table)
            .filter(|c| {
                query.is_empty()
                    || c.id.to_lowercase().contains(&query)
                    || c.display_name().to_lowercase().contains(&query)
            })
            .map(|c| ColumnVisibilityItem {
                column_id: c.id.clone(),
                title: c.display_name(),
                visible: table.is_column_visible(&c.id),
            })
            .collect()
    }

    /// Toggle a column's visibility
    pub fn toggle<R: RowData>(&self, table: &mut Table<R>, column_id: &str) -> Result<bool> {
        table.toggle_column_visibility(column_id)
    }

    /// Set a column's visibility
    pub fn set_visible<R: RowData>(
        &self,
        table: &mut Table<R>,
        column_id: &str,
        visible: bool,
    ) -> Result<()> {
        table.set_column_visibility(column_id, visible)
    }

    /// Show all columns
    pub fn show_all<R: RowData>(&self, table: &mut Table<R>) {
        table.show_all_columns();
    }

    /// Hide all hideable columns
    pub fn hide_all<R: RowData>(&self, table: &mut Table<R>) -> Result<()> {
        let ids: Vec<String> = Self::hideable(table).map(|c| c.id.clone()).collect();
        for id in ids {
            table.set_column_visibility(&id, false)?;
        }
        Ok(())
    }

    /// Get count of visible columns
    pub fn visible_count<R: RowData>(&self, table: &Table<R>) -> usize {
        table.visible_columns().count()
    }

    /// Get total column count
    pub fn total_count<R: RowData>(&self, table: &Table<R>) -> usize {
        table.columns().len()
    }

    pub fn view<R: RowData>(&self, table: &Table<R>) -> ColumnVisibilityView {
        ColumnVisibilityView {
            label: Self::LABEL,
            items: self.items(table),
            visible_count: self.visible_count(table),
            total_count: self.total_count(table),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datagrid_core::{FilterKind, Row, filterable_column};
    use pretty_assertions::assert_eq;

    fn table() -> Table<Row> {
        Table::new(
            vec![
                ColumnDef::new("select", "").sortable(false).hideable(false),
                filterable_column("status", "Status", FilterKind::Text),
                filterable_column("email", "Email", FilterKind::Text),
                filterable_column("amount", "Amount", FilterKind::Number),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn test_lists_only_hideable_columns() {
        let table = table();
        let menu = ColumnVisibilityMenu::new();
        let ids: Vec<_> = menu.items(&table).into_iter().map(|i| i.column_id).collect();
        assert_eq!(ids, vec!["status", "email", "amount"]);
    }

    #[test]
    fn test_toggle_and_counts() {
        let mut table = table();
        let menu = ColumnVisibilityMenu::new();

        assert!(!menu.toggle(&mut table, "email").unwrap());
        assert_eq!(menu.visible_count(&table), 3);
        assert_eq!(menu.total_count(&table), 4);

        assert!(menu.toggle(&mut table, "email").unwrap());
        assert_eq!(menu.visible_count(&table), 4);
    }

    #[test]
    fn test_hide_all_keeps_non_hideable_columns() {
        let mut table = table();
        let menu = ColumnVisibilityMenu::new();

        menu.hide_all(&mut table).unwrap();
        let visible: Vec<_> = table.visible_columns().map(|c| c.id.as_str()).collect();
        assert_eq!(visible, vec!["select"]);

        menu.show_all(&mut table);
        assert_eq!(menu.visible_count(&table), 4);
    }

    #[test]
    fn test_search_narrows_items() {
        let mut table = table();
        let mut menu = ColumnVisibilityMenu::new();
        menu.set_visible(&mut table, "amount", false).unwrap();
        menu.set_search_query("AM");

        assert_eq!(
            menu.view(&table).items,
            vec![ColumnVisibilityItem {
                column_id: "amount".to_string(),
                title: "Amount".to_string(),
                visible: false,
            }]
        );
    }
}
