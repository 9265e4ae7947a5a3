//! Popover hosting one column's filter editor
//!
//! Closed until [`FilterPopover::open`] seeds an editor from the committed
//! value. Apply commits the pending value and closes; Reset clears both the
//! pending and the committed value and keeps the popover open; dismiss drops
//! the pending value.

use datagrid_core::{FilterKind, FilterValue, GlobalSearch, Result, RowData, Table};
use serde::Serialize;

use crate::filters::{DateFilter, FilterEditor, NumberFilter, TextFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PopoverWidth {
    /// Fixed width for the text and number editors
    Compact,
    /// Fits the two-month calendar of the date editor
    Wide,
}

impl PopoverWidth {
    pub fn for_kind(kind: FilterKind) -> Self {
        match kind {
            FilterKind::Text | FilterKind::Number => Self::Compact,
            FilterKind::Date => Self::Wide,
        }
    }

    pub fn min_width_px(&self) -> f32 {
        match self {
            Self::Compact => 220.0,
            Self::Wide => 500.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FilterPopover {
    column_id: String,
    kind: FilterKind,
    editor: Option<FilterEditor>,
}

impl FilterPopover {
    pub const APPLY_LABEL: &'static str = "Apply";
    pub const RESET_LABEL: &'static str = "Reset";

    pub fn new(column_id: impl Into<String>, kind: FilterKind) -> Self {
        Self {
            column_id: column_id.into(),
            kind,
            editor: None,
        }
    }

    pub fn column_id(&self) -> &str {
        &self.column_id
    }

    pub fn kind(&self) -> FilterKind {
        self.kind
    }

    pub fn is_open(&self) -> bool {
        self.editor.is_some()
    }

    pub fn width(&self) -> PopoverWidth {
        PopoverWidth::for_kind(self.kind)
    }

    /// Open with an editor seeded from the committed value. Reopening an open
    /// popover discards its pending edits.
    pub fn open<R: RowData>(&mut self, table: &Table<R>, search: &GlobalSearch) -> Result<()> {
        let committed = table.filter_value(&self.column_id);
        let editor = match self.kind {
            FilterKind::Text => {
                let facets = table.faceted_unique_values(&self.column_id, search)?;
                FilterEditor::Text(TextFilter::new(&facets, committed))
            }
            FilterKind::Number => FilterEditor::Number(NumberFilter::new(committed)),
            FilterKind::Date => FilterEditor::Date(DateFilter::new(committed)),
        };
        tracing::debug!(column = %self.column_id, kind = self.kind.label(), "Filter popover opened");
        self.editor = Some(editor);
        Ok(())
    }

    pub fn editor(&self) -> Option<&FilterEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut FilterEditor> {
        self.editor.as_mut()
    }

    pub fn pending_value(&self) -> Option<FilterValue> {
        self.editor.as_ref().and_then(FilterEditor::value)
    }

    /// Commit the pending value and close. A pending value of `None` removes
    /// the column's filter. On error the popover stays open.
    pub fn apply<R: RowData>(&mut self, table: &mut Table<R>) -> Result<()> {
        let Some(editor) = &self.editor else {
            return Ok(());
        };
        table.set_filter_value(&self.column_id, editor.value())?;
        self.editor = None;
        Ok(())
    }

    /// Clear the pending and committed value. Returns `false` when there was
    /// no committed filter to reset.
    pub fn reset<R: RowData>(&mut self, table: &mut Table<R>) -> Result<bool> {
        if !self.can_reset(table) {
            return Ok(false);
        }
        table.set_filter_value(&self.column_id, None)?;
        if let Some(editor) = &mut self.editor {
            editor.clear();
        }
        Ok(true)
    }

    /// Close without committing
    pub fn dismiss(&mut self) {
        if self.editor.take().is_some() {
            tracing::trace!(column = %self.column_id, "Filter popover dismissed");
        }
    }

    /// Reset is only offered while the column has a committed filter
    pub fn can_reset<R: RowData>(&self, table: &Table<R>) -> bool {
        table.is_filtered(&self.column_id)
    }

    /// Recompute the option list of an open text editor after the other
    /// filters or the search changed
    pub fn refresh<R: RowData>(&mut self, table: &Table<R>, search: &GlobalSearch) -> Result<()> {
        if let Some(FilterEditor::Text(editor)) = &mut self.editor {
            editor.set_facets(&table.faceted_unique_values(&self.column_id, search)?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use datagrid_core::{ColumnDef, GridError, Row, filterable_column};
    use pretty_assertions::assert_eq;

    fn table() -> Table<Row> {
        let columns = vec![
            filterable_column("status", "Status", FilterKind::Text),
            filterable_column("amount", "Amount", FilterKind::Number),
            filterable_column("createdAt", "Created", FilterKind::Date),
            ColumnDef::new("email", "Email"),
        ];
        let rows = vec![
            Row::new()
                .with("status", "success")
                .with("amount", 316_i64)
                .with("createdAt", "2023-06-01"),
            Row::new()
                .with("status", "failed")
                .with("amount", 42_i64)
                .with("createdAt", "2023-06-20"),
        ];
        Table::new(columns, rows)
    }

    #[test]
    fn test_apply_commits_and_closes() {
        let mut table = table();
        let search = GlobalSearch::new();
        let mut popover = FilterPopover::new("amount", FilterKind::Number);

        popover.open(&table, &search).unwrap();
        assert!(popover.is_open());
        popover
            .editor_mut()
            .and_then(FilterEditor::as_number_mut)
            .unwrap()
            .set_min("50");
        popover.apply(&mut table).unwrap();

        assert!(!popover.is_open());
        assert_eq!(
            table.filter_value("amount"),
            Some(&FilterValue::number(50.0, f64::INFINITY))
        );
    }

    #[test]
    fn test_dismiss_discards_pending_value() {
        let mut table = table();
        let search = GlobalSearch::new();
        let mut popover = FilterPopover::new("status", FilterKind::Text);

        popover.open(&table, &search).unwrap();
        popover
            .editor_mut()
            .and_then(FilterEditor::as_text_mut)
            .unwrap()
            .toggle("success");
        popover.dismiss();

        assert!(!popover.is_open());
        assert!(!table.is_filtered("status"));
        popover.apply(&mut table).unwrap();
        assert!(!table.is_filtered("status"));
    }

    #[test]
    fn test_reopen_seeds_editor_from_committed_value() {
        let mut table = table();
        let search = GlobalSearch::new();
        let day = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
        let mut popover = FilterPopover::new("createdAt", FilterKind::Date);

        popover.open(&table, &search).unwrap();
        popover
            .editor_mut()
            .and_then(FilterEditor::as_date_mut)
            .unwrap()
            .this_month_from(day);
        popover.apply(&mut table).unwrap();

        popover.open(&table, &search).unwrap();
        assert_eq!(popover.pending_value(), table.filter_value("createdAt").cloned());
    }

    #[test]
    fn test_reset_clears_committed_and_stays_open() {
        let mut table = table();
        let search = GlobalSearch::new();
        let mut popover = FilterPopover::new("status", FilterKind::Text);

        assert!(!popover.can_reset(&table));
        assert!(!popover.reset(&mut table).unwrap());

        table
            .set_filter_value("status", FilterValue::text(["failed"]))
            .unwrap();
        popover.open(&table, &search).unwrap();
        assert!(popover.can_reset(&table));
        assert!(popover.reset(&mut table).unwrap());

        assert!(popover.is_open());
        assert_eq!(popover.pending_value(), None);
        assert!(!table.is_filtered("status"));
        assert!(!popover.can_reset(&table));
    }

    #[test]
    fn test_applying_nothing_removes_filter() {
        let mut table = table();
        let search = GlobalSearch::new();
        table
            .set_filter_value("amount", Some(FilterValue::number(1.0, 2.0)))
            .unwrap();

        let mut popover = FilterPopover::new("amount", FilterKind::Number);
        popover.open(&table, &search).unwrap();
        popover.editor_mut().unwrap().clear();
        popover.apply(&mut table).unwrap();

        assert!(!table.is_filtered("amount"));
    }

    #[test]
    fn test_kind_mismatch_keeps_popover_open() {
        let mut table = table();
        let search = GlobalSearch::new();
        let mut popover = FilterPopover::new("amount", FilterKind::Date);

        popover.open(&table, &search).unwrap();
        popover
            .editor_mut()
            .and_then(FilterEditor::as_date_mut)
            .unwrap()
            .set_from_input("2023-01-01");

        assert!(matches!(
            popover.apply(&mut table),
            Err(GridError::KindMismatch { .. })
        ));
        assert!(popover.is_open());
    }

    #[test]
    fn test_text_options_follow_search() {
        let table = table();
        let mut search = GlobalSearch::new();
        let mut popover = FilterPopover::new("status", FilterKind::Text);
        popover.open(&table, &search).unwrap();

        search.set_query("fail");
        popover.refresh(&table, &search).unwrap();

        let Some(FilterEditor::Text(editor)) = popover.editor() else {
            panic!("expected a text editor");
        };
        assert_eq!(editor.options().collect::<Vec<_>>(), vec!["failed"]);
    }

    #[test]
    fn test_width_by_kind() {
        assert_eq!(
            FilterPopover::new("createdAt", FilterKind::Date).width(),
            PopoverWidth::Wide
        );
        assert_eq!(PopoverWidth::Wide.min_width_px(), 500.0);
        assert_eq!(
            FilterPopover::new("amount", FilterKind::Number).width(),
            PopoverWidth::Compact
        );
    }
}
