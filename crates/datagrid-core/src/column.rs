//! Column definitions

use serde::{Deserialize, Serialize};

use crate::filter::{FilterKind, FilterValue};
use crate::types::{RowData, Value};

/// Definition of one grid column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Accessor key, also the column id
    pub id: String,
    /// Header title
    pub title: String,
    /// Filter kind, `None` for columns without a filter popover
    pub filter_kind: Option<FilterKind>,
    pub enable_sorting: bool,
    pub enable_hiding: bool,
}

impl ColumnDef {
    /// A plain column: sortable and hideable, not filterable
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            filter_kind: None,
            enable_sorting: true,
            enable_hiding: true,
        }
    }

    pub fn filter_kind(mut self, kind: FilterKind) -> Self {
        self.filter_kind = Some(kind);
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.enable_sorting = sortable;
        self
    }

    pub fn hideable(mut self, hideable: bool) -> Self {
        self.enable_hiding = hideable;
        self
    }

    pub fn can_filter(&self) -> bool {
        self.filter_kind.is_some()
    }

    pub fn can_sort(&self) -> bool {
        self.enable_sorting
    }

    pub fn can_hide(&self) -> bool {
        self.enable_hiding
    }

    /// Header text; falls back to the capitalized id when the title is blank
    pub fn display_name(&self) -> String {
        if !self.title.trim().is_empty() {
            return self.title.clone();
        }
        let mut chars = self.id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn is_selection(&self) -> bool {
        self.id == SELECTION_COLUMN_ID
    }

    /// Cell value of this column for `row`
    pub fn value_of<R: RowData>(&self, row: &R) -> Value {
        row.value(&self.id)
    }

    /// Evaluate a committed filter against `row`
    pub fn filter_row<R: RowData>(&self, row: &R, filter: &FilterValue) -> bool {
        filter.matches(&self.value_of(row))
    }
}

/// Id of the row-selection checkbox column
pub const SELECTION_COLUMN_ID: &str = "select";

/// Checkbox column for row selection: not sortable, not hideable, not
/// filterable
pub fn selection_column() -> ColumnDef {
    ColumnDef::new(SELECTION_COLUMN_ID, "")
        .sortable(false)
        .hideable(false)
}

/// A column wired for filtering: sortable, hideable and tagged with `kind`
pub fn filterable_column(
    accessor_key: impl Into<String>,
    title: impl Into<String>,
    kind: FilterKind,
) -> ColumnDef {
    ColumnDef::new(accessor_key, title).filter_kind(kind)
}
