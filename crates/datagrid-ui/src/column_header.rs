//! Column header: title, sort toggle and filter trigger

use datagrid_core::{ColumnDef, FilterKind, GlobalSearch, Result, RowData, SortDirection, Table};
use serde::Serialize;

use crate::filter_popover::FilterPopover;
use crate::icons::IconName;

/// Visual state of the sort toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortIndicator {
    Unsorted,
    Ascending,
    Descending,
}

impl SortIndicator {
    pub fn icon(&self) -> IconName {
        match self {
            Self::Unsorted => IconName::ArrowUpDown,
            Self::Ascending => IconName::ArrowUp,
            Self::Descending => IconName::ArrowDown,
        }
    }
}

impl From<Option<SortDirection>> for SortIndicator {
    fn from(direction: Option<SortDirection>) -> Self {
        match direction {
            None => Self::Unsorted,
            Some(SortDirection::Ascending) => Self::Ascending,
            Some(SortDirection::Descending) => Self::Descending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterButton {
    pub icon: IconName,
    /// Highlighted while a filter is committed on the column
    pub active: bool,
}

/// Everything a renderer needs to draw one header cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub column_id: String,
    pub title: String,
    /// `None` for columns with sorting disabled
    pub sort: Option<SortIndicator>,
    /// `None` for columns without a filter
    pub filter: Option<FilterButton>,
    pub popover_open: bool,
}

fn filter_icon(kind: FilterKind) -> IconName {
    match kind {
        FilterKind::Text => IconName::Filter,
        FilterKind::Number => IconName::Calculator,
        FilterKind::Date => IconName::Calendar,
    }
}

#[derive(Debug, Clone)]
pub struct ColumnHeader {
    column_id: String,
    title: String,
    popover: Option<FilterPopover>,
}

impl ColumnHeader {
    pub fn new(column: &ColumnDef) -> Self {
        Self {
            column_id: column.id.clone(),
            title: column.display_name(),
            popover: column
                .filter_kind
                .map(|kind| FilterPopover::new(column.id.clone(), kind)),
        }
    }

    pub fn column_id(&self) -> &str {
        &self.column_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn popover(&self) -> Option<&FilterPopover> {
        self.popover.as_ref()
    }

    pub fn popover_mut(&mut self) -> Option<&mut FilterPopover> {
        self.popover.as_mut()
    }

    pub fn view<R: RowData>(&self, table: &Table<R>) -> HeaderView {
        let sortable = table.column(&self.column_id).is_some_and(ColumnDef::can_sort);
        HeaderView {
            column_id: self.column_id.clone(),
            title: self.title.clone(),
            sort: sortable.then(|| SortIndicator::from(table.sort_direction(&self.column_id))),
            filter: self.popover.as_ref().map(|popover| FilterButton {
                icon: filter_icon(popover.kind()),
                active: table.is_filtered(&self.column_id),
            }),
            popover_open: self.popover.as_ref().is_some_and(FilterPopover::is_open),
        }
    }

    /// Advance this column's sort, replacing any other sorted column
    pub fn activate_sort<R: RowData>(&self, table: &mut Table<R>) -> Result<SortIndicator> {
        Ok(table.toggle_sorting(&self.column_id, false)?.into())
    }

    /// Advance this column's sort, keeping the other sorted columns
    pub fn activate_sort_multi<R: RowData>(&self, table: &mut Table<R>) -> Result<SortIndicator> {
        Ok(table.toggle_sorting(&self.column_id, true)?.into())
    }

    /// Open the filter popover. Returns `false` for columns without a filter.
    pub fn open_filter<R: RowData>(&mut self, table: &Table<R>, search: &GlobalSearch) -> Result<bool> {
        match &mut self.popover {
            Some(popover) => {
                popover.open(table, search)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
