//! Removable chips for the global search and every committed column filter
//!
//! The list holds no filter state of its own; chips are derived from the
//! table and the search on every call.

use datagrid_core::{
    DateRange, FilterValue, GlobalSearch, NumberRange, Result, RowData, Table,
    is_valid_date_format,
};
use serde::Serialize;

use crate::format_number;
use crate::icons::IconName;

const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";

/// What a chip removes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "column", rename_all = "snake_case")]
pub enum ChipKey {
    GlobalSearch,
    Column(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterChip {
    pub key: ChipKey,
    pub icon: Option<IconName>,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChipListView {
    pub heading: &'static str,
    pub chips: Vec<FilterChip>,
    pub clear_all_label: &'static str,
}

#[derive(Debug, Clone)]
pub struct FilterChipList {
    date_format: String,
}

impl Default for FilterChipList {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl FilterChipList {
    pub const HEADING: &'static str = "Active filters:";
    pub const CLEAR_ALL_LABEL: &'static str = "Clear all";
    pub const SEARCH_LABEL: &'static str = "Search";

    /// Chip list showing dates with `date_format`. An unusable format falls
    /// back to `%m/%d/%Y`.
    pub fn new(date_format: impl Into<String>) -> Self {
        let date_format = date_format.into();
        if !is_valid_date_format(&date_format) {
            tracing::warn!(format = %date_format, "Invalid date display format, using default");
            return Self::default();
        }
        Self { date_format }
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    pub fn has_filters<R: RowData>(&self, table: &Table<R>, search: &GlobalSearch) -> bool {
        !table.column_filters().is_empty() || search.is_active()
    }

    /// Search chip first, then column filters in the order they were applied
    pub fn chips<R: RowData>(&self, table: &Table<R>, search: &GlobalSearch) -> Vec<FilterChip> {
        let search_chip = search.is_active().then(|| FilterChip {
            key: ChipKey::GlobalSearch,
            icon: Some(IconName::Search),
            label: Self::SEARCH_LABEL.to_string(),
            value: search.query().to_string(),
        });

        let column_chips = table.column_filters().iter().map(|filter| FilterChip {
            key: ChipKey::Column(filter.column_id.clone()),
            icon: None,
            label: table
                .column(&filter.column_id)
                .map(|column| column.display_name())
                .unwrap_or_else(|| filter.column_id.clone()),
            value: self.format_filter_value(&filter.value),
        });

        search_chip.into_iter().chain(column_chips).collect()
    }

    pub fn format_filter_value(&self, value: &FilterValue) -> String {
        match value {
            FilterValue::Text(selected) => selected
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            FilterValue::Number(range) => format_number_range(range),
            FilterValue::Date(range) => self.format_date_range(range),
        }
    }

    fn format_date_range(&self, range: &DateRange) -> String {
        let from = range.from.format(&self.date_format);
        if range.is_single_day() {
            return from.to_string();
        }
        format!("{} - {}", from, range.to.format(&self.date_format))
    }

    /// Clear exactly the filter behind `key`
    pub fn remove<R: RowData>(
        &self,
        key: &ChipKey,
        table: &mut Table<R>,
        search: &mut GlobalSearch,
    ) -> Result<()> {
        match key {
            ChipKey::GlobalSearch => {
                search.clear();
                table.pagination_mut().first();
            }
            ChipKey::Column(column_id) => table.set_filter_value(column_id, None)?,
        }
        tracing::debug!(chip = ?key, "Filter chip removed");
        Ok(())
    }

    /// Drop every column filter and the search query
    pub fn clear_all<R: RowData>(&self, table: &mut Table<R>, search: &mut GlobalSearch) {
        table.reset_column_filters();
        search.clear();
    }

    /// `None` while nothing is filtered; the list is not drawn at all then
    pub fn view<R: RowData>(&self, table: &Table<R>, search: &GlobalSearch) -> Option<ChipListView> {
        self.has_filters(table, search).then(|| ChipListView {
            heading: Self::HEADING,
            chips: self.chips(table, search),
            clear_all_label: Self::CLEAR_ALL_LABEL,
        })
    }
}

fn format_number_range(range: &NumberRange) -> String {
    match (range.lower(), range.upper()) {
        (None, Some(max)) => format!("≤ {}", format_number(max)),
        (Some(min), None) => format!("≥ {}", format_number(min)),
        (Some(min), Some(max)) => format!("{} - {}", format_number(min), format_number(max)),
        (None, None) => format!("{} - {}", range.min, range.max),
    }
}
