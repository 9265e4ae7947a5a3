//! Datagrid UI - headless widgets for a filterable, sortable data grid
//!
//! Every widget keeps its own state and produces a plain-data view that a
//! renderer draws. Widgets never reach for shared state: the `Table` and the
//! `GlobalSearch` they act on are passed in by the caller.
//!
//! ## Module Structure
//!
//! - `filters` - Text, number and date filter editors
//! - `filter_popover` - Hosts one editor and commits or resets its value
//! - `column_header` - Sort toggle and filter trigger for one column
//! - `filter_list` - Removable chips for the active filters
//! - `toolbar` - Global search input and view options
//! - `column_visibility` - Column show/hide menu
//! - `data_table` - The composed grid

mod column_header;
mod column_visibility;
mod data_table;
mod filter_list;
mod filter_popover;
pub mod filters;
mod icons;
mod toolbar;

pub use column_header::{ColumnHeader, FilterButton, HeaderView, SortIndicator};
pub use column_visibility::{ColumnVisibilityItem, ColumnVisibilityMenu, ColumnVisibilityView};
pub use data_table::{DataTable, PageInfo};
pub use filter_list::{ChipKey, ChipListView, FilterChip, FilterChipList};
pub use filter_popover::{FilterPopover, PopoverWidth};
pub use filters::{DateFilter, FilterEditor, NumberFilter, TextFilter, TextOption};
pub use icons::IconName;
pub use toolbar::{Toolbar, ToolbarView};

/// Format a number the way filter inputs and chips show it
pub(crate) fn format_number(value: f64) -> String {
    value.to_string()
}
