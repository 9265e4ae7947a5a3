//! Datagrid Core - filter model and tabular state for the datagrid widgets
//!
//! This crate has no UI dependencies. It defines:
//!
//! - `Value` / `RowData` - cell values and the row access trait
//! - `FilterKind` / `FilterValue` - per-column filter criteria and their predicates
//! - `ColumnDef` - column definitions, built with [`filterable_column`]
//! - `Table` - sorting, column filters, facets, visibility, pagination and row selection
//! - `GlobalSearch` - the free-text query shared by the toolbar and the filter chips
//! - `GridSettings` - persisted display settings

pub mod column;
mod error;
pub mod filter;
mod search;
mod settings;
pub mod table;
mod types;

pub use column::{ColumnDef, SELECTION_COLUMN_ID, filterable_column, selection_column};
pub use error::*;
pub use filter::{ColumnFilter, DateRange, FilterKind, FilterValue, NumberRange};
pub use search::GlobalSearch;
pub use settings::{GridSettings, is_valid_date_format};
pub use table::{
    ColumnVisibility, PaginationState, RowSelection, SortDirection, SortingState, Table,
    TableState,
};
pub use types::*;
