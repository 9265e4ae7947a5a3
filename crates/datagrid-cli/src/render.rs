//! Terminal and JSON output of a [`DataTable`]

use comfy_table::{Cell, ContentArrangement, Table as TextTable, presets::UTF8_FULL};
use datagrid_core::{RowData, TableState};
use datagrid_ui::{ChipListView, DataTable, HeaderView, IconName, PageInfo, SortIndicator};
use serde::Serialize;

fn header_label(header: &HeaderView) -> String {
    let mut label = header.title.clone();
    if let Some(sort) = header.sort.filter(|s| *s != SortIndicator::Unsorted) {
        label.push(' ');
        label.push_str(sort.icon().glyph());
    }
    if let Some(filter) = header.filter.filter(|f| f.active) {
        label.push(' ');
        label.push_str(filter.icon.glyph());
    }
    label
}

fn cell_text<R: RowData>(grid: &DataTable<R>, column_id: &str, index: usize, row: &R) -> String {
    let is_selection = grid
        .table()
        .column(column_id)
        .is_some_and(|c| c.is_selection());
    if is_selection {
        let icon = if grid.table().selection().is_selected(index) {
            IconName::CheckSquare
        } else {
            IconName::Square
        };
        return icon.glyph().to_string();
    }
    row.value(column_id).to_string()
}

fn chip_line(view: &ChipListView) -> String {
    let chips: Vec<String> = view
        .chips
        .iter()
        .map(|chip| {
            let icon = chip.icon.map(|i| format!("{} ", i.glyph())).unwrap_or_default();
            format!("{icon}{}: {}", chip.label, chip.value)
        })
        .collect();
    format!("{} {}", view.heading, chips.join("  |  "))
}

/// Render the current page as a box-drawn table followed by the chip line
/// and the pagination footer
pub fn render_text<R: RowData>(grid: &DataTable<R>) -> String {
    let headers = grid.header_views();

    let mut table = TextTable::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.iter().map(|h| Cell::new(header_label(h))));

    for (index, row) in grid.page_rows() {
        table.add_row(
            headers
                .iter()
                .map(|h| cell_text(grid, &h.column_id, index, row)),
        );
    }

    let mut out = String::new();
    if let Some(view) = grid.chip_list_view() {
        out.push_str(&chip_line(&view));
        out.push('\n');
    }
    out.push_str(&table.to_string());
    out.push('\n');

    let info = grid.page_info();
    out.push_str(&format!(
        "{}  {}\n",
        info.selection_summary(),
        info.page_summary()
    ));
    out
}

#[derive(Serialize)]
struct JsonRow {
    index: usize,
    selected: bool,
    /// `(column id, display text)`, text `null` for empty cells
    cells: Vec<(String, Option<String>)>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    search: &'a str,
    headers: Vec<HeaderView>,
    filters: Option<ChipListView>,
    rows: Vec<JsonRow>,
    page: PageInfo,
    state: &'a TableState,
}

/// The grid's visible state as pretty JSON
pub fn render_json<R: RowData>(grid: &DataTable<R>) -> serde_json::Result<String> {
    let headers = grid.header_views();
    let rows = grid
        .page_rows()
        .into_iter()
        .map(|(index, row)| JsonRow {
            index,
            selected: grid.table().selection().is_selected(index),
            cells: headers
                .iter()
                .filter(|h| !grid.table().column(&h.column_id).is_some_and(|c| c.is_selection()))
                .map(|h| (h.column_id.clone(), row.value(&h.column_id).filter_text()))
                .collect(),
        })
        .collect();

    let report = JsonReport {
        search: grid.search().query(),
        filters: grid.chip_list_view(),
        rows,
        page: grid.page_info(),
        state: grid.table().state(),
        headers,
    };
    serde_json::to_string_pretty(&report)
}
