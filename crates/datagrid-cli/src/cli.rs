//! `datagrid` - show, filter, sort and page tabular data in the terminal
//!
//! Every flag is applied through the same widgets an interactive front-end
//! would drive: filters are edited in a popover's editor and applied, sorts
//! are header activations, and the search goes through the toolbar.

mod args;
mod data;
mod logging;
mod render;

use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Parser;
use datagrid_core::{GridSettings, Row, RowData};
use datagrid_ui::{DataTable, FilterEditor};

use crate::args::Args;
use crate::logging::LoggingConfig;

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = logging::init(LoggingConfig::with_level(&args.log_level, args.log_json))
        .context("Failed to initialize logging")?;

    let settings = load_settings(args.config.as_deref())?;
    let mut grid = build_grid(&args, settings)?;
    apply_args(&mut grid, &args)?;

    let output = if args.json {
        render::render_json(&grid).context("Failed to serialize grid")?
    } else {
        render::render_text(&grid)
    };
    print!("{output}");
    Ok(())
}

fn load_settings(explicit: Option<&Path>) -> Result<GridSettings> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match GridSettings::default_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::debug!(error = %e, "No config directory, using default settings");
                return Ok(GridSettings::default());
            }
        },
    };
    GridSettings::load(&path)
        .with_context(|| format!("Failed to load settings from {}", path.display()))
}

fn build_grid(args: &Args, mut settings: GridSettings) -> Result<DataTable<Row>> {
    let (mut columns, rows, mut search_column) = match &args.data {
        Some(path) => {
            let rows = data::load_rows(path)?;
            (data::infer_columns(&rows), rows, None)
        }
        None => {
            let sample = data::sample();
            (sample.columns, sample.rows, sample.search_column)
        }
    };
    if !args.columns.is_empty() {
        columns = args.columns.iter().map(|spec| spec.to_column()).collect();
    }
    if args.search_column.is_some() {
        search_column = args.search_column.clone();
    }
    if let Some(page_size) = args.page_size {
        if page_size == 0 {
            bail!("--page-size must be greater than zero");
        }
        settings.page_size = page_size;
    }

    Ok(DataTable::with_settings(
        columns,
        rows,
        search_column.as_deref(),
        settings,
    ))
}

/// Open a column's popover, edit its pending value and apply it
fn edit_filter<R, F>(grid: &mut DataTable<R>, column: &str, edit: F) -> Result<()>
where
    R: RowData,
    F: FnOnce(&mut FilterEditor) -> Result<()>,
{
    let opened = grid
        .open_filter(column)
        .with_context(|| format!("Cannot filter column `{column}`"))?;
    if !opened {
        bail!("Column `{column}` has no filter");
    }
    let editor = grid
        .filter_editor_mut(column)
        .with_context(|| format!("Filter popover for `{column}` did not open"))?;
    edit(editor)?;
    grid.apply_filter(column)
        .with_context(|| format!("Failed to apply filter on `{column}`"))
}

fn wrong_kind(column: &str, expected: &str) -> anyhow::Error {
    anyhow::anyhow!("Column `{column}` is not a {expected} column")
}

fn apply_args<R: RowData>(grid: &mut DataTable<R>, args: &Args) -> Result<()> {
    for column in &args.hide {
        grid.set_column_visible(column, false)
            .with_context(|| format!("Cannot hide column `{column}`"))?;
    }

    for filter in &args.filters {
        edit_filter(grid, &filter.column, |editor| {
            let editor = editor
                .as_text_mut()
                .ok_or_else(|| wrong_kind(&filter.column, "text"))?;
            editor.clear();
            for value in &filter.values {
                editor.toggle(value);
            }
            Ok(())
        })?;
    }

    for range in &args.ranges {
        edit_filter(grid, &range.column, |editor| {
            let editor = editor
                .as_number_mut()
                .ok_or_else(|| wrong_kind(&range.column, "number"))?;
            editor.set_min(range.low.as_str());
            editor.set_max(range.high.as_str());
            Ok(())
        })?;
    }

    for range in &args.dates {
        edit_filter(grid, &range.column, |editor| {
            let editor = editor
                .as_date_mut()
                .ok_or_else(|| wrong_kind(&range.column, "date"))?;
            editor.set_from_input(&range.low);
            editor.set_to_input(&range.high);
            if editor.value().is_none() && !(range.low.is_empty() && range.high.is_empty()) {
                tracing::warn!(column = %range.column, from = %range.low, to = %range.high, "Ignoring unparseable date range");
            }
            Ok(())
        })?;
    }

    for column in &args.this_month {
        edit_filter(grid, column, |editor| {
            editor
                .as_date_mut()
                .ok_or_else(|| wrong_kind(column, "date"))?
                .this_month();
            Ok(())
        })?;
    }

    for column in &args.previous_month {
        edit_filter(grid, column, |editor| {
            editor
                .as_date_mut()
                .ok_or_else(|| wrong_kind(column, "date"))?
                .previous_month();
            Ok(())
        })?;
    }

    if let Some(search) = &args.search {
        grid.set_search(search).context("Failed to apply search")?;
    }

    for (i, sort) in args.sort.iter().enumerate() {
        let multi = i > 0;
        let activations = if sort.descending { 2 } else { 1 };
        for _ in 0..activations {
            grid.toggle_sort(&sort.column, multi)
                .with_context(|| format!("Cannot sort by `{}`", sort.column))?;
        }
    }

    grid.set_page(args.page.saturating_sub(1));
    if args.select_page {
        grid.toggle_all_page_rows_selected(true);
    }
    Ok(())
}
