//! Row sources: the built-in payments sample or a JSON file

use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use datagrid_core::{ColumnDef, FilterKind, Row, Value, filterable_column, selection_column};

/// Rows plus the columns to show them with
pub struct Dataset {
    pub columns: Vec<ColumnDef>,
    pub rows: Vec<Row>,
    pub search_column: Option<String>,
}

/// The payments table the grid was first built around
pub fn sample() -> Dataset {
    let rows = [
        ("728ed52f", 100, "pending", "m@example.com", (2023, 1, 1)),
        ("489e1d42", 125, "processing", "example@gmail.com", (2023, 1, 15)),
        ("8a6d7fde", 250, "success", "test@example.com", (2023, 2, 1)),
        ("a624d78c", 75, "failed", "another@test.com", (2023, 2, 15)),
        ("b8e9f21a", 300, "success", "success@example.com", (2023, 3, 1)),
    ]
    .into_iter()
    .map(|(id, amount, status, email, (y, m, d))| {
        Row::new()
            .with("id", id)
            .with("amount", i64::from(amount))
            .with("status", status)
            .with("email", email)
            .with("createdAt", NaiveDate::from_ymd_opt(y, m, d))
    })
    .collect();

    Dataset {
        columns: vec![
            selection_column(),
            filterable_column("status", "Status", FilterKind::Text),
            filterable_column("email", "Email", FilterKind::Text),
            filterable_column("amount", "Amount", FilterKind::Number),
            filterable_column("createdAt", "Created At", FilterKind::Date),
        ],
        rows,
        search_column: Some("email".to_string()),
    }
}

/// Read an array of JSON objects
pub fn load_rows(path: &Path) -> Result<Vec<Row>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read data file {}", path.display()))?;
    let json: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse data file {}", path.display()))?;
    let serde_json::Value::Array(items) = json else {
        bail!("Data file {} must contain a JSON array of objects", path.display());
    };
    tracing::debug!(path = %path.display(), rows = items.len(), "Loaded data file");
    Ok(items.into_iter().map(Row::from_json).collect())
}

/// Filterable columns for every cell of the first row. Numbers get a number
/// filter, date-like strings a date filter, everything else a text filter.
pub fn infer_columns(rows: &[Row]) -> Vec<ColumnDef> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };
    first
        .columns()
        .map(|id| {
            let kind = first.get(id).map(infer_kind).unwrap_or_default();
            filterable_column(id, "", kind)
        })
        .collect()
}

fn infer_kind(value: &Value) -> FilterKind {
    match value {
        Value::Int(_) | Value::Float(_) => FilterKind::Number,
        Value::Date(_) | Value::DateTime(_) => FilterKind::Date,
        Value::String(_) if value.as_datetime().is_some() => FilterKind::Date,
        _ => FilterKind::Text,
    }
}
