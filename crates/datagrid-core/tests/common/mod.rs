//! Common test fixtures

use chrono::NaiveDate;
use datagrid_core::{ColumnDef, FilterKind, Row, Table, filterable_column, selection_column};

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn payment_columns() -> Vec<ColumnDef> {
    vec![
        selection_column(),
        filterable_column("status", "Status", FilterKind::Text),
        filterable_column("email", "Email", FilterKind::Text),
        filterable_column("amount", "Amount", FilterKind::Number),
        filterable_column("createdAt", "Created At", FilterKind::Date),
    ]
}

pub fn payments() -> Vec<Row> {
    [
        ("728ed52f", 100, "pending", "m@example.com", day(2023, 1, 1)),
        ("489e1d42", 125, "processing", "example@gmail.com", day(2023, 1, 15)),
        ("8a6d7fde", 250, "success", "test@example.com", day(2023, 2, 1)),
        ("a624d78c", 75, "failed", "another@test.com", day(2023, 2, 15)),
        ("b8e9f21a", 300, "success", "success@example.com", day(2023, 3, 1)),
    ]
    .into_iter()
    .map(|(id, amount, status, email, created)| {
        Row::new()
            .with("id", id)
            .with("amount", amount as i64)
            .with("status", status)
            .with("email", email)
            .with("createdAt", created)
    })
    .collect()
}

pub fn payment_table() -> Table<Row> {
    Table::new(payment_columns(), payments()).with_search_column(Some("email".to_string()))
}
