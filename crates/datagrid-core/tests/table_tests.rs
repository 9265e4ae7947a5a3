//! Integration tests for the table state engine
//!
//! Exercises column filters, global search, facets, sorting, pagination and
//! row selection together on the sample payments data.

mod common;

use std::collections::BTreeMap;

use datagrid_core::{
    FilterKind, FilterValue, GlobalSearch, GridError, Row, RowData, SortDirection, TableState,
    Value,
};
use pretty_assertions::assert_eq;

use common::{day, payment_table};

fn ids(table: &datagrid_core::Table<Row>, indices: &[usize]) -> Vec<String> {
    indices
        .iter()
        .map(|i| table.rows()[*i].value("id").to_string())
        .collect()
}

// ============ Column filters ============

#[test]
fn text_filter_keeps_selected_statuses() {
    let mut table = payment_table();
    let search = GlobalSearch::new();

    table
        .set_filter_value("status", FilterValue::text(["success", "failed"]))
        .unwrap();

    assert_eq!(
        ids(&table, &table.filtered_rows(&search)),
        vec!["8a6d7fde", "a624d78c", "b8e9f21a"]
    );
    assert!(table.is_filtered("status"));
}

#[test]
fn filters_combine_with_and() {
    let mut table = payment_table();
    let search = GlobalSearch::new();

    table
        .set_filter_value("status", FilterValue::text(["success"]))
        .unwrap();
    table
        .set_filter_value("amount", Some(FilterValue::number(260.0, f64::INFINITY)))
        .unwrap();

    assert_eq!(ids(&table, &table.filtered_rows(&search)), vec!["b8e9f21a"]);
}

#[test]
fn date_filter_includes_whole_end_day() {
    let mut table = payment_table();
    let search = GlobalSearch::new();

    table
        .set_filter_value(
            "createdAt",
            Some(FilterValue::date(day(2023, 1, 1), day(2023, 2, 1))),
        )
        .unwrap();

    assert_eq!(
        ids(&table, &table.filtered_rows(&search)),
        vec!["728ed52f", "489e1d42", "8a6d7fde"]
    );
}

#[test]
fn clearing_a_filter_removes_its_entry() {
    let mut table = payment_table();
    table
        .set_filter_value("amount", Some(FilterValue::number(0.0, 100.0)))
        .unwrap();
    table.set_filter_value("amount", None).unwrap();

    assert!(table.column_filters().is_empty());
    assert_eq!(table.filter_value("amount"), None);
}

#[test]
fn reapplying_a_filter_keeps_its_position() {
    let mut table = payment_table();
    table
        .set_filter_value("status", FilterValue::text(["success"]))
        .unwrap();
    table
        .set_filter_value("amount", Some(FilterValue::number(0.0, 100.0)))
        .unwrap();
    table
        .set_filter_value("status", FilterValue::text(["failed"]))
        .unwrap();

    let order: Vec<&str> = table
        .column_filters()
        .iter()
        .map(|f| f.column_id.as_str())
        .collect();
    assert_eq!(order, vec!["status", "amount"]);
}

#[test]
fn filter_contract_violations_are_errors() {
    let mut table = payment_table();

    assert!(matches!(
        table.set_filter_value("nope", FilterValue::text(["x"])),
        Err(GridError::UnknownColumn(_))
    ));
    assert!(matches!(
        table.set_filter_value("select", FilterValue::text(["x"])),
        Err(GridError::NotFilterable(_))
    ));
    assert!(matches!(
        table.set_filter_value("amount", FilterValue::text(["x"])),
        Err(GridError::KindMismatch {
            expected: FilterKind::Number,
            actual: FilterKind::Text,
            ..
        })
    ));
    assert!(table.column_filters().is_empty());
}

#[test]
fn reset_column_filters_clears_everything() {
    let mut table = payment_table();
    table
        .set_filter_value("status", FilterValue::text(["success"]))
        .unwrap();
    table
        .set_filter_value("amount", Some(FilterValue::number(0.0, 100.0)))
        .unwrap();

    table.reset_column_filters();
    assert!(table.column_filters().is_empty());
    assert_eq!(table.filtered_row_count(&GlobalSearch::new()), 5);
}

// ============ Global search ============

#[test]
fn global_search_matches_only_the_search_column() {
    let table = payment_table();
    let mut search = GlobalSearch::new();

    // "success" is a status value and also part of one email address
    search.set_query("SUCCESS");
    assert_eq!(ids(&table, &table.filtered_rows(&search)), vec!["b8e9f21a"]);

    search.set_query("example");
    assert_eq!(table.filtered_row_count(&search), 4);
}

#[test]
fn global_search_without_search_column_matches_any_column() {
    let table = payment_table().with_search_column(None);
    let mut search = GlobalSearch::new();
    search.set_query("success");
    assert_eq!(
        ids(&table, &table.filtered_rows(&search)),
        vec!["8a6d7fde", "b8e9f21a"]
    );
}

// ============ Facets ============

#[test]
fn facets_count_distinct_values() {
    let table = payment_table();
    let facets = table
        .faceted_unique_values("status", &GlobalSearch::new())
        .unwrap();

    let expected: BTreeMap<String, usize> = [
        ("failed", 1),
        ("pending", 1),
        ("processing", 1),
        ("success", 2),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();
    assert_eq!(facets, expected);
}

#[test]
fn facets_ignore_own_filter_but_respect_others() {
    let mut table = payment_table();
    table
        .set_filter_value("status", FilterValue::text(["success"]))
        .unwrap();
    table
        .set_filter_value("amount", Some(FilterValue::number(100.0, 260.0)))
        .unwrap();

    let facets = table
        .faceted_unique_values("status", &GlobalSearch::new())
        .unwrap();
    let keys: Vec<&str> = facets.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["pending", "processing", "success"]);
}

#[test]
fn facets_of_unknown_column_is_an_error() {
    let table = payment_table();
    assert!(table
        .faceted_unique_values("nope", &GlobalSearch::new())
        .is_err());
}

// ============ Sorting ============

#[test]
fn sorting_orders_filtered_rows() {
    let mut table = payment_table();
    let search = GlobalSearch::new();

    assert_eq!(
        table.toggle_sorting("amount", false).unwrap(),
        Some(SortDirection::Ascending)
    );
    let amounts: Vec<Value> = table
        .sorted_rows(&search)
        .into_iter()
        .map(|i| table.rows()[i].value("amount"))
        .collect();
    assert_eq!(
        amounts,
        [75, 100, 125, 250, 300].map(Value::Int).to_vec()
    );

    table.toggle_sorting("amount", false).unwrap();
    assert_eq!(
        ids(&table, &table.sorted_rows(&search))[0],
        "b8e9f21a".to_string()
    );

    assert_eq!(table.toggle_sorting("amount", false).unwrap(), None);
    assert_eq!(
        ids(&table, &table.sorted_rows(&search)),
        ids(&table, &table.filtered_rows(&search))
    );
}

#[test]
fn non_sortable_columns_ignore_toggles() {
    let mut table = payment_table();
    assert_eq!(table.toggle_sorting("select", false).unwrap(), None);
    assert!(table.sorting().is_empty());
}

// ============ Visibility ============

#[test]
fn hidden_columns_still_filter() {
    let mut table = payment_table();
    table.set_column_visibility("status", false).unwrap();
    table
        .set_filter_value("status", FilterValue::text(["failed"]))
        .unwrap();

    assert!(!table.visible_columns().any(|c| c.id == "status"));
    assert_eq!(table.filtered_row_count(&GlobalSearch::new()), 1);
}

#[test]
fn columns_without_hiding_stay_visible() {
    let mut table = payment_table();
    assert!(table.toggle_column_visibility("select").unwrap());
    assert!(table.is_column_visible("select"));
}

// ============ Pagination and selection ============

#[test]
fn pagination_slices_sorted_rows_and_resets_on_filter() {
    let mut table = payment_table().with_page_size(2);
    let search = GlobalSearch::new();
    table.toggle_sorting("amount", false).unwrap();

    let total = table.filtered_row_count(&search);
    table.pagination_mut().next(total);
    assert_eq!(ids(&table, &table.page_rows(&search)), vec!["489e1d42", "8a6d7fde"]);

    table
        .set_filter_value("status", FilterValue::text(["success"]))
        .unwrap();
    assert_eq!(table.pagination().page_index(), 0);
    assert_eq!(ids(&table, &table.page_rows(&search)), vec!["8a6d7fde", "b8e9f21a"]);
}

#[test]
fn select_all_page_rows() {
    let mut table = payment_table().with_page_size(2);
    let search = GlobalSearch::new();

    table.toggle_row_selected(0);
    assert!(table.is_some_page_rows_selected(&search));
    assert!(!table.is_all_page_rows_selected(&search));

    table.toggle_all_page_rows_selected(true, &search);
    assert!(table.is_all_page_rows_selected(&search));
    assert_eq!(table.selected_rows().len(), 2);

    assert!(!table.toggle_row_selected(99));
    table.toggle_all_page_rows_selected(false, &search);
    assert_eq!(table.selection().count(), 0);
}

// ============ State snapshot ============

#[test]
fn state_serializes_to_json() {
    let mut table = payment_table();
    table
        .set_filter_value("amount", Some(FilterValue::number(50.0, f64::INFINITY)))
        .unwrap();
    table.toggle_sorting("email", false).unwrap();

    let json = serde_json::to_value(table.state()).unwrap();
    assert_eq!(
        json["column_filters"][0],
        serde_json::json!({
            "column_id": "amount",
            "value": {"kind": "number", "value": {"min": 50.0, "max": null}}
        })
    );

    let back: TableState = serde_json::from_value(json).unwrap();
    assert_eq!(&back, table.state());
}
