//! Sorting state for the table
//!
//! Columns are sorted in priority order (first = highest priority). Null
//! cells sort last in either direction.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::types::{RowData, Value};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// One sorted column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSort {
    pub column_id: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortingState {
    columns: Vec<ColumnSort>,
}

impl SortingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> &[ColumnSort] {
        &self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn clear(&mut self) {
        self.columns.clear();
    }

    /// Current direction of `column_id`, `None` when unsorted
    pub fn direction(&self, column_id: &str) -> Option<SortDirection> {
        self.columns
            .iter()
            .find(|c| c.column_id == column_id)
            .map(|c| c.direction)
    }

    /// Set or remove the sort of one column. Without `multi`, every other
    /// column's sort is dropped.
    pub fn set(&mut self, column_id: &str, direction: Option<SortDirection>, multi: bool) {
        if !multi {
            self.columns.retain(|c| c.column_id == column_id);
        }
        match direction {
            Some(direction) => {
                match self.columns.iter_mut().find(|c| c.column_id == column_id) {
                    Some(existing) => existing.direction = direction,
                    None => self.columns.push(ColumnSort {
                        column_id: column_id.to_string(),
                        direction,
                    }),
                }
            }
            None => self.columns.retain(|c| c.column_id != column_id),
        }
    }

    /// Advance one column through unsorted -> ascending -> descending -> unsorted.
    /// Returns the new direction.
    pub fn toggle(&mut self, column_id: &str, multi: bool) -> Option<SortDirection> {
        let next = match self.direction(column_id) {
            None => Some(SortDirection::Ascending),
            Some(SortDirection::Ascending) => Some(SortDirection::Descending),
            Some(SortDirection::Descending) => None,
        };
        self.set(column_id, next, multi);
        next
    }

    /// Compare two rows using all sorted columns
    pub fn compare_rows<R: RowData>(&self, row_a: &R, row_b: &R) -> Ordering {
        for sort in &self.columns {
            let a = row_a.value(&sort.column_id);
            let b = row_b.value(&sort.column_id);

            let ordering = match (a.is_null(), b.is_null()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => {
                    let ordering = compare_non_null_values(&a, &b);
                    match sort.direction {
                        SortDirection::Ascending => ordering,
                        SortDirection::Descending => ordering.reverse(),
                    }
                }
            };

            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }

    /// Stable sort of row indices into `rows`
    pub fn sort_indices<R: RowData>(&self, indices: &mut [usize], rows: &[R]) {
        if self.is_empty() {
            return;
        }
        indices.sort_by(|&a, &b| self.compare_rows(&rows[a], &rows[b]));
    }
}

/// Value classes in ascending sort order. Numeric and date-like strings
/// join the numeric and temporal classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum SortClass {
    Numeric,
    Temporal,
    Text,
    Bool,
}

fn sort_class(value: &Value) -> SortClass {
    match value {
        Value::Int(_) | Value::Float(_) => SortClass::Numeric,
        Value::Date(_) | Value::DateTime(_) => SortClass::Temporal,
        Value::Bool(_) => SortClass::Bool,
        Value::String(_) if value.as_f64().is_some() => SortClass::Numeric,
        Value::String(_) if value.as_datetime().is_some() => SortClass::Temporal,
        _ => SortClass::Text,
    }
}

/// Tie-break between variants whose class key compares equal
fn variant_rank(value: &Value) -> u8 {
    match value {
        Value::Int(_) | Value::Date(_) | Value::Bool(_) => 0,
        Value::Float(_) | Value::DateTime(_) => 1,
        Value::String(_) => 2,
        Value::Null => 3,
    }
}

fn numeric_key(value: &Value) -> f64 {
    match value {
        Value::Float(v) => *v,
        _ => value.as_f64().unwrap_or(f64::NAN),
    }
}

/// Compare two non-null values.
///
/// This is a total order over every variant mix: values are ranked by class
/// (numbers, then dates, then text, then booleans), compared by their class
/// key, and ties are broken by variant and raw value.
pub fn compare_non_null_values(a: &Value, b: &Value) -> Ordering {
    let class = sort_class(a);
    class.cmp(&sort_class(b)).then_with(|| {
        let by_key = match class {
            SortClass::Numeric => numeric_key(a).total_cmp(&numeric_key(b)),
            SortClass::Temporal => a.as_datetime().cmp(&b.as_datetime()),
            SortClass::Text | SortClass::Bool => Ordering::Equal,
        };
        by_key
            .then_with(|| variant_rank(a).cmp(&variant_rank(b)))
            .then_with(|| match (a, b) {
                (Value::Int(a), Value::Int(b)) => a.cmp(b),
                (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
                (Value::String(a), Value::String(b)) => a.cmp(b),
                _ => Ordering::Equal,
            })
    })
}
