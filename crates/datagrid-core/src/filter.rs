//! Column filter criteria and their row predicates
//!
//! A committed column filter is always "active": text filters carry a
//! non-empty selection and range filters carry both bounds. Clearing a filter
//! removes it from the table instead of storing an empty placeholder.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::types::Value;

/// The kind of filter a column supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    /// Multi-select over the column's distinct values
    #[default]
    Text,
    /// Inclusive numeric range
    Number,
    /// Inclusive calendar date range
    Date,
}

impl FilterKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
        }
    }

    pub fn all() -> &'static [FilterKind] {
        &[Self::Text, Self::Number, Self::Date]
    }
}

impl std::str::FromStr for FilterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "number" => Ok(Self::Number),
            "date" => Ok(Self::Date),
            other => Err(format!("unknown filter kind `{other}`")),
        }
    }
}

/// Inclusive numeric range. Open bounds are the infinities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumberRange {
    #[serde(with = "open_bound::lower")]
    pub min: f64,
    #[serde(with = "open_bound::upper")]
    pub max: f64,
}

impl NumberRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Range from optional bounds, `None` when both are open
    pub fn from_bounds(min: Option<f64>, max: Option<f64>) -> Option<Self> {
        if min.is_none() && max.is_none() {
            return None;
        }
        Some(Self {
            min: min.unwrap_or(f64::NEG_INFINITY),
            max: max.unwrap_or(f64::INFINITY),
        })
    }

    /// Lower bound, `None` when open
    pub fn lower(&self) -> Option<f64> {
        self.min.is_finite().then_some(self.min)
    }

    /// Upper bound, `None` when open
    pub fn upper(&self) -> Option<f64> {
        self.max.is_finite().then_some(self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Inclusive range of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// Range as entered. `from` is not required to precede `to`; an inverted
    /// range matches no instant.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    pub fn single_day(day: NaiveDate) -> Self {
        Self { from: day, to: day }
    }

    pub fn is_single_day(&self) -> bool {
        self.from == self.to
    }

    /// First instant of `from`
    pub fn start(&self) -> NaiveDateTime {
        self.from.and_time(NaiveTime::MIN)
    }

    /// From the start of `from` through any time of day on `to`
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start() <= instant && instant.date() <= self.to
    }
}

/// A committed filter value, tagged by kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FilterValue {
    Text(BTreeSet<String>),
    Number(NumberRange),
    Date(DateRange),
}

impl FilterValue {
    /// Text filter from selected values, `None` for an empty selection
    pub fn text<I, S>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let selected: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        (!selected.is_empty()).then_some(Self::Text(selected))
    }

    pub fn number(min: f64, max: f64) -> Self {
        Self::Number(NumberRange::new(min, max))
    }

    pub fn date(from: NaiveDate, to: NaiveDate) -> Self {
        Self::Date(DateRange::new(from, to))
    }

    pub fn kind(&self) -> FilterKind {
        match self {
            Self::Text(_) => FilterKind::Text,
            Self::Number(_) => FilterKind::Number,
            Self::Date(_) => FilterKind::Date,
        }
    }

    /// Evaluate this criterion against one cell
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::Text(selected) => text_matches(value, selected),
            Self::Number(range) => number_matches(value, range),
            Self::Date(range) => date_matches(value, range),
        }
    }
}

/// Membership of the cell's display text in the selection
pub fn text_matches(value: &Value, selected: &BTreeSet<String>) -> bool {
    value
        .filter_text()
        .is_some_and(|text| selected.contains(&text))
}

/// Inclusive on both ends; non-numeric cells never match
pub fn number_matches(value: &Value, range: &NumberRange) -> bool {
    value.as_f64().is_some_and(|v| range.contains(v))
}

/// `[start of from, end of to]`, inclusive; unparseable cells never match
pub fn date_matches(value: &Value, range: &DateRange) -> bool {
    value.as_datetime().is_some_and(|instant| range.contains(instant))
}

/// The active filter attached to one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnFilter {
    pub column_id: String,
    pub value: FilterValue,
}

impl ColumnFilter {
    pub fn new(column_id: impl Into<String>, value: FilterValue) -> Self {
        Self {
            column_id: column_id.into(),
            value,
        }
    }

    pub fn kind(&self) -> FilterKind {
        self.value.kind()
    }
}

/// Serde helpers writing open range bounds as `null`
mod open_bound {
    use serde::{Deserialize, Deserializer, Serializer};

    fn serialize_finite<S: Serializer>(value: f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_some(&value)
        } else {
            serializer.serialize_none()
        }
    }

    pub mod lower {
        use super::*;

        pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
            serialize_finite(*value, serializer)
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
            Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NEG_INFINITY))
        }
    }

    pub mod upper {
        use super::*;

        pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
            serialize_finite(*value, serializer)
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
            Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
        }
    }
}
