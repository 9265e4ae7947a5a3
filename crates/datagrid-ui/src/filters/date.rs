//! Date range editor: two ISO date inputs, a range picker and month shortcuts
//!
//! The pending value follows the fields: one side set gives a single-day
//! range on that date, both sides give `[from, to]` exactly as entered.

use chrono::{Datelike, Local, NaiveDate};
use datagrid_core::{DateRange, FilterValue};

const INPUT_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateFilter {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl DateFilter {
    pub const FROM_LABEL: &'static str = "From Date";
    pub const TO_LABEL: &'static str = "To Date";
    pub const THIS_MONTH_LABEL: &'static str = "This Month";
    pub const PREVIOUS_MONTH_LABEL: &'static str = "Previous Month";

    pub fn new(committed: Option<&FilterValue>) -> Self {
        match committed {
            Some(FilterValue::Date(range)) => Self {
                from: Some(range.from),
                to: Some(range.to),
            },
            _ => Self::default(),
        }
    }

    pub fn from(&self) -> Option<NaiveDate> {
        self.from
    }

    pub fn to(&self) -> Option<NaiveDate> {
        self.to
    }

    /// Text of the "From Date" input
    pub fn from_input(&self) -> String {
        format_input(self.from)
    }

    /// Text of the "To Date" input
    pub fn to_input(&self) -> String {
        format_input(self.to)
    }

    /// Edit the "From Date" input. Empty text clears the field; text that is
    /// not a `YYYY-MM-DD` date is ignored.
    pub fn set_from_input(&mut self, text: &str) -> Option<FilterValue> {
        if let Some(parsed) = parse_input(text) {
            self.from = parsed;
        }
        self.value()
    }

    /// Edit the "To Date" input, same rules as [`Self::set_from_input`]
    pub fn set_to_input(&mut self, text: &str) -> Option<FilterValue> {
        if let Some(parsed) = parse_input(text) {
            self.to = parsed;
        }
        self.value()
    }

    /// Range picker selection
    pub fn select_range(&mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Option<FilterValue> {
        self.from = from;
        self.to = to;
        self.value()
    }

    /// First through last day of the month containing `today`
    pub fn this_month_from(&mut self, today: NaiveDate) -> Option<FilterValue> {
        if let Some((first, last)) = month_bounds(today.year(), today.month()) {
            self.from = Some(first);
            self.to = Some(last);
        }
        self.value()
    }

    /// First through last day of the month before the one containing `today`
    pub fn previous_month_from(&mut self, today: NaiveDate) -> Option<FilterValue> {
        let (year, month) = match today.month() {
            1 => (today.year() - 1, 12),
            month => (today.year(), month - 1),
        };
        if let Some((first, last)) = month_bounds(year, month) {
            self.from = Some(first);
            self.to = Some(last);
        }
        self.value()
    }

    pub fn this_month(&mut self) -> Option<FilterValue> {
        self.this_month_from(Local::now().date_naive())
    }

    pub fn previous_month(&mut self) -> Option<FilterValue> {
        self.previous_month_from(Local::now().date_naive())
    }

    pub fn clear(&mut self) {
        self.from = None;
        self.to = None;
    }

    pub fn value(&self) -> Option<FilterValue> {
        let range = match (self.from, self.to) {
            (Some(from), Some(to)) => DateRange::new(from, to),
            (Some(day), None) | (None, Some(day)) => DateRange::single_day(day),
            (None, None) => return None,
        };
        Some(FilterValue::Date(range))
    }
}

fn format_input(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

/// `Some(None)` clears the field, `None` leaves it untouched
fn parse_input(text: &str) -> Option<Option<NaiveDate>> {
    let text = text.trim();
    if text.is_empty() {
        return Some(None);
    }
    match NaiveDate::parse_from_str(text, INPUT_FORMAT) {
        Ok(date) => Some(Some(date)),
        Err(err) => {
            tracing::trace!(input = text, error = %err, "Ignoring invalid date input");
            None
        }
    }
}

fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = match month {
        12 => NaiveDate::from_ymd_opt(year + 1, 1, 1)?,
        _ => NaiveDate::from_ymd_opt(year, month + 1, 1)?,
    };
    Some((first, next_first.pred_opt()?))
}
