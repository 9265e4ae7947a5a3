//! Filter editors, one per [`FilterKind`]
//!
//! An editor holds the pending (uncommitted) value of one column's filter.
//! Every edit returns the new pending value; nothing reaches the table until
//! the hosting popover applies it.

mod date;
mod number;
mod text;

use datagrid_core::{FilterKind, FilterValue};

pub use date::DateFilter;
pub use number::NumberFilter;
pub use text::{TextFilter, TextOption};

#[derive(Debug, Clone)]
pub enum FilterEditor {
    Text(TextFilter),
    Number(NumberFilter),
    Date(DateFilter),
}

impl FilterEditor {
    pub fn kind(&self) -> FilterKind {
        match self {
            Self::Text(_) => FilterKind::Text,
            Self::Number(_) => FilterKind::Number,
            Self::Date(_) => FilterKind::Date,
        }
    }

    pub fn value(&self) -> Option<FilterValue> {
        match self {
            Self::Text(editor) => editor.value(),
            Self::Number(editor) => editor.value(),
            Self::Date(editor) => editor.value(),
        }
    }

    pub fn clear(&mut self) {
        match self {
            Self::Text(editor) => editor.clear(),
            Self::Number(editor) => editor.clear(),
            Self::Date(editor) => editor.clear(),
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut TextFilter> {
        match self {
            Self::Text(editor) => Some(editor),
            _ => None,
        }
    }

    pub fn as_number_mut(&mut self) -> Option<&mut NumberFilter> {
        match self {
            Self::Number(editor) => Some(editor),
            _ => None,
        }
    }

    pub fn as_date_mut(&mut self) -> Option<&mut DateFilter> {
        match self {
            Self::Date(editor) => Some(editor),
            _ => None,
        }
    }
}
