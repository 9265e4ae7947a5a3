//! Error types for datagrid

use thiserror::Error;

use crate::filter::FilterKind;

/// Core error type for datagrid operations
#[derive(Error, Debug)]
pub enum GridError {
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Column `{0}` does not support filtering")]
    NotFilterable(String),

    #[error("Column `{column}` filters by {expected:?}, got a {actual:?} value")]
    KindMismatch {
        column: String,
        expected: FilterKind,
        actual: FilterKind,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for datagrid operations
pub type Result<T> = std::result::Result<T, GridError>;
