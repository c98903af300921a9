//! Error types for the cleaning pipeline.
//!
//! Every step returns [`Result`], so a failure in any step can be propagated
//! with `?` and reaches the caller unchanged:
//!
//! ```
//! use custclean::cleaning::clean_gender;
//! use custclean::error::CleanError;
//! use polars::prelude::*;
//!
//! let df = df!("name" => &["Ana"]).unwrap();
//! match clean_gender(&df, None) {
//!     Err(CleanError::ColumnNotFound(column)) => assert_eq!(column, "gender"),
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! ```

use std::fmt;

/// Main error type for cleaning operations.
#[derive(Debug)]
pub enum CleanError {
    /// A step was pointed at a column the table does not have
    ColumnNotFound(String),

    /// A value could not be coerced to the type a step requires
    Conversion {
        column: String,
        /// Row index of the offending value, `None` when the whole column is unusable
        row: Option<usize>,
        value: String,
        target: &'static str,
    },

    /// Mean requested on a column without a single non-null value
    EmptyColumn(String),

    /// Two columns ended up with the same name after normalization
    DuplicateColumn(String),

    /// Dataframe engine errors
    DataProcessing(String),

    /// I/O errors while reading or writing pipeline specs
    Io(std::io::Error),

    /// Invalid pipeline spec
    Config(String),
}

impl CleanError {
    pub(crate) fn conversion(
        column: &str,
        row: Option<usize>,
        value: impl Into<String>,
        target: &'static str,
    ) -> Self {
        Self::Conversion {
            column: column.to_owned(),
            row,
            value: value.into(),
            target,
        }
    }
}

impl fmt::Display for CleanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColumnNotFound(column) => write!(f, "Column not found: {column}"),
            Self::Conversion {
                column,
                row: Some(row),
                value,
                target,
            } => write!(
                f,
                "Cannot convert '{value}' in column '{column}' (row {row}) to {target}"
            ),
            Self::Conversion {
                column,
                row: None,
                value,
                target,
            } => write!(f, "Cannot convert column '{column}' of type {value} to {target}"),
            Self::EmptyColumn(column) => {
                write!(f, "Column '{column}' has no non-null values to average")
            }
            Self::DuplicateColumn(column) => {
                write!(f, "Duplicate column name after normalization: {column}")
            }
            Self::DataProcessing(msg) => write!(f, "Data processing error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CleanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CleanError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for CleanError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

impl From<polars::error::PolarsError> for CleanError {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::DataProcessing(err.to_string())
    }
}

/// Result type alias for cleaning operations.
pub type Result<T> = std::result::Result<T, CleanError>;
