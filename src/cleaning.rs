//! Table cleaning steps.
//!
//! Each step borrows a [`DataFrame`] and returns a new one, so the caller's
//! table is never modified. Steps that target a single column take an
//! `Option<&str>`; `None` selects the documented default column.
//!
//! Column buffers in polars are reference counted, which makes the copy taken
//! at the start of every step cheap: only the column a step rewrites gets new
//! memory.

pub mod categorical;
pub mod columns;
pub mod numeric;
pub mod text;

#[cfg(test)]
mod tests;

pub use categorical::{
    EDUCATION_MAP, STATE_MAP, VEHICLE_CLASS_MAP, clean_education, clean_gender, clean_state,
    clean_vehicle_class,
};
pub use columns::{clean_column_names, drop_null_rows};
pub use numeric::{NUMERIC_COLUMNS, fill_with_mean, numeric_to_int};
pub use text::{clean_lifetime_value, split_keep_middle};

use crate::error::{CleanError, Result};
use polars::prelude::*;

pub const DEFAULT_GENDER_COLUMN: &str = "gender";
pub const DEFAULT_STATE_COLUMN: &str = "state";
pub const DEFAULT_EDUCATION_COLUMN: &str = "education";
pub const DEFAULT_VEHICLE_CLASS_COLUMN: &str = "vehicle_class";
pub const DEFAULT_LIFETIME_VALUE_COLUMN: &str = "customer_lifetime_value";
pub const DEFAULT_COMPLAINTS_COLUMN: &str = "number_of_open_complaints";

/// Look up a column, reporting a missing one as [`CleanError::ColumnNotFound`].
pub(crate) fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Series> {
    match df.column(name) {
        Ok(column) => Ok(column.as_materialized_series()),
        Err(PolarsError::ColumnNotFound(_)) => Err(CleanError::ColumnNotFound(name.to_owned())),
        Err(e) => Err(e.into()),
    }
}

/// View a column as text. A column holding only nulls counts as text.
pub(crate) fn text_values(series: &Series, column: &str) -> Result<StringChunked> {
    match series.dtype() {
        DataType::String => Ok(series.str()?.clone()),
        DataType::Null => Ok(series.cast(&DataType::String)?.str()?.clone()),
        other => Err(CleanError::conversion(
            column,
            None,
            other.to_string(),
            "text",
        )),
    }
}

/// Return a copy of `df` with `values` stored under `column`.
pub(crate) fn replace_column(df: &DataFrame, column: &str, values: Series) -> Result<DataFrame> {
    let mut out = df.clone();
    out.replace(column, values.with_name(column.into()))?;
    Ok(out)
}
