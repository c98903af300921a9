//! Text repairs applied before numeric coercion.

use super::{
    DEFAULT_COMPLAINTS_COLUMN, DEFAULT_LIFETIME_VALUE_COLUMN, replace_column, require_column,
    text_values,
};
use crate::error::Result;
use polars::prelude::*;

/// Strip `%` signs from customer lifetime values.
///
/// The column stays text; [`fill_with_mean`](super::fill_with_mean) performs
/// the numeric conversion afterwards. Nulls are kept. A column that is already
/// numeric has nothing to strip and is returned unchanged.
///
/// # Errors
///
/// [`ColumnNotFound`](crate::error::CleanError::ColumnNotFound) if the column is
/// missing, [`Conversion`](crate::error::CleanError::Conversion) if it holds
/// neither text nor numbers.
pub fn clean_lifetime_value(df: &DataFrame, column: Option<&str>) -> Result<DataFrame> {
    let column = column.unwrap_or(DEFAULT_LIFETIME_VALUE_COLUMN);
    let series = require_column(df, column)?;
    if series.dtype().is_primitive_numeric() {
        return Ok(df.clone());
    }

    let values = text_values(series, column)?;
    let mut stripped = 0_usize;
    let cleaned: StringChunked = values
        .into_iter()
        .map(|value| {
            value.map(|v| {
                if v.contains('%') {
                    stripped += 1;
                }
                v.replace('%', "")
            })
        })
        .collect();

    tracing::debug!(column, stripped, "Stripped percent signs");

    replace_column(df, column, cleaned.into_series())
}

/// Keep only the middle part of `/`-delimited complaint counts.
///
/// `"1/5/00"` becomes `"5"`. Values with fewer than two segments, and nulls,
/// come out as null.
///
/// # Errors
///
/// [`ColumnNotFound`](crate::error::CleanError::ColumnNotFound) if the column is
/// missing, [`Conversion`](crate::error::CleanError::Conversion) if it does not
/// hold text.
pub fn split_keep_middle(df: &DataFrame, column: Option<&str>) -> Result<DataFrame> {
    let column = column.unwrap_or(DEFAULT_COMPLAINTS_COLUMN);
    let values = text_values(require_column(df, column)?, column)?;

    let cleaned: StringChunked = values
        .into_iter()
        .map(|value| value.and_then(|v| v.split('/').nth(1)))
        .collect();

    tracing::debug!(
        column,
        nulls = cleaned.null_count(),
        "Kept middle segment of compound values"
    );

    replace_column(df, column, cleaned.into_series())
}
