//! Numeric coercion and mean imputation.

use super::{DEFAULT_LIFETIME_VALUE_COLUMN, replace_column, require_column};
use crate::error::{CleanError, Result};
use polars::prelude::*;

/// Columns truncated to integers by [`numeric_to_int`].
pub const NUMERIC_COLUMNS: [&str; 5] = [
    "customer_lifetime_value",
    "income",
    "monthly_premium_auto",
    "number_of_open_complaints",
    "total_claim_amount",
];

/// Convert a column to `f64` and fill its nulls with the column mean.
///
/// Text values are parsed (surrounding whitespace allowed). A parsed `NaN`
/// counts as a missing value. Non-null values are kept as they are.
///
/// # Errors
///
/// - [`CleanError::ColumnNotFound`] if the column is missing
/// - [`CleanError::Conversion`] if a value is not a number
/// - [`CleanError::EmptyColumn`] if there is no value to average
pub fn fill_with_mean(df: &DataFrame, column: Option<&str>) -> Result<DataFrame> {
    let column = column.unwrap_or(DEFAULT_LIFETIME_VALUE_COLUMN);
    let values = to_float(require_column(df, column)?, column)?;

    let mean = values
        .mean()
        .ok_or_else(|| CleanError::EmptyColumn(column.to_owned()))?;

    let filled: Float64Chunked = values
        .into_iter()
        .map(|value| Some(value.unwrap_or(mean)))
        .collect();

    tracing::debug!(
        column,
        mean,
        imputed = values.null_count(),
        "Filled nulls with column mean"
    );

    replace_column(df, column, filled.into_series())
}

/// Truncate every value of the [`NUMERIC_COLUMNS`] to an `i64`.
///
/// Expects upstream steps to have removed nulls and malformed text from
/// these columns.
///
/// # Errors
///
/// - [`CleanError::ColumnNotFound`] if one of the columns is missing
/// - [`CleanError::Conversion`] on a null or non-numeric value, or one that
///   does not fit an `i64`
pub fn numeric_to_int(df: &DataFrame) -> Result<DataFrame> {
    let mut out = df.clone();
    for column in NUMERIC_COLUMNS {
        let values = to_float(require_column(&out, column)?, column)?;
        let truncated = values
            .into_iter()
            .enumerate()
            .map(|(row, value)| match value {
                Some(v) => truncate_to_i64(v)
                    .map(Some)
                    .ok_or_else(|| CleanError::conversion(column, Some(row), v.to_string(), "i64")),
                None => Err(CleanError::conversion(column, Some(row), "null", "i64")),
            })
            .collect::<Result<Int64Chunked>>()?;

        out = replace_column(&out, column, truncated.into_series())?;
    }

    tracing::debug!(columns = NUMERIC_COLUMNS.len(), "Truncated numeric columns to integers");
    Ok(out)
}

// 2^63; `i64::MAX as f64` rounds up to it
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Truncate toward zero, `None` if the result does not fit an `i64`.
fn truncate_to_i64(value: f64) -> Option<i64> {
    let truncated = value.trunc();
    (truncated >= -I64_BOUND && truncated < I64_BOUND).then(|| truncated as i64)
}

/// Coerce a column to `f64`, parsing text values. `NaN` becomes null.
pub(crate) fn to_float(series: &Series, column: &str) -> Result<Float64Chunked> {
    match series.dtype() {
        DataType::String => series
            .str()?
            .into_iter()
            .enumerate()
            .map(|(row, value)| match value {
                None => Ok(None),
                Some(text) => parse_float(text)
                    .ok_or_else(|| CleanError::conversion(column, Some(row), text, "f64")),
            })
            .collect::<Result<Float64Chunked>>(),
        dtype if dtype.is_primitive_numeric() || matches!(dtype, DataType::Null) => Ok(series
            .cast(&DataType::Float64)?
            .f64()?
            .into_iter()
            .map(|value| value.filter(|v| !v.is_nan()))
            .collect()),
        other => Err(CleanError::conversion(column, None, other.to_string(), "f64")),
    }
}

/// `Some(None)` for a `NaN` token, `None` for anything that is not a number.
fn parse_float(text: &str) -> Option<Option<f64>> {
    let value = text.trim().parse::<f64>().ok()?;
    Some((!value.is_nan()).then_some(value))
}
