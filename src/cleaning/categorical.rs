//! Categorical value cleaners: gender codes and fixed synonym mappings.

use super::{
    DEFAULT_EDUCATION_COLUMN, DEFAULT_GENDER_COLUMN, DEFAULT_STATE_COLUMN,
    DEFAULT_VEHICLE_CLASS_COLUMN, replace_column, require_column, text_values,
};
use crate::error::Result;
use polars::prelude::*;

/// State abbreviations and nicknames mapped to the full state name.
pub static STATE_MAP: &[(&str, &str)] = &[
    ("AZ", "Arizona"),
    ("Cali", "California"),
    ("WA", "Washington"),
];

pub static EDUCATION_MAP: &[(&str, &str)] = &[("Bachelors", "Bachelor")];

/// Premium vehicle classes collapsed into a single `Luxury` class.
pub static VEHICLE_CLASS_MAP: &[(&str, &str)] = &[
    ("Sports Car", "Luxury"),
    ("Luxury SUV", "Luxury"),
    ("Luxury Car", "Luxury"),
];

/// Reduce gender values to `M`, `F` or `D`.
///
/// The first character is upper-cased; anything other than `M` or `F`,
/// including nulls and empty strings, becomes `D`.
///
/// # Errors
///
/// [`ColumnNotFound`](crate::error::CleanError::ColumnNotFound) if the column is
/// missing, [`Conversion`](crate::error::CleanError::Conversion) if it does not
/// hold text.
pub fn clean_gender(df: &DataFrame, column: Option<&str>) -> Result<DataFrame> {
    let column = column.unwrap_or(DEFAULT_GENDER_COLUMN);
    let values = text_values(require_column(df, column)?, column)?;

    let mut diverse = 0_usize;
    let cleaned: StringChunked = values
        .into_iter()
        .map(|value| {
            let code = gender_code(value);
            if code == "D" {
                diverse += 1;
            }
            Some(code)
        })
        .collect();

    tracing::debug!(column, diverse, "Normalised gender codes");

    replace_column(df, column, cleaned.into_series())
}

fn gender_code(value: Option<&str>) -> &'static str {
    match value.and_then(|v| v.chars().next()) {
        Some('m' | 'M') => "M",
        Some('f' | 'F') => "F",
        _ => "D",
    }
}

/// Expand state abbreviations (`AZ`, `Cali`, `WA`) to full names.
///
/// # Errors
///
/// Returns [`ColumnNotFound`](crate::error::CleanError::ColumnNotFound) if the
/// column is missing.
pub fn clean_state(df: &DataFrame, column: Option<&str>) -> Result<DataFrame> {
    replace_values(df, column.unwrap_or(DEFAULT_STATE_COLUMN), STATE_MAP)
}

/// Replace `Bachelors` with `Bachelor`.
///
/// # Errors
///
/// Returns [`ColumnNotFound`](crate::error::CleanError::ColumnNotFound) if the
/// column is missing.
pub fn clean_education(df: &DataFrame, column: Option<&str>) -> Result<DataFrame> {
    replace_values(df, column.unwrap_or(DEFAULT_EDUCATION_COLUMN), EDUCATION_MAP)
}

/// Collapse sports and luxury vehicle classes into `Luxury`.
///
/// # Errors
///
/// Returns [`ColumnNotFound`](crate::error::CleanError::ColumnNotFound) if the
/// column is missing.
pub fn clean_vehicle_class(df: &DataFrame, column: Option<&str>) -> Result<DataFrame> {
    replace_values(
        df,
        column.unwrap_or(DEFAULT_VEHICLE_CLASS_COLUMN),
        VEHICLE_CLASS_MAP,
    )
}

/// Swap values that exactly match a key in `mapping`; everything else,
/// nulls included, is kept as is.
fn replace_values(
    df: &DataFrame,
    column: &str,
    mapping: &'static [(&'static str, &'static str)],
) -> Result<DataFrame> {
    let series = require_column(df, column)?;

    // Only text can match a key
    if series.dtype() != &DataType::String {
        return Ok(df.clone());
    }

    let mut replaced = 0_usize;
    let cleaned: StringChunked = series
        .str()?
        .into_iter()
        .map(|value| {
            value.map(|v| match lookup(mapping, v) {
                Some(canonical) => {
                    replaced += 1;
                    canonical
                }
                None => v,
            })
        })
        .collect();

    tracing::debug!(column, replaced, "Replaced categorical values");

    replace_column(df, column, cleaned.into_series())
}

fn lookup(mapping: &[(&str, &'static str)], value: &str) -> Option<&'static str> {
    mapping
        .iter()
        .find(|(key, _)| *key == value)
        .map(|(_, canonical)| *canonical)
}
