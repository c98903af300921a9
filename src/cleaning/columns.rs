//! Table-wide steps: column naming and removal of empty rows.

use crate::error::{CleanError, Result};
use polars::prelude::*;
use std::collections::HashSet;

/// Apply the naming convention to every column.
///
/// Names are lower-cased and spaces become underscores. The abbreviated
/// state column (`st` once lower-cased) is renamed to `state`.
///
/// # Errors
///
/// Returns [`CleanError::DuplicateColumn`] if two names collapse onto the same
/// normalized name.
pub fn clean_column_names(df: &DataFrame) -> Result<DataFrame> {
    let mut seen = HashSet::new();
    let mut renamed = 0_usize;
    let mut columns = Vec::with_capacity(df.width());

    for column in df.get_columns() {
        let name = column.name().as_str();
        let normalized = normalize_column_name(name);
        if !seen.insert(normalized.clone()) {
            return Err(CleanError::DuplicateColumn(normalized));
        }
        if normalized != name {
            renamed += 1;
        }
        // Renamed directly: names such as `*` or `^..$` would be patterns in `col`
        columns.push(column.clone().with_name(normalized.into()));
    }

    tracing::debug!(renamed, "Normalised column names");

    if columns.is_empty() {
        return Ok(df.clone());
    }
    Ok(DataFrame::new(columns)?)
}

/// Normalize a single column name.
pub fn normalize_column_name(name: &str) -> String {
    let normalized = name.to_lowercase().replace(' ', "_");
    if normalized == "st" {
        "state".to_owned()
    } else {
        normalized
    }
}

/// Remove rows in which every column is null.
///
/// Rows with at least one value survive, in their original order.
///
/// # Errors
///
/// Returns [`CleanError::DataProcessing`] if the filter cannot be evaluated.
pub fn drop_null_rows(df: &DataFrame) -> Result<DataFrame> {
    let any_value = df
        .get_columns()
        .iter()
        .map(|column| column.as_materialized_series().is_not_null())
        .reduce(|acc, next| &acc | &next);

    let Some(mask) = any_value else {
        return Ok(df.clone());
    };

    let out = df.filter(&mask)?;
    tracing::debug!(
        dropped = df.height() - out.height(),
        "Dropped fully-null rows"
    );
    Ok(out)
}
