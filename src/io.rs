//! Loading and saving tables.
//!
//! These helpers sit outside the cleaning core: the steps in
//! [`cleaning`](crate::cleaning) only ever see in-memory tables. The format is
//! chosen from the file extension.

use anyhow::{Context as _, Result};
use polars::prelude::*;
use std::path::{Path, PathBuf};

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// Read a CSV, Parquet or JSON file into a table
///
/// # Errors
///
/// Fails on an unsupported extension or when the file cannot be parsed.
pub fn load_df(path: &Path) -> Result<DataFrame> {
    let ext = extension(path);
    let df = match ext.as_str() {
        "csv" => LazyCsvReader::new(path)
            .with_infer_schema_length(Some(10000))
            .with_has_header(true)
            .finish()?
            .collect()
            .context("Failed to read CSV")?,
        "parquet" => ParquetReader::new(std::fs::File::open(path)?)
            .finish()
            .context("Failed to read Parquet")?,
        "json" => JsonReader::new(std::fs::File::open(path)?)
            .finish()
            .context("Failed to read JSON")?,
        _ => return Err(anyhow::anyhow!("Unsupported file extension: {ext}")),
    };

    tracing::info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "Loaded table"
    );
    Ok(df)
}

/// Write a table; Parquet and JSON by extension, CSV otherwise
///
/// # Errors
///
/// Fails if the file cannot be created or written.
pub fn save_df(df: &mut DataFrame, path: &Path) -> Result<()> {
    match extension(path).as_str() {
        "parquet" => {
            let file = std::fs::File::create(path).context("Failed to create Parquet file")?;
            ParquetWriter::new(file)
                .finish(df)
                .context("Failed to write Parquet file")?;
        }
        "json" => {
            let file = std::fs::File::create(path).context("Failed to create JSON file")?;
            JsonWriter::new(file)
                .with_json_format(JsonFormat::Json)
                .finish(df)
                .context("Failed to write JSON file")?;
        }
        _ => {
            let file = std::fs::File::create(path).context("Failed to create CSV file")?;
            CsvWriter::new(file)
                .include_header(true)
                .finish(df)
                .context("Failed to write CSV file")?;
        }
    }

    tracing::info!(path = %path.display(), rows = df.height(), "Saved table");
    Ok(())
}

/// Default output location: `<stem>_cleaned.csv` next to the input
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("table");
    input.with_file_name(format!("{stem}_cleaned.csv"))
}
