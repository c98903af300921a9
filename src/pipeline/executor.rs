//! Pipeline execution engine.
//!
//! Applies the steps of a spec in order. The first failing step aborts the run
//! and its error is returned as is; there is no partial output.

use super::spec::PipelineSpec;
use crate::error::Result;
use polars::prelude::DataFrame;
use std::time::{Duration, Instant};

/// Report generated after pipeline execution
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Number of rows before processing
    pub rows_before: usize,

    /// Number of columns before processing
    pub columns_before: usize,

    /// Number of rows after processing
    pub rows_after: usize,

    /// Number of columns after processing
    pub columns_after: usize,

    /// Number of steps applied
    pub steps_applied: usize,

    /// Time taken for execution
    pub duration: Duration,
}

impl RunReport {
    /// Create a summary message
    pub fn summary(&self) -> String {
        format!(
            "Pipeline completed: {} rows ({} → {}), {} columns ({} → {}), {} steps, {:.2}s",
            change(self.rows_before, self.rows_after),
            self.rows_before,
            self.rows_after,
            change(self.columns_before, self.columns_after),
            self.columns_before,
            self.columns_after,
            self.steps_applied,
            self.duration.as_secs_f64()
        )
    }
}

fn change(before: usize, after: usize) -> &'static str {
    if after > before {
        "added"
    } else if after < before {
        "removed"
    } else {
        "unchanged"
    }
}

/// Execute a pipeline spec on a table
///
/// # Errors
///
/// Returns the error of the first step that fails.
pub fn run_pipeline(spec: &PipelineSpec, input: &DataFrame) -> Result<(DataFrame, RunReport)> {
    let start = Instant::now();
    tracing::info!(
        pipeline = %spec.name,
        steps = spec.steps.len(),
        rows = input.height(),
        "Running cleaning pipeline"
    );

    let mut df = input.clone();
    for (idx, step) in spec.steps.iter().enumerate() {
        df = step.apply(&df).inspect_err(|e| {
            tracing::error!(step = idx + 1, op = step.name(), "Step failed: {e}");
        })?;
        tracing::debug!(step = idx + 1, op = step.name(), rows = df.height(), "Step applied");
    }

    let report = RunReport {
        rows_before: input.height(),
        columns_before: input.width(),
        rows_after: df.height(),
        columns_after: df.width(),
        steps_applied: spec.steps.len(),
        duration: start.elapsed(),
    };
    tracing::info!("{}", report.summary());

    Ok((df, report))
}

/// Run the standard cleaning sequence and return the cleaned table.
///
/// Column names are normalised, empty rows dropped, gender, state and
/// education standardised, lifetime values stripped of `%` and mean-imputed,
/// and complaint counts reduced to their middle segment.
///
/// # Errors
///
/// Returns the error of the first step that fails.
pub fn clean_dataframe(df: &DataFrame) -> Result<DataFrame> {
    run_pipeline(&PipelineSpec::standard(), df).map(|(cleaned, _)| cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CleanError;
    use crate::pipeline::Step;
    use polars::prelude::*;

    fn raw_customers() -> PolarsResult<DataFrame> {
        df!(
            "Customer" => &[Some("a1"), None, Some("c3"), Some("d4")],
            "ST" => &[Some("AZ"), None, Some("WA"), Some("Nevada")],
            "GENDER" => &[Some("Male"), None, None, Some("f")],
            "Education" => &[Some("Bachelors"), None, Some("Master"), Some("College")],
            "Customer Lifetime Value" => &[Some("100%"), None, None, Some("300%")],
            "Number of Open Complaints" => &[Some("1/2/00"), None, Some("1/0/00"), Some("1/1/00")],
            "Vehicle Class" => &[Some("Sports Car"), None, Some("SUV"), Some("Luxury SUV")]
        )
    }

    #[test]
    fn test_clean_dataframe() -> anyhow::Result<()> {
        let raw = raw_customers()?;
        let cleaned = clean_dataframe(&raw)?;

        assert_eq!(cleaned.height(), 3);
        assert!(cleaned.column("state").is_ok());
        assert!(cleaned.column("customer_lifetime_value").is_ok());

        let clv = cleaned
            .column("customer_lifetime_value")?
            .as_materialized_series()
            .f64()?
            .clone();
        assert_eq!(clv.get(0), Some(100.0));
        assert_eq!(clv.get(1), Some(200.0));
        assert_eq!(clv.get(2), Some(300.0));

        // Vehicle classes are not part of the standard sequence
        let vehicles = cleaned.column("vehicle_class")?.as_materialized_series().str()?.clone();
        assert_eq!(vehicles.get(0), Some("Sports Car"));

        // Raw table is still raw
        assert!(raw.column("ST").is_ok());
        assert_eq!(raw.height(), 4);
        Ok(())
    }

    #[test]
    fn test_report() -> anyhow::Result<()> {
        let raw = raw_customers()?;
        let spec = PipelineSpec::standard()
            .with_step(Step::CleanVehicleClass { column: None });
        let (cleaned, report) = run_pipeline(&spec, &raw)?;

        assert_eq!(report.rows_before, 4);
        assert_eq!(report.rows_after, 3);
        assert_eq!(report.columns_before, report.columns_after);
        assert_eq!(report.steps_applied, 9);
        assert!(report.summary().contains("removed"));

        let vehicles = cleaned.column("vehicle_class")?.as_materialized_series().str()?.clone();
        assert_eq!(vehicles.get(0), Some("Luxury"));
        assert_eq!(vehicles.get(1), Some("SUV"));
        Ok(())
    }

    #[test]
    fn test_first_error_aborts() -> anyhow::Result<()> {
        let raw = df!("name" => &["Ana"])?;
        let spec = PipelineSpec::new("broken")
            .with_step(Step::CleanColumnNames)
            .with_step(Step::CleanGender { column: None })
            .with_step(Step::FillWithMean { column: None });

        let err = run_pipeline(&spec, &raw).expect_err("gender column is missing");
        assert!(matches!(err, CleanError::ColumnNotFound(ref c) if c == "gender"));
        Ok(())
    }
}
