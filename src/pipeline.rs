//! Pipeline specification and execution.
//!
//! A [`PipelineSpec`] is an ordered, JSON-serialisable list of cleaning
//! [`Step`]s. [`PipelineSpec::standard`] is the default sequence used by
//! [`clean_dataframe`]:
//!
//! 1. `clean_column_names`
//! 2. `drop_null_rows`
//! 3. `clean_gender`
//! 4. `clean_state`
//! 5. `clean_education`
//! 6. `clean_lifetime_value`
//! 7. `split_keep_middle`
//! 8. `fill_with_mean`
//!
//! `clean_vehicle_class` and `numeric_to_int` are available as steps but are
//! only run when a spec asks for them.
//!
//! # Example
//!
//! ```
//! use custclean::pipeline::{PipelineSpec, Step, run_pipeline};
//! use polars::prelude::*;
//!
//! let df = df!(
//!     "Vehicle Class" => &["Sports Car", "SUV"]
//! )?;
//!
//! let spec = PipelineSpec::new("vehicles")
//!     .with_step(Step::CleanColumnNames)
//!     .with_step(Step::CleanVehicleClass { column: None });
//!
//! let (cleaned, report) = run_pipeline(&spec, &df)?;
//! assert_eq!(report.steps_applied, 2);
//! assert!(cleaned.column("vehicle_class").is_ok());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod executor;
pub mod spec;

pub use executor::{RunReport, clean_dataframe, run_pipeline};
pub use spec::{PipelineSpec, SPEC_VERSION, Step};
