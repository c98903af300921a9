//! # custclean - customer table cleaning pipeline
//!
//! Cleans insurance-style customer tables held in a polars [`DataFrame`]:
//! column names are normalised, categorical values standardised, malformed
//! numeric text repaired, empty rows removed and missing lifetime values
//! imputed with the column mean.
//!
//! ## Quick Start
//!
//! ```
//! use custclean::pipeline::clean_dataframe;
//! use polars::prelude::*;
//!
//! let raw = df!(
//!     "ST" => &["AZ", "Cali"],
//!     "GENDER" => &[Some("male"), None],
//!     "Education" => &["Bachelors", "Master"],
//!     "Customer Lifetime Value" => &[Some("100%"), None],
//!     "Number of Open Complaints" => &["1/0/00", "1/2/00"]
//! )?;
//!
//! let cleaned = clean_dataframe(&raw)?;
//! assert!(cleaned.column("state").is_ok());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Core Modules
//!
//! - [`cleaning`]: the individual cleaning steps
//! - [`pipeline`]: step specs, the runner and the standard sequence
//! - [`error`]: error types
//!
//! [`io`] and [`logging`] support the `custclean` binary; the cleaning core
//! never touches files.
//!
//! [`DataFrame`]: polars::prelude::DataFrame

#![warn(clippy::all, rust_2018_idioms)]

pub mod cleaning;
pub mod error;
pub mod io;
pub mod logging;
pub mod pipeline;
