//! Pipeline specification data structures.
//!
//! A spec is an ordered list of cleaning steps that can be stored as JSON and
//! replayed against any table.

use crate::cleaning;
use crate::error::{CleanError, Result};
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Current pipeline spec version
pub const SPEC_VERSION: &str = "0.1";

/// Root pipeline specification structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSpec {
    /// Specification version for future migrations
    pub version: String,

    /// Human-readable pipeline name
    pub name: String,

    /// Ordered sequence of cleaning steps
    pub steps: Vec<Step>,
}

impl PipelineSpec {
    /// Create an empty pipeline spec
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: SPEC_VERSION.to_owned(),
            name: name.into(),
            steps: Vec::new(),
        }
    }

    /// The default cleaning sequence, with every step on its default column.
    ///
    /// Vehicle class cleaning and integer coercion are not part of it; add
    /// them explicitly when needed.
    pub fn standard() -> Self {
        let mut spec = Self::new("standard");
        spec.steps = vec![
            Step::CleanColumnNames,
            Step::DropNullRows,
            Step::CleanGender { column: None },
            Step::CleanState { column: None },
            Step::CleanEducation { column: None },
            Step::CleanLifetimeValue { column: None },
            Step::SplitKeepMiddle { column: None },
            Step::FillWithMean { column: None },
        ];
        spec
    }

    /// Append a step, builder style
    #[must_use]
    pub fn with_step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Load a pipeline spec from a JSON file
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or does not hold a supported spec.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Parse a pipeline spec from JSON string
    ///
    /// # Errors
    ///
    /// Returns [`CleanError::Config`] on malformed JSON or an unsupported version.
    pub fn from_json(json: &str) -> Result<Self> {
        let spec: Self = serde_json::from_str(json)?;
        if spec.version != SPEC_VERSION {
            return Err(CleanError::Config(format!(
                "Unsupported spec version '{}', expected '{SPEC_VERSION}'",
                spec.version
            )));
        }
        Ok(spec)
    }

    /// Save pipeline spec to a JSON file
    ///
    /// # Errors
    ///
    /// Fails if serialization or the write fails.
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }

    /// Serialize pipeline spec to JSON string
    ///
    /// # Errors
    ///
    /// Returns [`CleanError::Config`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for PipelineSpec {
    fn default() -> Self {
        Self::standard()
    }
}

/// Cleaning step (tagged enum)
///
/// `column: None` targets the step's default column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Lower-case names, spaces to underscores, `st` to `state`
    CleanColumnNames,

    /// Remove rows where every value is null
    DropNullRows,

    /// Reduce gender values to M, F or D
    CleanGender {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        column: Option<String>,
    },

    /// Expand state abbreviations
    CleanState {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        column: Option<String>,
    },

    /// Merge `Bachelors` into `Bachelor`
    CleanEducation {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        column: Option<String>,
    },

    /// Collapse premium vehicle classes into `Luxury`
    CleanVehicleClass {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        column: Option<String>,
    },

    /// Strip `%` from lifetime values
    CleanLifetimeValue {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        column: Option<String>,
    },

    /// Keep the middle segment of `/`-delimited values
    SplitKeepMiddle {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        column: Option<String>,
    },

    /// Convert to float and fill nulls with the mean
    FillWithMean {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        column: Option<String>,
    },

    /// Truncate the numeric columns to integers
    NumericToInt,
}

impl Step {
    /// Run this step against a table
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying cleaning function unchanged.
    pub fn apply(&self, df: &DataFrame) -> Result<DataFrame> {
        match self {
            Self::CleanColumnNames => cleaning::clean_column_names(df),
            Self::DropNullRows => cleaning::drop_null_rows(df),
            Self::CleanGender { column } => cleaning::clean_gender(df, column.as_deref()),
            Self::CleanState { column } => cleaning::clean_state(df, column.as_deref()),
            Self::CleanEducation { column } => cleaning::clean_education(df, column.as_deref()),
            Self::CleanVehicleClass { column } => {
                cleaning::clean_vehicle_class(df, column.as_deref())
            }
            Self::CleanLifetimeValue { column } => {
                cleaning::clean_lifetime_value(df, column.as_deref())
            }
            Self::SplitKeepMiddle { column } => cleaning::split_keep_middle(df, column.as_deref()),
            Self::FillWithMean { column } => cleaning::fill_with_mean(df, column.as_deref()),
            Self::NumericToInt => cleaning::numeric_to_int(df),
        }
    }

    /// Get the name of this step
    pub fn name(&self) -> &'static str {
        match self {
            Self::CleanColumnNames => "clean_column_names",
            Self::DropNullRows => "drop_null_rows",
            Self::CleanGender { .. } => "clean_gender",
            Self::CleanState { .. } => "clean_state",
            Self::CleanEducation { .. } => "clean_education",
            Self::CleanVehicleClass { .. } => "clean_vehicle_class",
            Self::CleanLifetimeValue { .. } => "clean_lifetime_value",
            Self::SplitKeepMiddle { .. } => "split_keep_middle",
            Self::FillWithMean { .. } => "fill_with_mean",
            Self::NumericToInt => "numeric_to_int",
        }
    }

    /// The column this step rewrites, resolving defaults
    pub fn target_column(&self) -> Option<&str> {
        let (column, default) = match self {
            Self::CleanColumnNames | Self::DropNullRows | Self::NumericToInt => return None,
            Self::CleanGender { column } => (column, cleaning::DEFAULT_GENDER_COLUMN),
            Self::CleanState { column } => (column, cleaning::DEFAULT_STATE_COLUMN),
            Self::CleanEducation { column } => (column, cleaning::DEFAULT_EDUCATION_COLUMN),
            Self::CleanVehicleClass { column } => {
                (column, cleaning::DEFAULT_VEHICLE_CLASS_COLUMN)
            }
            Self::CleanLifetimeValue { column } | Self::FillWithMean { column } => {
                (column, cleaning::DEFAULT_LIFETIME_VALUE_COLUMN)
            }
            Self::SplitKeepMiddle { column } => (column, cleaning::DEFAULT_COMPLAINTS_COLUMN),
        };
        Some(column.as_deref().unwrap_or(default))
    }

    /// Create a summary of what this step does
    pub fn description(&self) -> String {
        match self {
            Self::CleanColumnNames => "Normalise column names".to_owned(),
            Self::DropNullRows => "Drop rows where every value is null".to_owned(),
            Self::NumericToInt => format!(
                "Truncate {} to integers",
                cleaning::NUMERIC_COLUMNS.join(", ")
            ),
            Self::CleanGender { .. } => {
                format!("Reduce '{}' to M/F/D", self.target_or_default())
            }
            Self::CleanState { .. } => {
                format!("Expand state abbreviations in '{}'", self.target_or_default())
            }
            Self::CleanEducation { .. } => {
                format!("Merge 'Bachelors' into 'Bachelor' in '{}'", self.target_or_default())
            }
            Self::CleanVehicleClass { .. } => {
                format!("Collapse luxury classes in '{}'", self.target_or_default())
            }
            Self::CleanLifetimeValue { .. } => {
                format!("Strip '%' from '{}'", self.target_or_default())
            }
            Self::SplitKeepMiddle { .. } => {
                format!("Keep middle segment of '{}'", self.target_or_default())
            }
            Self::FillWithMean { .. } => {
                format!("Fill nulls in '{}' with the mean", self.target_or_default())
            }
        }
    }

    fn target_or_default(&self) -> &str {
        self.target_column().unwrap_or_default()
    }
}
