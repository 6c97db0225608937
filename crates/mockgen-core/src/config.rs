//! Run configuration for the mock data generator.
//!
//! A [`Configuration`] is assembled once (from CLI flags or a YAML file),
//! validated, and then only read for the rest of the run.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Configuration values violate a constraint
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

// ============================================================================
// Variants
// ============================================================================

/// How range endpoints are typed in the target table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeType {
    /// Endpoints are plain integers.
    #[default]
    Integer,
    /// Endpoints are epoch seconds wrapped in `to_timestamp(...)`.
    Timestamp,
}

impl RangeType {
    /// SQL column type used for `range_low`/`range_high` in the DDL.
    pub fn sql_type(&self) -> &'static str {
        match self {
            RangeType::Integer => "INT",
            RangeType::Timestamp => "TIMESTAMPTZ",
        }
    }
}

/// Shape of the emitted text stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One comma-separated line per row.
    #[default]
    Csv,
    /// A single multi-row `INSERT INTO ... VALUES` statement.
    SqlInsert,
    /// A `COPY ... FROM stdin` block with tab-separated rows.
    SqlCopy,
}

impl OutputFormat {
    /// Whether the format is consumed by an SQL client.
    pub fn is_sql(&self) -> bool {
        !matches!(self, OutputFormat::Csv)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OutputFormat::Csv => "csv",
            OutputFormat::SqlInsert => "sql-insert",
            OutputFormat::SqlCopy => "sql-copy",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Default number of rows to generate.
pub const DEFAULT_ROW_COUNT: u64 = 1_000_000;
/// Default number of distinct handles.
pub const DEFAULT_HANDLE_COUNT: i64 = 10_000;
/// Default lower bound for range endpoints.
pub const DEFAULT_LOWEST: i64 = 0;
/// Default upper bound for range endpoints.
pub const DEFAULT_HIGHEST: i64 = 1_000_000;
/// Default mean of the sampled width.
pub const DEFAULT_MEAN_WIDTH: f64 = 10_000.0;
/// Default standard deviation of the sampled width.
pub const DEFAULT_WIDTH_STDDEV: f64 = 3_000.0;

/// Immutable parameters for one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Configuration {
    /// Number of rows to emit
    pub row_count: u64,

    /// Handles are drawn from `1..=handle_count`
    pub handle_count: i64,

    /// Smallest allowed `low`
    pub lowest: i64,

    /// Largest allowed `high`
    pub highest: i64,

    /// Mean of the normal distribution the width is drawn from
    pub mean_width: f64,

    /// Standard deviation of the width distribution
    pub width_stddev: f64,

    /// Endpoint encoding
    pub range_type: RangeType,

    /// Seed for the random source; `None` draws from OS entropy
    pub seed: Option<u64>,

    /// Output framing
    pub output_format: OutputFormat,

    /// Emit a `CREATE TABLE` statement ahead of the `COPY` block
    pub create_table: bool,

    /// Emit a banner comment ahead of SQL output
    pub verbose: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            row_count: DEFAULT_ROW_COUNT,
            handle_count: DEFAULT_HANDLE_COUNT,
            lowest: DEFAULT_LOWEST,
            highest: DEFAULT_HIGHEST,
            mean_width: DEFAULT_MEAN_WIDTH,
            width_stddev: DEFAULT_WIDTH_STDDEV,
            range_type: RangeType::default(),
            seed: None,
            output_format: OutputFormat::default(),
            create_table: false,
            verbose: false,
        }
    }
}

impl Configuration {
    /// Load and validate a configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate a configuration from a YAML string.
    ///
    /// Keys that are absent take their default value.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Configuration = serde_yaml::from_str(yaml)?;
        config.validate()
    }

    /// Check every cross-field constraint, returning the configuration unchanged
    /// when it is usable.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.highest <= self.lowest {
            return Err(ConfigError::InvalidConfiguration(format!(
                "highest ({}) must be greater than lowest ({})",
                self.highest, self.lowest
            )));
        }
        if self.handle_count < 1 {
            return Err(ConfigError::InvalidConfiguration(format!(
                "handle_count must be at least 1, got {}",
                self.handle_count
            )));
        }
        if !self.mean_width.is_finite() {
            return Err(ConfigError::InvalidConfiguration(format!(
                "mean_width must be finite, got {}",
                self.mean_width
            )));
        }
        if !self.width_stddev.is_finite() || self.width_stddev < 0.0 {
            return Err(ConfigError::InvalidConfiguration(format!(
                "width_stddev must be a non-negative finite number, got {}",
                self.width_stddev
            )));
        }
        if self.create_table && self.output_format != OutputFormat::SqlCopy {
            return Err(ConfigError::InvalidConfiguration(format!(
                "create_table requires the sql-copy format, got {}",
                self.output_format
            )));
        }
        Ok(self)
    }
}
