//! CLI argument definitions shared by the generator commands.

use clap::{Args, ValueEnum};
use mockgen_core::config::{
    DEFAULT_HANDLE_COUNT, DEFAULT_HIGHEST, DEFAULT_LOWEST, DEFAULT_MEAN_WIDTH, DEFAULT_ROW_COUNT,
    DEFAULT_WIDTH_STDDEV,
};
use mockgen_core::{ConfigError, Configuration, OutputFormat, RangeType};
use std::path::PathBuf;

/// Endpoint type as spelled on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RangeTypeArg {
    /// Plain integers
    #[default]
    Int,
    /// Epoch seconds wrapped in to_timestamp()
    Timestamp,
}

impl From<RangeTypeArg> for RangeType {
    fn from(arg: RangeTypeArg) -> Self {
        match arg {
            RangeTypeArg::Int => RangeType::Integer,
            RangeTypeArg::Timestamp => RangeType::Timestamp,
        }
    }
}

/// Output format as spelled on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormatArg {
    /// Comma-separated values
    Csv,
    /// A multi-row INSERT INTO statement
    SqlInsert,
    /// A COPY ... FROM stdin block
    SqlCopy,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Csv => OutputFormat::Csv,
            OutputFormatArg::SqlInsert => OutputFormat::SqlInsert,
            OutputFormatArg::SqlCopy => OutputFormat::SqlCopy,
        }
    }
}

/// Sampling parameters for row generation.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Number of rows to generate
    #[arg(long = "nrows", short = 'n', default_value_t = DEFAULT_ROW_COUNT)]
    pub row_count: u64,

    /// Handles range from 1 to this
    #[arg(long = "handles", default_value_t = DEFAULT_HANDLE_COUNT)]
    pub handle_count: i64,

    /// Lowest range_low value
    #[arg(long, default_value_t = DEFAULT_LOWEST, allow_negative_numbers = true)]
    pub lowest: i64,

    /// Highest range_high value
    #[arg(long, default_value_t = DEFAULT_HIGHEST, allow_negative_numbers = true)]
    pub highest: i64,

    /// Width mean value
    #[arg(long, default_value_t = DEFAULT_MEAN_WIDTH, allow_negative_numbers = true)]
    pub mean_width: f64,

    /// Width standard deviation
    #[arg(long = "stddev-width", default_value_t = DEFAULT_WIDTH_STDDEV)]
    pub width_stddev: f64,

    /// Data type for the range endpoints
    #[arg(long = "type", value_enum, default_value_t = RangeTypeArg::Int)]
    pub range_type: RangeTypeArg,

    /// Seed for the random number generator (same seed = same data)
    #[arg(long, env = "MOCKGEN_SEED")]
    pub seed: Option<u64>,
}

/// Output selection arguments.
#[derive(Args, Clone, Debug)]
pub struct OutputArgs {
    /// Output format [default: csv]
    #[arg(long, value_enum, conflicts_with = "sql")]
    pub format: Option<OutputFormatArg>,

    /// Generate a multi-row "INSERT INTO ..." statement instead of CSV values
    #[arg(long)]
    pub sql: bool,

    /// Generate "CREATE TABLE" followed by a "COPY ... FROM stdin" block (implies SQL)
    #[arg(long)]
    pub create_table: bool,

    /// Write to this file instead of standard output
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Turn on verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl OutputArgs {
    /// Resolve `--format`, `--sql` and `--create-table` into one format.
    pub fn resolve_format(&self) -> Result<OutputFormat, ConfigError> {
        if self.create_table {
            return match self.format {
                None | Some(OutputFormatArg::SqlCopy) => Ok(OutputFormat::SqlCopy),
                Some(other) => Err(ConfigError::InvalidConfiguration(format!(
                    "--create-table implies sql-copy, but --format {} was given",
                    OutputFormat::from(other)
                ))),
            };
        }
        if self.sql {
            return Ok(OutputFormat::SqlInsert);
        }
        Ok(self.format.map(OutputFormat::from).unwrap_or_default())
    }
}

/// Build a validated configuration from command line arguments.
pub fn build_configuration(
    generate: &GenerateArgs,
    output: &OutputArgs,
) -> Result<Configuration, ConfigError> {
    Configuration {
        row_count: generate.row_count,
        handle_count: generate.handle_count,
        lowest: generate.lowest,
        highest: generate.highest,
        mean_width: generate.mean_width,
        width_stddev: generate.width_stddev,
        range_type: generate.range_type.into(),
        seed: generate.seed,
        output_format: output.resolve_format()?,
        create_table: output.create_table,
        verbose: output.verbose,
    }
    .validate()
}
