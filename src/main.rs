//! Command-line interface for range-mockgen
//!
//! # Usage Examples
//!
//! ```bash
//! # One million CSV rows with the default distribution
//! range-mockgen > mock.csv
//!
//! # Reproducible multi-row INSERT with timestamp endpoints
//! range-mockgen --sql --type timestamp --seed 42 -n 10000 | psql mydb
//!
//! # CREATE TABLE followed by a COPY block
//! range-mockgen --create-table -n 5000000 -o mock.sql
//!
//! # Parameters from a YAML file
//! range-mockgen --config mockgen.yaml
//! ```

use anyhow::Context;
use clap::Parser;
use mockgen_core::Configuration;
use mockgen_format::create_table_sql;
use mockgen_populate::{build_configuration, GenerateArgs, OutputArgs, Populator};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "range-mockgen")]
#[command(version)]
#[command(about = "Generates mock data for benchmarking range-overlap queries")]
#[command(after_long_help = help_footer())]
struct Cli {
    /// Load generation parameters from a YAML file (generation and format flags are ignored)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    generate: GenerateArgs,

    #[command(flatten)]
    output: OutputArgs,
}

fn help_footer() -> String {
    format!(
        "Generates test data for\n\n{}\n\n\
         That gets queried with WHERE clauses like\n\n  \
         WHERE handle = target_handle AND range_high >= target_low AND range_low <= target_high\n\n\
         (i.e. queries are for rows with a specific handle whose range overlaps a target range).\n\n\
         The test data can be used to populate a database in order to test various index\n\
         and query schemes. Each row has a random handle and a random midpoint; a width is\n\
         drawn from a normal distribution and the range is placed around the midpoint,\n\
         clamped to [lowest, highest].",
        create_table_sql("<type>")
    )
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let mut config = Configuration::from_file(path)
                .with_context(|| format!("Failed to load configuration from {path:?}"))?;
            config.verbose |= cli.output.verbose;
            config
        }
        None => build_configuration(&cli.generate, &cli.output)
            .context("Invalid command line arguments")?,
    };

    init_tracing(config.verbose);

    let populator = Populator::new(config).context("Failed to set up generator")?;

    let metrics = match &cli.output.output {
        Some(path) => populator
            .populate_file(path)
            .with_context(|| format!("Failed to write {path:?}"))?,
        None => populator
            .populate(std::io::stdout().lock())
            .context("Failed to write to standard output")?,
    };

    tracing::debug!(
        "Wrote {} rows ({} bytes): generation {:?}, write {:?}, {:.0} bytes/sec",
        metrics.rows_written,
        metrics.bytes_written,
        metrics.generation_duration,
        metrics.write_duration,
        metrics.bytes_per_second()
    );

    Ok(())
}

/// Log to stderr so stdout only carries generated data.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
