//! Populator for range-mockgen.
//!
//! This crate drives a [`RowGenerator`] through an output format into any
//! [`std::io::Write`] sink, and defines the CLI arguments used to build the
//! run configuration.
//!
//! # Example
//!
//! ```ignore
//! use mockgen_core::{Configuration, OutputFormat};
//! use mockgen_populate::Populator;
//!
//! let config = Configuration {
//!     row_count: 1000,
//!     seed: Some(42),
//!     output_format: OutputFormat::SqlInsert,
//!     ..Default::default()
//! };
//!
//! let metrics = Populator::new(config)?.populate(std::io::stdout().lock())?;
//! ```
//!
//! [`RowGenerator`]: mockgen_generator::RowGenerator

pub mod args;
mod error;
mod populator;

pub use args::{build_configuration, GenerateArgs, OutputArgs, OutputFormatArg, RangeTypeArg};
pub use error::PopulatorError;
pub use populator::{PopulateMetrics, Populator, DEFAULT_BUFFER_SIZE};
