//! Error types for the populator.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while populating a sink.
#[derive(Error, Debug)]
pub enum PopulatorError {
    /// The sink rejected a write (e.g. broken pipe).
    #[error("Sink write failure: {0}")]
    SinkWriteFailure(#[from] std::io::Error),

    /// The output file could not be created.
    #[error("Failed to open output '{}': {}", .path.display(), .source)]
    OutputOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A row could not be rendered.
    #[error("Format error: {0}")]
    Format(#[from] mockgen_format::FormatError),

    /// Configuration rejected before any output.
    #[error("Configuration error: {0}")]
    Config(#[from] mockgen_core::ConfigError),

    /// Generator error.
    #[error("Generator error: {0}")]
    Generator(#[from] mockgen_generator::GeneratorError),
}
