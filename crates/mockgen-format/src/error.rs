//! Error types for row rendering.

use thiserror::Error;

/// Errors that can occur while rendering a row.
#[derive(Error, Debug)]
pub enum FormatError {
    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error while draining the CSV buffer.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendered record was not valid UTF-8.
    #[error("Invalid UTF-8 in rendered row: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
