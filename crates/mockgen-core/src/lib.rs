//! Core types for range-mockgen.
//!
//! This crate provides the types shared by the generator, the output
//! formats and the populator:
//!
//! - [`Configuration`] - Validated run parameters, loadable from YAML
//! - [`RangeType`] - Endpoint encoding (integer or timestamp)
//! - [`OutputFormat`] - Output framing (CSV, SQL `INSERT`, SQL `COPY`)
//! - [`Row`] - A single generated row
//!
//! # Architecture
//!
//! ```text
//! mockgen-core (this crate)
//!    │
//!    ├─── mockgen-generator  (samples rows from a Configuration)
//!    ├─── mockgen-format     (renders rows as text)
//!    └─── mockgen-populate   (drives generation into a sink)
//! ```

pub mod config;
pub mod row;

// Re-exports for convenience
pub use config::{ConfigError, Configuration, OutputFormat, RangeType};
pub use row::Row;
