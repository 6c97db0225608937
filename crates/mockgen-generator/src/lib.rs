//! Row generator for range-mockgen.
//!
//! This crate provides the [`RowGenerator`] which samples rows carrying a
//! handle and a `[low, high]` range from a validated [`Configuration`]. The
//! generator draws from an explicitly constructed [`RandomSource`]; seeding
//! it makes every run reproducible.
//!
//! # Architecture
//!
//! ```text
//! Configuration
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │    RowGenerator      │
//! │                      │
//! │  - config            │
//! │  - source (StdRng)   │
//! │  - index             │
//! └──────────┬───────────┘
//!            │
//!            ▼
//!    Row { handle, low, high, sequence, width }
//! ```
//!
//! # Sampling
//!
//! - `handle` is uniform over `1..=handle_count`
//! - the midpoint is uniform over `[lowest, highest]`
//! - the width is a rounded normal sample, floored at zero
//! - `low` is clamped to `lowest` first, then `high = low + width` is clamped
//!   to `highest`
//!
//! # Example
//!
//! ```rust
//! use mockgen_core::Configuration;
//! use mockgen_generator::RowGenerator;
//!
//! let config = Configuration {
//!     handle_count: 5,
//!     lowest: 0,
//!     highest: 100,
//!     mean_width: 10.0,
//!     width_stddev: 0.0,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let mut generator = RowGenerator::from_config(config).unwrap();
//! let row = generator.next_row().unwrap();
//! assert!(row.low <= row.high);
//! ```
//!
//! [`Configuration`]: mockgen_core::Configuration

pub mod generator;
pub mod random;

// Re-exports for convenience
pub use generator::{clamp_range, sample_width, GeneratorError, RowGenerator, RowIterator};
pub use random::{RandomError, RandomSource};
