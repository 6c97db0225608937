//! Row generator producing handles and clamped ranges.

use crate::random::{RandomError, RandomSource};
use mockgen_core::{ConfigError, Configuration, Row};

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Configuration rejected before generation
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    /// Random source called with an empty range
    #[error("Random source error: {0}")]
    RandomError(#[from] RandomError),
}

/// Generator that samples one row at a time from a validated configuration.
///
/// The generator owns its [`RandomSource`]; with a seeded source the row
/// sequence is identical across runs.
pub struct RowGenerator {
    /// Validated run parameters
    config: Configuration,
    /// Random source shared by every row of the run
    source: RandomSource,
    /// Sequence number of the next row
    index: u64,
}

impl RowGenerator {
    /// Create a generator, validating `config` first.
    pub fn new(config: Configuration, source: RandomSource) -> Result<Self, GeneratorError> {
        let config = config.validate()?;
        Ok(Self {
            config,
            source,
            index: 0,
        })
    }

    /// Create a generator whose random source follows `config.seed`.
    pub fn from_config(config: Configuration) -> Result<Self, GeneratorError> {
        let source = RandomSource::new(config.seed);
        Self::new(config, source)
    }

    /// Sequence number the next row will carry.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Generate the next row.
    pub fn next_row(&mut self) -> Result<Row, GeneratorError> {
        let config = &self.config;

        let handle = self.source.uniform_int_inclusive(1, config.handle_count)?;

        // Midpoint in [lowest, highest); highest itself is never drawn.
        let midpoint = self.source.uniform_int(config.lowest, config.highest)?;

        let width = sample_width(&mut self.source, config.mean_width, config.width_stddev);
        let (low, high) = clamp_range(config.lowest, config.highest, midpoint, width);

        let row = Row {
            handle,
            low,
            high,
            sequence: self.index,
            width,
        };
        self.index += 1;

        Ok(row)
    }

    /// Generate `count` rows lazily.
    pub fn rows(&mut self, count: u64) -> RowIterator<'_> {
        RowIterator {
            generator: self,
            remaining: count,
        }
    }
}

/// Draw a width from the normal distribution, rounded and floored at zero.
///
/// Negative samples become zero; they are never reflected or redrawn.
pub fn sample_width(source: &mut RandomSource, mean: f64, stddev: f64) -> i64 {
    let raw = source.gaussian(mean, stddev).round() as i64;
    raw.max(0)
}

/// Place a range of `width` around `midpoint` inside `[lowest, highest]`.
///
/// `low` is clamped first, `high` is derived from the clamped `low` and then
/// clamped itself. `low` is not revisited afterwards, so the resulting width
/// can be smaller than `width` at either boundary.
pub fn clamp_range(lowest: i64, highest: i64, midpoint: i64, width: i64) -> (i64, i64) {
    if width <= 0 {
        return (midpoint, midpoint);
    }

    let mut low = midpoint.saturating_sub(width / 2);
    if low < lowest {
        low = lowest;
    }

    let mut high = low.saturating_add(width);
    if high > highest {
        high = highest;
    }

    (low, high)
}

/// Iterator that lazily generates rows.
pub struct RowIterator<'a> {
    generator: &'a mut RowGenerator,
    remaining: u64,
}

impl Iterator for RowIterator<'_> {
    type Item = Result<Row, GeneratorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_row())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}

#[cfg(target_pointer_width = "64")]
impl ExactSizeIterator for RowIterator<'_> {}
