//! Seedable random source for row sampling.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Error type for random source operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RandomError {
    /// Empty or inverted half-open range
    #[error("Invalid range: [{low}, {high_exclusive}) is empty")]
    InvalidRange { low: i64, high_exclusive: i64 },

    /// Inverted closed range
    #[error("Invalid range: [{low}, {high}] is empty")]
    InvalidInclusiveRange { low: i64, high: i64 },
}

/// Random source threaded through a generation run.
///
/// With an explicit seed the whole sample sequence is reproducible within
/// this implementation.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Create a source seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a seeded source when a seed is given, otherwise from entropy.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Uniform integer in `[low, high_exclusive)`.
    pub fn uniform_int(&mut self, low: i64, high_exclusive: i64) -> Result<i64, RandomError> {
        if high_exclusive <= low {
            return Err(RandomError::InvalidRange {
                low,
                high_exclusive,
            });
        }
        Ok(self.rng.random_range(low..high_exclusive))
    }

    /// Uniform integer in `[low, high]`.
    pub fn uniform_int_inclusive(&mut self, low: i64, high: i64) -> Result<i64, RandomError> {
        if high < low {
            return Err(RandomError::InvalidInclusiveRange { low, high });
        }
        Ok(self.rng.random_range(low..=high))
    }

    /// Normal sample with the given mean and standard deviation.
    ///
    /// A zero `stddev` returns `mean` exactly.
    pub fn gaussian(&mut self, mean: f64, stddev: f64) -> f64 {
        let z: f64 = StandardNormal.sample(&mut self.rng);
        if stddev == 0.0 {
            return mean;
        }
        mean + stddev * z
    }
}
