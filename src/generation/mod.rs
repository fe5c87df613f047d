//! # Generation Module
//!
//! Random item generation over a catalog.
//!
//! Generators take a [`GenerationConfig`] and a [`RandomSource`]; the source
//! is injected so the same code path serves seeded, entropy-backed and fully
//! scripted runs.

pub mod random;
pub mod sampler;

pub use random::*;
pub use sampler::*;

use crate::config::DEFAULT_SAMPLE_COUNT;
use crate::ItemforgeResult;
use serde::{Deserialize, Serialize};

/// Configuration for item generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation; `None` draws from entropy
    pub seed: Option<u64>,
    /// Number of items to generate
    pub count: usize,
}

impl GenerationConfig {
    /// Creates an unseeded configuration for `count` items.
    ///
    /// # Examples
    ///
    /// ```
    /// use itemforge::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(12).with_seed(7);
    /// assert_eq!(config.count, 12);
    /// assert_eq!(config.seed, Some(7));
    /// ```
    pub fn new(count: usize) -> Self {
        Self { seed: None, count }
    }

    /// Creates an unseeded configuration from a signed count.
    ///
    /// Negative counts fail with [`ItemforgeError::InvalidArgument`], the
    /// same rule [`generate_random_items`] applies.
    ///
    /// [`ItemforgeError::InvalidArgument`]: crate::ItemforgeError::InvalidArgument
    pub fn from_signed_count(count: i64) -> ItemforgeResult<Self> {
        Ok(Self::new(sampler::checked_count(count)?))
    }

    /// Pins the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Creates a small, seeded configuration for tests.
    pub fn for_testing(seed: u64) -> Self {
        Self::new(DEFAULT_SAMPLE_COUNT).with_seed(seed)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_COUNT)
    }
}

/// Trait for generators.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random source.
    fn generate(&self, config: &GenerationConfig, rng: &mut dyn RandomSource) -> ItemforgeResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> ItemforgeResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation.
pub mod utils {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Creates a random number generator from the config, seeded if a seed is set.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
