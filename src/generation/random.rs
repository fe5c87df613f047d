//! # Random Sources
//!
//! The single capability the generator needs from randomness: a uniform
//! index below a bound. Production code hands in a `rand` generator; tests
//! hand in a [`ScriptedSource`] to pin the exact draws.

use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;

/// Produces uniformly distributed indices.
pub trait RandomSource {
    /// Returns an integer uniformly distributed in `[0, upper)`.
    ///
    /// `upper` must be non-zero.
    fn index_below(&mut self, upper: usize) -> usize;
}

impl RandomSource for StdRng {
    fn index_below(&mut self, upper: usize) -> usize {
        self.gen_range(0..upper)
    }
}

impl RandomSource for ThreadRng {
    fn index_below(&mut self, upper: usize) -> usize {
        self.gen_range(0..upper)
    }
}

/// A deterministic source that replays a fixed script of indices.
///
/// The script repeats once exhausted. Each scripted value is reduced modulo
/// the requested bound, so any script is valid for any catalog size.
///
/// # Examples
///
/// ```
/// use itemforge::{RandomSource, ScriptedSource};
///
/// let mut source = ScriptedSource::new(vec![2, 0, 4]);
/// assert_eq!(source.index_below(3), 2);
/// assert_eq!(source.index_below(3), 0);
/// assert_eq!(source.index_below(3), 1); // 4 % 3
/// assert_eq!(source.index_below(3), 2); // wrapped around
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: Vec<usize>,
    draws: usize,
}

impl ScriptedSource {
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, draws: 0 }
    }

    /// Number of indices produced so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for ScriptedSource {
    fn index_below(&mut self, upper: usize) -> usize {
        let value = if self.script.is_empty() {
            0
        } else {
            self.script[self.draws % self.script.len()]
        };
        self.draws += 1;
        value % upper
    }
}
