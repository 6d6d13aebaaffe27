//! Random source port used for exploration.

use std::fmt;

/// Source of the two random draws the exploration policy needs.
///
/// Injecting this instead of calling a global RNG keeps the exploration
/// branch testable with scripted sequences.
pub trait RandomSource: fmt::Debug + Send {
    /// A uniform sample from `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// A uniform index in `0..len`. `len` is always positive.
    fn next_index(&mut self, len: usize) -> usize;
}
