//! Random sources for the exploration policy.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::ports::RandomSource;

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// `StdRng`-backed random source, optionally seeded for reproducible runs.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
    seed: Option<u64>,
}

impl SeededRandom {
    /// Seeded from the given value, or from the thread RNG when `None`.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: build_rng(seed),
            seed,
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::new(None)
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn next_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Replays fixed sequences of draws, for deterministic tests.
///
/// Once the unit queue runs dry every draw returns `1.0`, which never falls
/// below an exploration rate, so the agent exploits. An exhausted index
/// queue returns `0`. Scripted indices are reduced modulo `len`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    units: VecDeque<f64>,
    indices: VecDeque<usize>,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_units(mut self, units: impl IntoIterator<Item = f64>) -> Self {
        self.units.extend(units);
        self
    }

    pub fn with_indices(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.indices.extend(indices);
        self
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(1.0)
    }

    fn next_index(&mut self, len: usize) -> usize {
        self.indices.pop_front().map_or(0, |index| index % len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_random_is_reproducible() {
        let mut a = SeededRandom::new(Some(42));
        let mut b = SeededRandom::new(Some(42));
        for _ in 0..20 {
            assert_eq!(a.next_unit(), b.next_unit());
            assert_eq!(a.next_index(9), b.next_index(9));
        }
    }

    #[test]
    fn test_seeded_random_ranges() {
        let mut rng = SeededRandom::new(Some(7));
        for len in 1..=9 {
            let unit = rng.next_unit();
            assert!((0.0..1.0).contains(&unit));
            assert!(rng.next_index(len) < len);
        }
    }

    #[test]
    fn test_scripted_random_replays_then_falls_back() {
        let mut rng = ScriptedRandom::new()
            .with_units([0.1, 0.9])
            .with_indices([4, 11]);

        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(rng.next_unit(), 0.9);
        assert_eq!(rng.next_unit(), 1.0);

        assert_eq!(rng.next_index(9), 4);
        assert_eq!(rng.next_index(9), 2);
        assert_eq!(rng.next_index(9), 0);
    }
}
