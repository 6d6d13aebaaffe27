//! Hyperparameters of the state-value learner.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Learning rate, discount and exploration rate of a [`super::LearningAgent`].
///
/// # Examples
///
/// ```
/// use tictactoe_td::learning::LearningConfig;
///
/// // A greedy copy of the defaults, as used when playing a human.
/// let config = LearningConfig::default().with_exploration_rate(0.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LearningConfig {
    /// Step size α of the backward update
    pub learning_rate: f64,
    /// Discount γ applied to the propagated reward
    pub discount: f64,
    /// Probability of a uniformly random move
    pub exploration_rate: f64,
}

impl LearningConfig {
    pub const DEFAULT_LEARNING_RATE: f64 = 0.2;
    pub const DEFAULT_DISCOUNT: f64 = 0.9;
    pub const DEFAULT_EXPLORATION_RATE: f64 = 0.3;

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self
    }

    pub fn with_exploration_rate(mut self, exploration_rate: f64) -> Self {
        self.exploration_rate = exploration_rate;
        self
    }

    /// Check that every rate is finite and within `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("learning_rate", self.learning_rate),
            ("discount", self.discount),
            ("exploration_rate", self.exploration_rate),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfiguration {
                    message: format!("{field} must be within [0, 1], got {value}"),
                });
            }
        }
        Ok(())
    }
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            learning_rate: Self::DEFAULT_LEARNING_RATE,
            discount: Self::DEFAULT_DISCOUNT,
            exploration_rate: Self::DEFAULT_EXPLORATION_RATE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LearningConfig::default();
        assert_eq!(config.learning_rate, 0.2);
        assert_eq!(config.discount, 0.9);
        assert_eq!(config.exploration_rate, 0.3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let err = LearningConfig::default()
            .with_exploration_rate(1.5)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("exploration_rate"));

        assert!(
            LearningConfig::default()
                .with_learning_rate(f64::NAN)
                .validate()
                .is_err()
        );
        assert!(
            LearningConfig::default()
                .with_discount(-0.1)
                .validate()
                .is_err()
        );
    }
}
