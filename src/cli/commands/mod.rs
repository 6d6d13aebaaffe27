//! CLI subcommands

pub mod evaluate;
pub mod inspect;
pub mod play;
pub mod train;

use clap::Args;

use crate::learning::LearningConfig;

/// Hyperparameter flags shared by commands that create agents
#[derive(Args, Debug, Clone)]
pub struct LearningArgs {
    /// Step size of the backward value update
    #[arg(long, default_value_t = LearningConfig::DEFAULT_LEARNING_RATE)]
    pub learning_rate: f64,

    /// Discount applied to the propagated reward
    #[arg(long, default_value_t = LearningConfig::DEFAULT_DISCOUNT)]
    pub discount: f64,

    /// Probability of a random move while learning
    #[arg(long, default_value_t = LearningConfig::DEFAULT_EXPLORATION_RATE)]
    pub exploration_rate: f64,
}

impl LearningArgs {
    pub fn to_config(&self) -> LearningConfig {
        LearningConfig::default()
            .with_learning_rate(self.learning_rate)
            .with_discount(self.discount)
            .with_exploration_rate(self.exploration_rate)
    }
}
