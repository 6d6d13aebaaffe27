//! Configuration types for agent creation.

use crate::learning::LearningConfig;

/// Configuration for creating a learning agent.
///
/// # Examples
///
/// ```
/// use tictactoe_td::app::AgentConfig;
/// use tictactoe_td::learning::LearningConfig;
///
/// let config = AgentConfig::new("policy_p1")
///     .with_learning(LearningConfig::default().with_exploration_rate(0.1))
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Name the agent is announced and saved under
    pub name: String,
    /// Learning hyperparameters
    pub learning: LearningConfig,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl AgentConfig {
    /// Create a configuration with default hyperparameters and no seed.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            learning: LearningConfig::default(),
            seed: None,
        }
    }

    pub fn with_learning(mut self, learning: LearningConfig) -> Self {
        self.learning = learning;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
