//! Tabular state-value learning
//!
//! The learner estimates the value of every board state it reaches and
//! updates those estimates once per game, propagating the terminal reward
//! backward through the states it visited:
//!
//! ```text
//! V(s) ← V(s) + α[γ·r − V(s)],   then r ← V(s)
//! ```
//!
//! ## Usage Example
//!
//! ```no_run
//! use tictactoe_td::learning::{LearningAgent, LearningConfig};
//!
//! let agent = LearningAgent::new(
//!     "p1",
//!     LearningConfig::default()
//!         .with_learning_rate(0.2)
//!         .with_discount(0.9)
//!         .with_exploration_rate(0.3),
//! )?
//! .with_seed(42);
//! # Ok::<(), tictactoe_td::Error>(())
//! ```

pub mod agent;
pub mod config;
pub mod serialization;
pub mod value_table;

pub use agent::LearningAgent;
pub use config::LearningConfig;
pub use serialization::{SavedValueTable, TrainingMetadata};
pub use value_table::ValueTable;
