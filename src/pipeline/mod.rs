//! Game orchestration, rewards and run results
//!
//! This module provides:
//! - [`GameState`], which seats two agents and plays training, evaluation
//!   and interactive games
//! - [`RewardScheme`], the terminal reward mapping
//! - Result types and observers for training batches

pub mod game_state;
pub mod observers;
pub mod results;
pub mod rewards;

pub use game_state::{GameState, PROGRESS_INTERVAL};
pub use observers::ProgressObserver;
pub use results::{EvaluationResult, TrainingResult};
pub use rewards::RewardScheme;

pub use crate::ports::{Agent, Observer};
