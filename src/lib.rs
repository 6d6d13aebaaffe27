//! Tabular state-value learning for tic-tac-toe
//!
//! This crate provides:
//! - A tic-tac-toe board with enumerated cells and explicit line checks
//! - [`learning::LearningAgent`], an ε-greedy learner that propagates the
//!   terminal reward backward through the states it visited
//! - [`pipeline::GameState`], which seats two agents and runs training,
//!   evaluation and interactive games
//! - Ports and adapters for persistence, randomness and human input
//!
//! ## Usage Example
//!
//! ```no_run
//! use tictactoe_td::{
//!     adapters::FileStore,
//!     learning::{LearningAgent, LearningConfig},
//!     pipeline::GameState,
//! };
//!
//! let p1 = LearningAgent::new("p1", LearningConfig::default())?.with_seed(1);
//! let p2 = LearningAgent::new("p2", LearningConfig::default())?.with_seed(2);
//!
//! let mut game = GameState::new(p1, p2);
//! let result = game.play_training_batch(50_000)?;
//! println!("draw rate: {:.2}", result.draw_rate);
//!
//! let (p1, _) = game.into_agents();
//! p1.save_to(&FileStore::new("policy_p1"))?;
//! # Ok::<(), tictactoe_td::Error>(())
//! ```

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod learning;
pub mod pipeline;
pub mod ports;
pub mod tictactoe;
pub mod types;

pub use error::{Error, Result};
