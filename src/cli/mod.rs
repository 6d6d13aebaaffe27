//! Command-line interface
//!
//! Subcommands for self-play training, playing a trained agent, evaluating
//! two trained agents against each other and inspecting saved value tables.

pub mod commands;
pub mod logging;
pub mod output;
