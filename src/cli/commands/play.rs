//! Play command - a human against a trained agent

use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    adapters::HumanPlayer,
    app::{AgentConfig, App},
    learning::LearningConfig,
    pipeline::GameState,
};

#[derive(Parser, Debug)]
#[command(about = "Play against a trained agent")]
pub struct PlayArgs {
    /// Value table of the computer player, which moves first
    #[arg(long, default_value = "policy_p1")]
    pub policy: PathBuf,

    /// Name announced when the human wins
    #[arg(long, default_value = "human")]
    pub name: String,

    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 1)]
    pub games: usize,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let app = App::new();
    let computer = app
        .load_agent(
            AgentConfig::new("computer")
                .with_learning(LearningConfig::default().with_exploration_rate(0.0)),
            &args.policy,
        )
        .with_context(|| format!("failed to load {}", args.policy.display()))?;

    let mut game = GameState::new(computer, HumanPlayer::stdio(args.name));
    let mut out = io::stdout();
    for _ in 0..args.games {
        game.play_interactive(&mut out).context("game aborted")?;
    }
    Ok(())
}
