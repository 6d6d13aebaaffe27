//! Evaluate command - pit two trained agents against each other

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    app::{AgentConfig, App},
    cli::output::{format_count, format_number, print_kv, print_section},
    learning::LearningConfig,
    pipeline::GameState,
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate a trained agent against another")]
pub struct EvaluateArgs {
    /// Value table of the evaluated agent, which plays greedily and moves first
    #[arg(long, default_value = "policy_p1")]
    pub first_policy: PathBuf,

    /// Value table of the opponent
    #[arg(long, default_value = "policy_p2")]
    pub second_policy: PathBuf,

    /// Exploration rate of the opponent
    #[arg(long, default_value_t = LearningConfig::DEFAULT_EXPLORATION_RATE)]
    pub opponent_exploration_rate: f64,

    /// Number of evaluation games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for the opponent's exploration
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    let app = App::new();
    let first = app
        .load_agent(
            AgentConfig::new("computer")
                .with_learning(LearningConfig::default().with_exploration_rate(0.0)),
            &args.first_policy,
        )
        .with_context(|| format!("failed to load {}", args.first_policy.display()))?;

    let mut opponent = AgentConfig::new("opponent").with_learning(
        LearningConfig::default().with_exploration_rate(args.opponent_exploration_rate),
    );
    if let Some(seed) = args.seed {
        opponent = opponent.with_seed(seed);
    }
    let second = app
        .load_agent(opponent, &args.second_policy)
        .with_context(|| format!("failed to load {}", args.second_policy.display()))?;

    let mut game = GameState::new(first, second);
    let result = game.evaluate(args.games).context("evaluation failed")?;

    print_section("Evaluation");
    print_kv("Games", &format_number(result.total_games()));
    print_kv("wins", &format_count(result.wins, result.win_rate()));
    print_kv("tie", &format_count(result.ties, result.tie_rate()));
    print_kv("lose", &format_count(result.losses, result.loss_rate()));
    Ok(())
}
