//! tictactoe-td CLI - train, play against and inspect state-value learners

use anyhow::Result;
use clap::{Parser, Subcommand};
use tictactoe_td::cli::{
    commands::{evaluate, inspect, play, train},
    logging::init_tracing,
};

#[derive(Parser)]
#[command(name = "tictactoe-td")]
#[command(version, about = "Tabular state-value learning for tic-tac-toe", long_about = None)]
struct Cli {
    /// Log debug events from the learner
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train two agents by self-play and save their value tables
    Train(train::TrainArgs),

    /// Play against a trained agent
    Play(play::PlayArgs),

    /// Evaluate a trained agent against another
    Evaluate(evaluate::EvaluateArgs),

    /// Summarize a saved value table
    Inspect(inspect::InspectArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Train(args) => train::execute(args),
        Commands::Play(args) => play::execute(args),
        Commands::Evaluate(args) => evaluate::execute(args),
        Commands::Inspect(args) => inspect::execute(args),
    }
}
