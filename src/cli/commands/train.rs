//! Train command - two learning agents learn by playing each other

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use super::LearningArgs;
use crate::{
    app::{AgentConfig, App},
    cli::output::{format_count, format_number, print_kv, print_section},
    learning::LearningAgent,
    pipeline::{GameState, ProgressObserver},
};

/// Normalize a `--summary` argument to a JSON file path.
///
/// A trailing separator selects `training_summary.json` inside that directory;
/// any other extension is replaced with `.json`.
fn sanitize_summary_path(raw: &Path) -> PathBuf {
    let mut normalized = raw.to_path_buf();
    let raw_str = raw.as_os_str().to_string_lossy();

    if raw_str.ends_with(std::path::MAIN_SEPARATOR) || normalized.file_name().is_none() {
        normalized.push("training_summary.json");
        return normalized;
    }

    match normalized.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => normalized,
        _ => {
            normalized.set_extension("json");
            normalized
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Train two agents by self-play")]
pub struct TrainArgs {
    /// Number of training games
    #[arg(long, short = 'g', default_value_t = 50_000)]
    pub games: usize,

    /// Where the first (X) agent's value table is saved
    #[arg(long, default_value = "policy_p1")]
    pub first_policy: PathBuf,

    /// Where the second (O) agent's value table is saved
    #[arg(long, default_value = "policy_p2")]
    pub second_policy: PathBuf,

    /// Continue from the value tables already saved at the policy paths
    #[arg(long)]
    pub resume: bool,

    /// Random seed for reproducibility; the second agent uses seed + 1
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub learning: LearningArgs,

    /// Show a progress bar
    #[arg(long)]
    pub progress: bool,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    pub summary: Option<PathBuf>,
}

fn agent_config(name: &str, args: &TrainArgs, seed_offset: u64) -> AgentConfig {
    let config = AgentConfig::new(name).with_learning(args.learning.to_config());
    match args.seed {
        Some(seed) => config.with_seed(seed.wrapping_add(seed_offset)),
        None => config,
    }
}

fn build_agent(app: &App, config: AgentConfig, path: &Path, resume: bool) -> Result<LearningAgent> {
    if resume {
        app.load_agent(config, path)
            .with_context(|| format!("failed to resume from {}", path.display()))
    } else {
        app.create_agent(config).context("invalid learning configuration")
    }
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let app = App::new();
    let first = build_agent(
        &app,
        agent_config("p1", &args, 0),
        &args.first_policy,
        args.resume,
    )?;
    let second = build_agent(
        &app,
        agent_config("p2", &args, 1),
        &args.second_policy,
        args.resume,
    )?;

    println!("training...");
    let mut game = GameState::new(first, second);
    if args.progress {
        game = game.with_observer(Box::new(ProgressObserver::new()));
    }
    let result = game
        .play_training_batch(args.games)
        .context("training failed")?;
    let (first, second) = game.into_agents();

    app.save_agent(&first, &args.first_policy)
        .with_context(|| format!("failed to save {}", args.first_policy.display()))?;
    app.save_agent(&second, &args.second_policy)
        .with_context(|| format!("failed to save {}", args.second_policy.display()))?;

    print_section("Training Summary");
    print_kv("Games", &format_number(result.total_games));
    print_kv("X wins", &format_count(result.x_wins, result.x_win_rate));
    print_kv("O wins", &format_count(result.o_wins, result.o_win_rate));
    print_kv("Draws", &format_count(result.draws, result.draw_rate));
    print_kv("X states", &format_number(first.values().len()));
    print_kv("O states", &format_number(second.values().len()));
    print_kv("Saved", &args.first_policy.display().to_string());
    print_kv("Saved", &args.second_policy.display().to_string());

    if let Some(raw) = &args.summary {
        let path = sanitize_summary_path(raw);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        result
            .save(&path)
            .with_context(|| format!("failed to write summary {}", path.display()))?;
        print_kv("Summary", &path.display().to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_summary_path() {
        assert_eq!(
            sanitize_summary_path(Path::new("out/run")),
            PathBuf::from("out/run.json")
        );
        assert_eq!(
            sanitize_summary_path(Path::new("out/run.JSON")),
            PathBuf::from("out/run.JSON")
        );
        let dir = format!("out{}", std::path::MAIN_SEPARATOR);
        assert_eq!(
            sanitize_summary_path(Path::new(&dir)),
            Path::new("out").join("training_summary.json")
        );
    }

    #[test]
    fn test_second_agent_gets_offset_seed() {
        let args = TrainArgs::parse_from(["train", "--seed", "7"]);
        assert_eq!(agent_config("p1", &args, 0).seed, Some(7));
        assert_eq!(agent_config("p2", &args, 1).seed, Some(8));
        assert_eq!(args.games, 50_000);
        assert_eq!(args.first_policy, PathBuf::from("policy_p1"));
    }
}
