//! Inspect command - summarize a saved value table

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    adapters::FileStore,
    cli::output::{format_number, print_kv, print_section, print_subsection},
    learning::SavedValueTable,
    ports::ValueStore,
};

#[derive(Parser, Debug)]
#[command(about = "Show what a saved value table contains")]
pub struct InspectArgs {
    /// Saved value table
    #[arg(default_value = "policy_p1")]
    pub policy: PathBuf,

    /// Number of highest-valued states to list
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    /// Print the whole table as JSON instead
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: InspectArgs) -> Result<()> {
    let blob = FileStore::new(&args.policy)
        .load()
        .with_context(|| format!("failed to read {}", args.policy.display()))?;
    let saved = SavedValueTable::from_bytes(&blob)
        .with_context(|| format!("failed to decode {}", args.policy.display()))?;

    if args.json {
        println!("{}", saved.to_json_pretty()?);
        return Ok(());
    }

    print_section(&format!("Value table: {}", args.policy.display()));
    print_kv("Agent", &saved.name);
    print_kv("Format version", &saved.version.to_string());
    print_kv("Games learned", &format_number(saved.metadata.episodes));
    print_kv(
        "Seed",
        &saved
            .metadata
            .seed
            .map_or_else(|| "none".to_string(), |seed| seed.to_string()),
    );
    print_kv("States", &format_number(saved.values.len()));

    if args.top > 0 && !saved.values.is_empty() {
        print_subsection(&format!("Top {} states", args.top));
        for (state, value) in saved.values.ranked().into_iter().take(args.top) {
            println!("  {state}  {value:.6}");
        }
    }
    Ok(())
}
