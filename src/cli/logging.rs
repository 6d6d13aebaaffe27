//! Tracing subscriber setup for the binary

use anyhow::{Result, anyhow};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install a stderr fmt subscriber filtered by `RUST_LOG`.
///
/// Without `RUST_LOG` the filter defaults to `info`; `verbose` raises this
/// crate to `debug`. Stdout is left to the board and the command output.
pub fn init_tracing(verbose: bool) -> Result<()> {
    let mut env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    if verbose {
        env_filter = env_filter.add_directive("tictactoe_td=debug".parse()?);
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}
