use clap::Parser;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use burndown::cli::args::Args;
use burndown::cli::commands;
use burndown::constants;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_tracing(args.log_level())?;

    commands::run_report(&args)
}

/// Logs go to stderr so the report on stdout stays clean.
fn init_tracing(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_env(constants::ENV_LOG_FILTER)
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init()
        .map_err(|e| eyre!("failed to initialize tracing subscriber: {e}"))
}
