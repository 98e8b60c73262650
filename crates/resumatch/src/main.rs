mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so --json output stays clean; RUST_LOG overrides "warn"
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rank {
            job,
            job_text,
            paths,
            config,
            top,
            json,
        } => commands::rank::run(commands::rank::RankArgs {
            job,
            job_text,
            paths,
            config,
            top,
            json,
        }),
        Commands::Inspect { file, config } => commands::inspect::run(&file, config.as_deref()),
        Commands::Config => commands::config::run(),
        Commands::Version => commands::version::run(),
    }
}
