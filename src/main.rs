//! CLI entry point for the Hilbert-guided cave generator

use clap::Parser;
use hilbertcave::io::cli::{CaveRunner, Cli};

fn main() -> hilbertcave::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let runner = CaveRunner::new(cli);
    runner.process()?;
    Ok(())
}
