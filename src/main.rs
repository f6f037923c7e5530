//! CLI entry point for the shape and phrase example generator

use std::str::FromStr;

use clap::Parser;
use log::{LevelFilter, debug, info};
use shapegen::io::cli::{BatchProcessor, Cli};

fn main() -> shapegen::Result<()> {
    let cli = Cli::parse();

    // Allow print for feedback before the logger exists
    #[allow(clippy::print_stderr)]
    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", cli.log_level);
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting shapegen");
    debug!(cli:?; "Parsed arguments");

    let mut processor = BatchProcessor::new(cli);
    processor.process()?;
    Ok(())
}
