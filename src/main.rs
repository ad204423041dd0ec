use anyhow::{Context, Result};
use clap::Parser;
use pgn_uci::{Batch, CompressionMode, ConverterConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pgn-uci",
    version,
    about = "Convert a multi-game PGN file into one line of UCI moves per game"
)]
struct Args {
    /// Input PGN file or glob pattern
    #[arg(long, short, default_value = pgn_uci::config::DEFAULT_INPUT)]
    input: String,

    /// Output file, overwritten
    #[arg(long, short, default_value = pgn_uci::config::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Input compression: auto, plain or zstd
    #[arg(long, default_value = "auto", value_parser = CompressionMode::parse)]
    compression: CompressionMode,

    /// Abort on the first game that fails to convert
    #[arg(long)]
    fail_fast: bool,

    /// Write failed games as JSON lines to this file
    #[arg(long)]
    failure_report: Option<PathBuf>,
}

impl From<Args> for ConverterConfig {
    fn from(args: Args) -> Self {
        Self {
            input: args.input,
            output: args.output,
            compression: args.compression,
            fail_fast: args.fail_fast,
            failure_report: args.failure_report,
        }
    }
}

fn main() -> Result<()> {
    pgn_uci::log::init();
    let config = ConverterConfig::from(Args::parse());

    let batch = Batch::load(&config.input, config.compression)
        .with_context(|| format!("reading '{}'", config.input))?;
    println!("Total games {}", batch.game_count());

    let report = batch
        .convert(&config)
        .with_context(|| format!("writing '{}'", config.output.display()))?;

    if !report.failures.is_empty() {
        eprintln!(
            "{} of {} game(s) could not be converted",
            report.failures.len(),
            report.games_found
        );
    }
    Ok(())
}
