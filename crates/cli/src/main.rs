//! Entry point for the pushscan CLI.
//!
//! Parses command-line arguments, installs the tracing subscriber and dispatches to the
//! `scan` or `map` subcommand.

use clap::Parser;
use pushscan_cli::commands::{Cmd, Command};
use tracing_subscriber::EnvFilter;

/// Command-line interface for pushscan.
///
/// pushscan separates opcodes from PUSH data in EVM bytecode and reports how much gas
/// `PUSH1 0x00` → `PUSH0` would save.
#[derive(Parser)]
#[command(name = "pushscan")]
#[command(about = "pushscan: EVM code/data segmentation and PUSH0 savings")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    cli.command.execute().await
}
