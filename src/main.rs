//! Alphahide - hide text in the alpha channel of images
//!
//! A CLI tool around the alphahide codec: encode a message into a PNG,
//! decode it back, or check how much an image can hold.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CapacityCommand, CommandExecutor, DecodeCommand, EncodeCommand};

/// Alphahide - hide text in the alpha channel of images
#[derive(Parser)]
#[command(name = "alphahide")]
#[command(version)]
#[command(about = "Hide text in the alpha channel of images using threshold polynomial shares")]
#[command(long_about = None)]
struct Cli {
    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide a message in an image (output is always PNG)
    Encode(EncodeCommand),

    /// Recover a hidden message from an image
    Decode(DecodeCommand),

    /// Show how many code units an image can hold
    Capacity(CapacityCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Encode(cmd) => cmd.execute(),
        Commands::Decode(cmd) => cmd.execute(),
        Commands::Capacity(cmd) => cmd.execute(),
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
