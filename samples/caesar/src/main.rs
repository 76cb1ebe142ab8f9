//! Caesar cipher command-line tool.
//!
//! ```text
//! caesar <-e|--encode|-d|--decode> <seed> <filename>
//! ```
//!
//! Writes the encoded or decoded file as `acc_<filename>` next to the input.
//! Set `RUST_LOG` to change the log filter.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Encode or decode a file with a Caesar cipher.
#[derive(Debug, Parser)]
#[command(name = "caesar", version)]
struct Cli {
    /// -e, --encode, -d or --decode
    #[arg(allow_hyphen_values = true)]
    operation: String,

    /// Shift between 0 and 255
    #[arg(allow_hyphen_values = true)]
    seed: String,

    /// File to transform
    filename: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,caesar=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    info!(operation = %cli.operation, seed = %cli.seed, filename = %cli.filename.display(), "starting");

    let written = caesar::run(&cli.operation, &cli.seed, &cli.filename)
        .into_result()
        .with_context(|| format!("failed to process {}", cli.filename.display()))?;

    info!(output = %written.display(), "done");
    Ok(())
}
