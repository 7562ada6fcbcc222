//! logcmp binary entry point.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use logcmp::config::{CompareConfig, DecodePolicy, DEFAULT_FILE1, DEFAULT_FILE2};

#[derive(Parser)]
#[command(name = "logcmp", version)]
#[command(about = "Normalize two console transcripts and compare them line by line")]
struct Cli {
    /// First transcript file
    #[arg(default_value = DEFAULT_FILE1)]
    file1: PathBuf,

    /// Second transcript file
    #[arg(default_value = DEFAULT_FILE2)]
    file2: PathBuf,

    /// Treat invalid UTF-8 as an error instead of decoding lossily
    #[arg(long)]
    strict: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = CompareConfig {
        file1: cli.file1,
        file2: cli.file2,
        decode: if cli.strict {
            DecodePolicy::Strict
        } else {
            DecodePolicy::Lossy
        },
    };

    // Semantic mismatches are ordinary output, not errors: exit 0 either
    // way. Only a read/decode failure exits nonzero.
    let report = logcmp::run(&config)?;
    print!("{}", report);
    Ok(())
}
