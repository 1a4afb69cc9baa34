//! canonseal - seal registry record batches with signed manifests.
//!
//! This binary wires the pipeline stages to the filesystem adapters. Each
//! invocation runs exactly one stage; stages communicate only through files,
//! so CI can run them as separate steps and branch on the exit code.

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = commands::dispatch(cli.command) {
        error!("{}", e);
        eprintln!("canonseal: {}", e);
        std::process::exit(e.exit_code());
    }
}
