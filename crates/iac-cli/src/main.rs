//! # iac - Interactive Activation and Competition network simulator
//!
//! Builds IAC networks from TOML descriptions, runs them, and prints the
//! settled activations.

use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use iac_cli::IacCli;

fn main() {
    let cli = IacCli::parse();

    // Initialize logging with environment variable support; library `log`
    // records are bridged into the same subscriber
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Err(err) = cli.execute() {
        error!("Command failed: {}", err);
        std::process::exit(1);
    }
}
