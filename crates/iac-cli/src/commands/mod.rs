//! CLI command implementations for the IAC simulator

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::NetworkFile;
use crate::error::{CliError, CliResult};

pub mod init;
pub mod inspect;
pub mod run;

/// iac - Interactive Activation and Competition network simulator
#[derive(Parser, Debug)]
#[command(
    name = "iac",
    version,
    about = "Interactive Activation and Competition network simulator",
    long_about = "Build IAC networks of mutually inhibitory pools joined through a hub \
                  pool, inject input, and read out the settled activations."
)]
pub struct IacCli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the reference network description to a file
    #[command(alias = "new")]
    Init(init::InitCommand),

    /// Run a network and print the final activations
    Run(run::RunCommand),

    /// Show the structure of a network
    Inspect(inspect::InspectCommand),
}

impl IacCli {
    /// Execute the CLI command
    pub fn execute(self) -> CliResult<()> {
        match self.command {
            Commands::Init(cmd) => cmd.execute(),
            Commands::Run(cmd) => cmd.execute(),
            Commands::Inspect(cmd) => cmd.execute(),
        }
    }
}

/// Where a command reads its network from
#[derive(Args, Debug)]
pub struct NetworkSource {
    /// Network description file (.toml)
    #[arg(conflicts_with = "demo")]
    pub file: Option<PathBuf>,

    /// Use the built-in reference network
    #[arg(long)]
    pub demo: bool,
}

impl NetworkSource {
    /// Load the selected network description
    pub fn load(&self) -> CliResult<NetworkFile> {
        match (&self.file, self.demo) {
            (Some(path), false) => NetworkFile::load_from_file(path),
            (None, true) => Ok(NetworkFile::reference()),
            _ => Err(CliError::invalid_args("provide a network file or --demo")),
        }
    }
}
