//! Network file initialization command

use clap::Args;
use std::path::PathBuf;
use tracing::info;

use crate::config::NetworkFile;
use crate::error::{CliError, CliResult};

/// Write the reference network description
#[derive(Args, Debug)]
pub struct InitCommand {
    /// Output path for the network file
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn execute(self) -> CliResult<()> {
        if self.path.exists() && !self.force {
            return Err(CliError::invalid_args(format!(
                "{} already exists (use --force to overwrite)",
                self.path.display()
            )));
        }

        NetworkFile::reference().save_to_file(&self.path)?;
        info!("Wrote reference network to {}", self.path.display());
        Ok(())
    }
}
