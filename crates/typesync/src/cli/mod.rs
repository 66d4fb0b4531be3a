mod generate;
mod init;

pub use generate::GenerateCommand;
pub use init::InitCommand;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// typesync - keep Django models and TypeScript types in sync
#[derive(Parser)]
#[command(name = "typesync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate TypeScript interfaces from Django models.
    Generate(GenerateCommand),

    /// Create a starter typesync.toml in the current directory.
    Init(InitCommand),
}

impl Cli {
    /// Execute the CLI command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Generate(cmd) => cmd.execute(),
            Commands::Init(cmd) => cmd.execute(),
        }
    }
}
