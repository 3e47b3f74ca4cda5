//! Command-line interface for unvoid.

use clap::{Args, Parser, Subcommand};

/// Unvoid - a two-player board game of Product Owners, Developers and Designers
#[derive(Parser, Debug)]
#[command(name = "unvoid")]
#[command(about = "Play Unvoid in the terminal or drive it from a script", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./unvoid.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Board size overrides shared by every command.
#[derive(Args, Debug, Clone, Copy)]
pub struct SizeArgs {
    /// Board rows (6-12)
    #[arg(long)]
    pub rows: Option<usize>,

    /// Board columns (6-12)
    #[arg(long)]
    pub cols: Option<usize>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Board size
        #[command(flatten)]
        size: SizeArgs,
    },

    /// Read commands from stdin and print one JSON snapshot per command
    Script {
        /// Board size
        #[command(flatten)]
        size: SizeArgs,
    },

    /// Print the starting position
    Board {
        /// Board size
        #[command(flatten)]
        size: SizeArgs,
    },
}

impl Command {
    /// Size overrides given to the command.
    pub fn size(&self) -> SizeArgs {
        match self {
            Command::Play { size } | Command::Script { size } | Command::Board { size } => *size,
        }
    }
}
