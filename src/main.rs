//! Unvoid - unified CLI
//!
//! Play in the terminal, drive a game from a script, or print a board.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, instrument};
use unvoid::{
    Board, GameConfig, GameSession,
    cli::{Cli, Command},
    logging::{self, LogTarget},
    script, tui,
};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let size = cli.command.size();
    let config = GameConfig::discover(cli.config.as_deref())
        .and_then(|config| config.with_size(size.rows, size.cols))
        .context("Failed to load configuration")?;

    let target = match cli.command {
        Command::Play { .. } => LogTarget::File(config.log_file()),
        Command::Script { .. } | Command::Board { .. } => LogTarget::Stderr,
    };
    logging::init(target, config.log_filter())?;

    match cli.command {
        Command::Play { .. } => tui::run(&config),
        Command::Script { .. } => run_script(&config),
        Command::Board { .. } => print_board(&config),
    }
}

/// Plays commands from stdin, answering on stdout.
#[instrument(skip_all)]
fn run_script(config: &GameConfig) -> Result<()> {
    let mut session = GameSession::new(*config.rows(), *config.cols())?;
    info!(rows = config.rows(), cols = config.cols(), "Reading commands from stdin");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    script::run(&mut session, stdin.lock(), stdout.lock())
}

/// Prints the starting position.
fn print_board(config: &GameConfig) -> Result<()> {
    let board = Board::new(*config.rows(), *config.cols())?;
    println!("{board}");
    Ok(())
}
