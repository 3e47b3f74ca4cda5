//! Terminal UI for Unvoid.
//!
//! Two players share the keyboard: arrows move the cursor, Enter clicks the
//! square under it.

mod app;
mod input;
mod ui;

pub use app::{App, Flow};
pub use input::move_cursor;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

use crate::config::GameConfig;

/// Runs the terminal UI until the user quits.
///
/// # Errors
///
/// Fails if the terminal cannot be set up or drawn to.
#[instrument(skip_all, fields(rows = config.rows(), cols = config.cols()))]
pub fn run(config: &GameConfig) -> Result<()> {
    let mut app = App::new(config).context("Failed to start game")?;
    info!("Starting Unvoid TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app.session(), app.cursor()))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key.code) == Flow::Quit {
                return Ok(());
            }
        }
    }
}
