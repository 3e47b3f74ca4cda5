//! Line-oriented driver that plays a session from text commands.
//!
//! Each input line is one command; each command produces one JSON line on
//! the output. Malformed lines are reported and skipped.
//!
//! ```text
//! 7 1            click (row, col)
//! select 7 1     select a piece
//! move 4 1       move the selection or drop it
//! targets 7 1    legal targets of the piece on (7, 1)
//! reset 8 8      new game
//! show           current state
//! ```

use anyhow::{Context, Result};
use derive_more::{Display, Error};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, instrument, warn};
use unvoid_core::{GameSession, Position, SessionSnapshot, legal_targets};

/// A parsed script command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptCommand {
    /// Phase-dependent click.
    Click(Position),
    /// Select a piece.
    Select(Position),
    /// Move the selected piece or deselect.
    Move(Position),
    /// Legal targets of the piece on a square.
    Targets(Position),
    /// Start over with the given rows and cols.
    Reset(usize, usize),
    /// Report the current state.
    Show,
}

/// A line that is not a valid command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Cannot parse '{}': {}", line, reason)]
pub struct ParseCommandError {
    /// The offending line.
    pub line: String,
    /// What was wrong with it.
    pub reason: String,
}

impl ParseCommandError {
    fn new(line: &str, reason: impl Into<String>) -> Self {
        Self {
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}

impl FromStr for ScriptCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let pair = |a: &str, b: &str| -> Result<(i32, i32), ParseCommandError> {
            let a = a
                .parse()
                .map_err(|_| ParseCommandError::new(line, format!("'{a}' is not a number")))?;
            let b = b
                .parse()
                .map_err(|_| ParseCommandError::new(line, format!("'{b}' is not a number")))?;
            Ok((a, b))
        };

        match words.as_slice() {
            [row, col] => pair(*row, *col).map(|p| ScriptCommand::Click(p.into())),
            ["click", row, col] => pair(*row, *col).map(|p| ScriptCommand::Click(p.into())),
            ["select", row, col] => pair(*row, *col).map(|p| ScriptCommand::Select(p.into())),
            ["move", row, col] => pair(*row, *col).map(|p| ScriptCommand::Move(p.into())),
            ["targets", row, col] => pair(*row, *col).map(|p| ScriptCommand::Targets(p.into())),
            ["reset", rows, cols] => {
                let rows = rows
                    .parse()
                    .map_err(|_| ParseCommandError::new(line, "rows must be a positive number"))?;
                let cols = cols
                    .parse()
                    .map_err(|_| ParseCommandError::new(line, "cols must be a positive number"))?;
                Ok(ScriptCommand::Reset(rows, cols))
            }
            ["show"] => Ok(ScriptCommand::Show),
            _ => Err(ParseCommandError::new(line, "unknown command")),
        }
    }
}

/// One JSON output line.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ScriptResponse {
    /// Session state after a command.
    Snapshot(Box<SessionSnapshot>),
    /// Answer to a `targets` query.
    Targets {
        /// Queried square.
        from: Position,
        /// Legal destinations.
        targets: Vec<Position>,
    },
    /// A rejected line.
    Error {
        /// Why it was rejected.
        error: String,
    },
}

/// Applies one command to the session.
#[instrument(skip(session))]
pub fn execute(session: &mut GameSession, command: ScriptCommand) -> ScriptResponse {
    let snapshot = |session: &GameSession| ScriptResponse::Snapshot(Box::new(session.snapshot()));

    match command {
        ScriptCommand::Click(pos) => snapshot(session.click(pos)),
        ScriptCommand::Select(pos) => snapshot(session.select(pos)),
        ScriptCommand::Move(pos) => snapshot(session.move_or_deselect(pos)),
        ScriptCommand::Show => snapshot(session),
        ScriptCommand::Targets(from) => ScriptResponse::Targets {
            from,
            targets: legal_targets(session.board(), from),
        },
        ScriptCommand::Reset(rows, cols) => match session.reset(rows, cols) {
            Ok(session) => snapshot(session),
            Err(err) => ScriptResponse::Error {
                error: err.to_string(),
            },
        },
    }
}

/// Reads commands from `input` until EOF, writing one JSON line per command.
///
/// Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Fails only on I/O or serialization errors; bad commands are reported inline.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(session: &mut GameSession, input: R, mut output: W) -> Result<()> {
    for (number, line) in input.lines().enumerate() {
        let line = line.context("Failed to read script input")?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let response = match trimmed.parse::<ScriptCommand>() {
            Ok(command) => {
                debug!(line = number + 1, ?command, "Executing command");
                execute(session, command)
            }
            Err(err) => {
                warn!(line = number + 1, error = %err, "Rejected script line");
                ScriptResponse::Error {
                    error: err.to_string(),
                }
            }
        };

        serde_json::to_writer(&mut output, &response).context("Failed to encode response")?;
        writeln!(output).context("Failed to write response")?;
    }
    output.flush().context("Failed to flush output")?;
    Ok(())
}
