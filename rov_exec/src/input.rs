//! # Input module
//!
//! Turns the raw lines typed into the shell into the values the grid and
//! rover are built from. Nothing here validates against the grid, that is
//! left to [`Grid`](crate::grid::Grid) and [`Rover`](crate::rover::Rover).

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use crate::grid::{Axis, CoordinateError};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Typing this at any prompt ends the shell.
pub const EXIT_COMMAND: &str = "exit";

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A tokenised rover start line, `X Y O`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartLine {
    pub x: i64,
    pub y: i64,

    /// The raw orientation token, empty if none was given.
    pub orientation: String,
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Returns `true` if the line asks to leave the shell.
pub fn is_exit(line: &str) -> bool {
    line.trim() == EXIT_COMMAND
}

/// Parse one axis value from an optional token.
pub fn parse_axis(axis: Axis, token: Option<&str>) -> Result<i64, CoordinateError> {
    let token = token.ok_or(CoordinateError::Missing(axis))?;

    token.parse().map_err(|_| CoordinateError::NotAnInteger {
        axis,
        value: token.to_string(),
    })
}

/// Parse a grid size line, `X Y`.
pub fn parse_grid_line(line: &str) -> Result<(i64, i64), CoordinateError> {
    let mut tokens = line.split_whitespace();

    let x = parse_axis(Axis::X, tokens.next())?;
    let y = parse_axis(Axis::Y, tokens.next())?;

    Ok((x, y))
}

/// Parse a rover start line, `X Y O`. Tokens after the orientation are
/// ignored.
pub fn parse_start_line(line: &str) -> Result<StartLine, CoordinateError> {
    let mut tokens = line.split_whitespace();

    let x = parse_axis(Axis::X, tokens.next())?;
    let y = parse_axis(Axis::Y, tokens.next())?;
    let orientation = tokens.next().unwrap_or_default().to_string();

    Ok(StartLine { x, y, orientation })
}

/// Split an instruction line into one symbol per non-whitespace character.
pub fn parse_instruction_line(line: &str) -> Vec<String> {
    line.chars()
        .filter(|c| !c.is_whitespace())
        .map(String::from)
        .collect()
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
