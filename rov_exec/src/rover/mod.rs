//! # Rover module
//!
//! A rover sits on a [`Grid`](crate::grid::Grid), faces one of the four
//! cardinal directions and carries a fixed program of turn and move
//! instructions which it executes when run.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod instruction;
mod orientation;
mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use instruction::*;
pub use orientation::*;
pub use state::*;

use crate::grid::CoordinateError;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible reasons a rover cannot be built.
///
/// Only the first failing check is reported.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RoverError {
    #[error("Rover has an invalid coordinate: {0}")]
    InvalidCoordinate(#[from] CoordinateError),

    #[error("Rover has an invalid orientation {0:?}, expected one of N, E, S or W")]
    InvalidOrientation(String),

    #[error(
        "Rover has an invalid instruction {symbol:?} at position {index}, \
        expected one of L, R or M")]
    InvalidInstruction { index: usize, symbol: String },
}
