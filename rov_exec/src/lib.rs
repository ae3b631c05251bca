//! # Rover library.
//!
//! This library allows other crates in the workspace to access items defined inside the rover 
//! crate.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Grid module - the bounded grid and the coordinates on it
pub mod grid;

/// Input module - tokenises lines of text into grid and rover inputs
pub mod input;

/// Executable parameters
pub mod params;

/// Rover module - orientation, instructions and the rover state machine
pub mod rover;

/// Shell - the prompt loop driving rovers from interactive or scripted input
pub mod shell;
