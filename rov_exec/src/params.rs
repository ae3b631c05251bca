//! # Rover Executable Parameters
//!
//! This module provide parameters for the rover executable.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use log::LevelFilter;
use serde::Deserialize;
use util::logger::LogTarget;

use crate::grid::GridBound;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct RovExecParams {

    /// Prompt shown when waiting for a line of input
    pub prompt: String,

    /// Name of the interactive history file, relative to the software root
    pub history_file_name: String,

    /// Minimum level of log messages, must be `Info` or more verbose
    pub log_level: LevelFilter,

    /// Where log messages are copied to besides the session log file. The
    /// shell prints to stdout, so this defaults to the session file only.
    #[serde(default)]
    pub log_target: LogTarget,

    /// Grid bound used when the grid size prompt is left blank. If not set a
    /// blank answer is an error.
    #[serde(default)]
    pub default_grid: Option<GridBound>
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl Default for RovExecParams {
    fn default() -> Self {
        Self {
            prompt: String::from("> "),
            history_file_name: String::from("history.txt"),
            log_level: LevelFilter::Info,
            log_target: LogTarget::SessionFile,
            default_grid: None
        }
    }
}
