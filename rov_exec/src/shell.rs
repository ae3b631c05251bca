//! # Rover shell
//!
//! The prompt loop which asks for a grid size and then drives one rover after
//! another over it, printing each rover's final position and orientation.
//!
//! Lines are read from a [`LineSource`], either an interactive line editor or
//! a script replayed line by line.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, info, warn};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::collections::VecDeque;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

// Internal
use crate::grid::{CoordinateError, Grid};
use crate::input;
use crate::params::RovExecParams;
use crate::rover::{Rover, RoverError};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Lines in a script starting with this are skipped.
const SCRIPT_COMMENT: char = '#';

// ---------------------------------------------------------------------------
// TRAITS
// ---------------------------------------------------------------------------

/// A source of input lines for the shell.
pub trait LineSource {
    /// Get the next line, showing `prompt` if the source is interactive.
    ///
    /// Returns `Ok(None)` once there is no more input.
    fn next_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError>;
}

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Interactive line source backed by a `rustyline` editor.
pub struct Interactive {
    editor: DefaultEditor,
    history_path: Option<PathBuf>
}

/// Line source replaying a script, one answer per line.
#[derive(Debug, Default)]
pub struct Script {
    lines: VecDeque<String>
}

/// The rover shell.
#[derive(Debug)]
pub struct Shell<'p> {
    params: &'p RovExecParams
}

/// What happened during a shell run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ShellSummary {
    /// The grid the rovers were driven on, `None` if the shell exited before
    /// it was defined.
    pub grid: Option<Grid>,

    /// Final state of each rover which ran, in order.
    pub reports: Vec<String>,

    /// Number of rovers which were skipped for being invalid.
    pub num_invalid: usize
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Could not find the script at {0}")]
    ScriptNotFound(String),

    #[error("Could not load the script: {0}")]
    ScriptLoadError(std::io::Error),

    #[error("Line editor failed: {0}")]
    EditorError(ReadlineError),

    #[error("Invalid grid size: {0}")]
    InvalidGrid(CoordinateError),

    #[error("Could not write shell output: {0}")]
    OutputError(#[from] std::io::Error)
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Interactive {
    /// Create a new interactive source, loading history from `history_path`
    /// if one is given.
    pub fn new(history_path: Option<PathBuf>) -> Result<Self, ShellError> {
        let mut editor = DefaultEditor::new().map_err(ShellError::EditorError)?;

        if let Some(path) = &history_path {
            if editor.load_history(path).is_err() {
                info!("No history detected at {:?}", path);
            }
        }

        Ok(Self {
            editor,
            history_path
        })
    }

    /// Save the line history, if there is a history path.
    pub fn save_history(&mut self) -> Result<(), ShellError> {
        match &self.history_path {
            Some(path) => self.editor
                .save_history(path)
                .map_err(ShellError::EditorError),
            None => Ok(())
        }
    }
}

impl LineSource for Interactive {
    fn next_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                    warn!("Could not add line to history: {}", e);
                }
                Ok(Some(line))
            },
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(ShellError::EditorError(e))
        }
    }
}

impl Script {
    /// Build a script from its contents. Comment lines are dropped, blank
    /// lines are kept since a blank instruction line is a valid answer.
    pub fn new(contents: &str) -> Self {
        let lines = contents
            .lines()
            .filter(|l| !l.trim_start().starts_with(SCRIPT_COMMENT))
            .map(|l| l.trim().to_string())
            .collect();

        Self { lines }
    }

    /// Load a script from a file.
    pub fn load<P: AsRef<Path>>(script_path: P) -> Result<Self, ShellError> {
        let path = script_path.as_ref();

        if !path.exists() {
            return Err(ShellError::ScriptNotFound(path.display().to_string()));
        }

        let contents = fs::read_to_string(path).map_err(ShellError::ScriptLoadError)?;

        Ok(Self::new(&contents))
    }

    /// Number of lines left in the script.
    pub fn num_lines(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for Script {
    fn next_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        let line = self.lines.pop_front();

        if let Some(l) = &line {
            debug!("{}{}", prompt, l);
        }

        Ok(line)
    }
}

impl<'p> Shell<'p> {
    pub fn new(params: &'p RovExecParams) -> Self {
        Self { params }
    }

    /// Run the shell until the input ends or `exit` is entered.
    ///
    /// An invalid grid size ends the shell with an error. An invalid rover is
    /// reported and skipped.
    pub fn run<S, W>(&self, source: &mut S, out: &mut W) -> Result<ShellSummary, ShellError>
    where
        S: LineSource,
        W: Write
    {
        let mut summary = ShellSummary::default();

        writeln!(out, "Type {} to quit", input::EXIT_COMMAND)?;
        writeln!(out, "Please enter max grid size in format \"X Y\"")?;

        let grid = match self.next_command(source)? {
            Some(line) => self.define_grid(&line)?,
            None => {
                info!("Input ended before the grid was defined");
                return Ok(summary)
            }
        };
        info!("Grid defined: {}", grid);
        summary.grid = Some(grid);

        writeln!(out, "=====MARS=ROVER=TIME===")?;

        loop {
            writeln!(out, "Please enter new rover starting position and orientation")?;
            writeln!(out, "Format X Y Orientation")?;
            let start = match self.next_command(source)? {
                Some(l) => l,
                None => break
            };

            writeln!(out, "Please enter movement instructions")?;
            writeln!(out, "L = Turn left | R = Turn right | M = Move forward")?;
            let program = match self.next_command(source)? {
                Some(l) => l,
                None => break
            };

            match build_rover(&grid, &start, &program) {
                Ok(mut rover) => {
                    rover.run();

                    writeln!(out, "Rover position and orientation:")?;
                    writeln!(out, "{}", rover)?;

                    debug!("Rover {} final state: {}", summary.reports.len(), rover);
                    summary.reports.push(rover.to_string());
                },
                Err(e) => {
                    warn!("Skipping invalid rover: {}", e);
                    writeln!(out, "Rover is invalid: {}", e)?;
                    summary.num_invalid += 1;
                }
            }
        }

        info!(
            "Shell finished, {} rovers reported and {} skipped",
            summary.reports.len(),
            summary.num_invalid
        );

        Ok(summary)
    }

    /// Get the next line, or `None` if the input has ended or asked to exit.
    fn next_command<S: LineSource>(&self, source: &mut S) -> Result<Option<String>, ShellError> {
        match source.next_line(&self.params.prompt)? {
            Some(line) if input::is_exit(&line) => {
                info!("Exit requested");
                Ok(None)
            },
            other => Ok(other)
        }
    }

    fn define_grid(&self, line: &str) -> Result<Grid, ShellError> {
        let (max_x, max_y) = match self.params.default_grid {
            Some(bound) if line.trim().is_empty() => {
                info!("No grid size given, using the default");
                (bound.max_x, bound.max_y)
            },
            _ => input::parse_grid_line(line).map_err(ShellError::InvalidGrid)?
        };

        Grid::bounded(max_x, max_y).map_err(ShellError::InvalidGrid)
    }
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

/// Build a rover from its start line and instruction line.
fn build_rover(grid: &Grid, start: &str, program: &str) -> Result<Rover, RoverError> {
    let start = input::parse_start_line(start)?;

    Rover::new(
        grid,
        (start.x, start.y),
        &start.orientation,
        input::parse_instruction_line(program)
    )
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
