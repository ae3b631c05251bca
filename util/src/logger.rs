//! Logger setup for the rover executables
//!
//! Every record goes to the session log file. Records can also be copied to
//! a terminal stream, chosen with [`LogTarget`]. An interactive shell owns
//! stdout, so it should log to the session file only, or to stderr.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External imports
use colored::{ColoredString, Colorize};
use log::{self, info};
use serde::Deserialize;
use thiserror::Error;

// Internal imports
use crate::session;

// Re-exports
pub use log::LevelFilter;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Errors associated with initialising the logger.
#[derive(Debug, Error)]
pub enum LoggerInitError {
    #[error("Expected a log level of at least `INFO`, found `{0}`")]
    InvalidMinLogLevel(log::LevelFilter),

    #[error("Error initialising the log file: {0}")]
    LogFileInitError(std::io::Error),

    #[error("An error occured while setting up the logger: {0}")]
    FernInitError(log::SetLoggerError)
}

/// Where log records are copied to, in addition to the session log file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogTarget {
    /// Session log file only
    SessionFile,
    /// Session log file and stderr
    Stderr,
    /// Session log file and stdout
    Stdout
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for LogTarget {
    fn default() -> Self {
        LogTarget::SessionFile
    }
}

impl LogTarget {
    /// The terminal stream records are copied to, if any.
    pub fn terminal(&self) -> Option<fern::Output> {
        match self {
            LogTarget::SessionFile => None,
            LogTarget::Stderr => Some(std::io::stderr().into()),
            LogTarget::Stdout => Some(std::io::stdout().into())
        }
    }
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Initialise the logger for this execution.
///
/// # Notes
///
/// - `min_level` must be `log::Level::Info` or more verbose.
/// - Level tags are coloured on the terminal and plain in the log file.
///
/// # Safety
///
/// - This function must only be called once to prevent corrupting logs.
pub fn logger_init(
    min_level: self::LevelFilter,
    target: LogTarget,
    session: &session::Session
) -> Result<(), LoggerInitError> {

    if min_level < log::Level::Info {
        return Err(LoggerInitError::InvalidMinLogLevel(min_level))
    }

    let log_file = fern::log_file(&session.log_file_path)
        .map_err(LoggerInitError::LogFileInitError)?;

    let mut dispatch = fern::Dispatch::new()
        .level(min_level)
        .level_for("rustyline", LevelFilter::Warn)
        .chain(
            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "{} {}",
                        line_prefix(
                            record.level(),
                            record.target(),
                            session::get_elapsed_seconds(),
                            false
                        ),
                        message
                    ))
                })
                .chain(log_file)
        );

    if let Some(terminal) = target.terminal() {
        dispatch = dispatch.chain(
            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "{} {}",
                        line_prefix(
                            record.level(),
                            record.target(),
                            session::get_elapsed_seconds(),
                            true
                        ),
                        message
                    ))
                })
                .chain(terminal)
        );
    }

    dispatch.apply().map_err(LoggerInitError::FernInitError)?;

    info!("Logging initialised");
    info!("    Session epoch: {}", session::get_epoch());
    info!("    Log level: {:?}", min_level);
    info!("    Log file path: {:?}", session.log_file_path);
    info!("    Terminal output: {:?}", target);

    Ok(())
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

/// Build the `[time LVL]` prefix of a log line. Debug and trace lines also
/// name the module that logged them.
fn line_prefix(level: log::Level, target: &str, elapsed_s: f64, coloured: bool) -> String {
    let tag = if coloured {
        level_to_str(level).to_string()
    }
    else {
        String::from(level_tag(level))
    };

    if level > log::Level::Info {
        format!("[{:10.6} {}] {}:", elapsed_s, tag, target)
    }
    else {
        format!("[{:10.6} {}]", elapsed_s, tag)
    }
}

/// Three letter tag of a log level
fn level_tag(level: log::Level) -> &'static str {
    match level {
        log::Level::Trace => "TRC",
        log::Level::Debug => "DBG",
        log::Level::Info  => "INF",
        log::Level::Warn  => "WRN",
        log::Level::Error => "ERR"
    }
}

/// Coloured tag of a log level, for terminals
fn level_to_str(level: log::Level) -> ColoredString {
    let tag = level_tag(level);

    match level {
        log::Level::Trace => tag.dimmed().italic(),
        log::Level::Debug => tag.dimmed(),
        log::Level::Info  => tag.normal(),
        log::Level::Warn  => tag.yellow(),
        log::Level::Error => tag.red().bold()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_session_file_has_no_terminal() {
        assert!(LogTarget::SessionFile.terminal().is_none());
        assert!(LogTarget::Stderr.terminal().is_some());
        assert!(LogTarget::Stdout.terminal().is_some());
        assert_eq!(LogTarget::default(), LogTarget::SessionFile);
    }

    #[test]
    fn test_line_prefix() {
        assert_eq!(
            line_prefix(log::Level::Info, "rov_lib::shell", 1.5, false),
            "[  1.500000 INF]"
        );
        assert_eq!(
            line_prefix(log::Level::Debug, "rov_lib::shell", 0.25, false),
            "[  0.250000 DBG] rov_lib::shell:"
        );
        assert!(line_prefix(log::Level::Error, "x", 0.0, true).contains("ERR"));
    }

    #[test]
    fn test_level_tags() {
        assert_eq!(level_tag(log::Level::Trace), "TRC");
        assert_eq!(level_tag(log::Level::Warn), "WRN");
        assert!(level_to_str(log::Level::Warn).to_string().contains("WRN"));
    }
}
