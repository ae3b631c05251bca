//! Rover shell executable entry point.
//!
//! # Architecture
//!
//! The general execution methodology consists of:
//!
//!     - Start the session and load the executable parameters
//!     - Initialise logging
//!     - Select the line source, a script if one is given on the command line
//!       or an interactive prompt otherwise
//!     - Run the shell:
//!         - Define the grid
//!         - For each rover: build it, run its program, report its final
//!           position and orientation

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use color_eyre::{eyre::WrapErr, Report};
use log::{debug, info, warn};
use std::io;
use std::path::PathBuf;
use structopt::StructOpt;

// Internal
use rov_lib::{
    params::RovExecParams,
    shell::{Interactive, Script, Shell}
};
use util::{
    host,
    logger::logger_init,
    session::Session
};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Drive rovers over a bounded grid.
#[derive(Debug, StructOpt)]
#[structopt(name = "rov_exec")]
struct Opt {
    /// Parameter file, relative to the `params` directory of the software
    /// root
    #[structopt(long, default_value = "rov_exec.toml")]
    params: String,

    /// Script to replay instead of prompting for input
    #[structopt(parse(from_os_str))]
    script: Option<PathBuf>
}

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {

    color_eyre::install()?;

    let opt = Opt::from_args();

    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session = Session::new(
        "rov_exec",
        "sessions"
    ).wrap_err("Failed to create the session")?;

    // ---- LOAD PARAMETERS ----

    let params: RovExecParams = util::params::load(
        &opt.params
    ).wrap_err("Could not load rov_exec params")?;

    // Initialise logger
    logger_init(params.log_level, params.log_target, &session)
        .wrap_err("Failed to initialise logging")?;

    // Log information on this execution.
    info!("Mars Rover Executable\n");
    info!("Session directory: {:?}\n", session.session_root);
    debug!("CLI arguments: {:?}", opt);

    // ---- RUN SHELL ----

    let shell = Shell::new(&params);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = match &opt.script {
        Some(path) => {
            info!("Loading script from {:?}", path);

            let mut script = Script::load(path)
                .wrap_err("Failed to load script")?;

            info!("Loaded script contains {} lines\n", script.num_lines());

            shell.run(&mut script, &mut out)
                .wrap_err("Script execution failed")?
        },
        None => {
            info!("No script provided, reading rovers from the prompt\n");

            let history_path = host::get_sw_root()
                .wrap_err("Failed to find the software root")?
                .join(&params.history_file_name);

            let mut interactive = Interactive::new(Some(history_path))
                .wrap_err("Failed to start the line editor")?;

            let summary = shell.run(&mut interactive, &mut out);

            if let Err(e) = interactive.save_history() {
                warn!("Could not save the prompt history: {}", e);
            }

            summary.wrap_err("Shell execution failed")?
        }
    };

    info!(
        "Exiting, {} rovers reported and {} skipped",
        summary.reports.len(),
        summary.num_invalid
    );

    Ok(())
}
