//! Host platform utility functions

use std::env;
use std::path::PathBuf;

/// Name of the environment variable holding the software root directory.
pub const SW_ROOT_ENV_VAR: &str = "MARS_ROVER_SW_ROOT";

/// Get the software root directory, which contains the `params` and
/// `sessions` directories.
pub fn get_sw_root() -> Result<PathBuf, env::VarError> {
    env::var(SW_ROOT_ENV_VAR).map(PathBuf::from)
}
