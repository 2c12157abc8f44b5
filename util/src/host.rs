//! Host platform utility functions

use std::path::PathBuf;

/// Environment variable giving the root of the software checkout.
pub const SW_ROOT_ENV_VAR: &str = "REACT_CTRL_SW_ROOT";

/// Get the software root directory.
///
/// If the root environment variable is not set the current working directory
/// is used instead, so that the executables can be run from a checkout
/// without any setup.
pub fn get_sw_root() -> PathBuf {
    match std::env::var(SW_ROOT_ENV_VAR) {
        Ok(p) => PathBuf::from(p),
        Err(_) => PathBuf::from("."),
    }
}
