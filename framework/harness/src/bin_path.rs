use std::env;
use std::path::PathBuf;

use anyhow::bail;
use anyhow::Context;

use crate::types::HarnessResult;

/// Environment variable to override the path to the batsim binary used to run simulations.
pub const BT_BATSIM_PATH_ENV: &str = "BT_BATSIM_PATH";

/// Environment variable to override the path to the batsched binary used to schedule jobs.
pub const BT_BATSCHED_PATH_ENV: &str = "BT_BATSCHED_PATH";

/// Environment variable to override the path to the robin binary used to orchestrate runs.
pub const BT_ROBIN_PATH_ENV: &str = "BT_ROBIN_PATH";

/// Get the path to the batsim binary.
///
/// If the [`BT_BATSIM_PATH_ENV`] environment variable is set, its value is used as the path to
/// the batsim binary. If it is not set, the binary is looked up in the user's `PATH`.
pub fn batsim_path() -> HarnessResult<PathBuf> {
    tool_path(BT_BATSIM_PATH_ENV, "batsim")
}

/// Get the path to the batsched binary.
///
/// If the [`BT_BATSCHED_PATH_ENV`] environment variable is set, its value is used as the path to
/// the batsched binary. If it is not set, the binary is looked up in the user's `PATH`.
pub fn batsched_path() -> HarnessResult<PathBuf> {
    tool_path(BT_BATSCHED_PATH_ENV, "batsched")
}

/// Get the path to the robin binary.
///
/// If the [`BT_ROBIN_PATH_ENV`] environment variable is set, its value is used as the path to
/// the robin binary. If it is not set, the binary is looked up in the user's `PATH`.
pub fn robin_path() -> HarnessResult<PathBuf> {
    tool_path(BT_ROBIN_PATH_ENV, "robin")
}

fn tool_path(env_var: &str, tool: &str) -> HarnessResult<PathBuf> {
    match env::var(env_var).ok().as_deref() {
        Some("") => {
            bail!("'{env_var}' set to empty string");
        }
        Some(path) if path != tool => {
            let path = PathBuf::from(path);
            if !path.exists() {
                bail!(
                    "Path to {tool} binary overwritten with '{env_var}={path}' but that path doesn't exist",
                    path = path.display()
                );
            }
            Ok(path)
        }
        set => {
            if set.is_some() {
                log::warn!("'{env_var}' is not a path so looking in user's 'PATH'");
            }
            which::which(tool).with_context(|| {
                format!(
                    "{tool} binary not found in PATH. Please install it or set '{env_var}' to the correct path."
                )
            })
        }
    }
}
