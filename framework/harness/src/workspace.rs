use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::types::HarnessResult;

/// Filesystem locations owned by a single test instance.
///
/// The output directory holds everything a run produces. The robin file is where the serialized
/// [`crate::instance::RobinInstance`] is written, and the scheduler config file path is reserved
/// for scenarios that pass a configuration file to the scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstancePaths {
    pub output_dir: PathBuf,
    pub robin_file: PathBuf,
    pub sched_config_file: PathBuf,
}

/// Prepare the output workspace for the named test under `test-out/` in the current directory.
///
/// Safe to call again with the same test name, a later run reuses the directory and overwrites
/// the artifacts of the previous one.
pub fn init_instance(test_name: &str) -> HarnessResult<InstancePaths> {
    let cwd = env::current_dir().context("Failed to read the current directory")?;
    init_instance_in(&cwd, test_name)
}

/// Same as [`init_instance`] but rooted at an explicit base directory.
pub fn init_instance_in(base: &Path, test_name: &str) -> HarnessResult<InstancePaths> {
    let output_dir = base.join("test-out").join(test_name);
    fs::create_dir_all(&output_dir).with_context(|| {
        format!(
            "Failed to create output directory '{}'",
            output_dir.display()
        )
    })?;
    let output_dir = output_dir.canonicalize().with_context(|| {
        format!(
            "Failed to canonicalize output directory '{}'",
            output_dir.display()
        )
    })?;

    Ok(InstancePaths {
        robin_file: output_dir.join("instance.yaml"),
        sched_config_file: output_dir.join("schedconf.json"),
        output_dir,
    })
}
