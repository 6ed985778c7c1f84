use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};

use crate::types::HarnessResult;

/// The description of one simulation run, as consumed by the robin orchestration tool.
///
/// The record is immutable once built: construct it with a [`RobinInstanceBuilder`], write it
/// with [`RobinInstance::to_file`] and hand the file path to [`crate::robin::run_robin`]. All
/// timeouts are in seconds and `0` disables the corresponding timeout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RobinInstance {
    /// Directory where robin and the two processes it supervises write their output.
    pub output_dir: PathBuf,
    /// Command line that launches the simulator.
    pub batcmd: String,
    /// Command line that launches the scheduler.
    pub schedcmd: String,
    pub simulation_timeout: u64,
    pub ready_timeout: u64,
    pub success_timeout: u64,
    pub failure_timeout: u64,
}

impl RobinInstance {
    /// Serialize the instance as YAML to the given path, overwriting any previous file.
    pub fn to_file(&self, path: &Path) -> HarnessResult<()> {
        log::trace!("Writing robin instance file to '{}'", path.display());
        let yaml = serde_yaml::to_string(self).context("Failed to serialize robin instance")?;
        fs::write(path, yaml).with_context(|| {
            format!(
                "Failed to write robin instance file '{}'",
                path.display()
            )
        })
    }

    /// Read an instance back from a YAML file written by [`RobinInstance::to_file`].
    pub fn from_file(path: &Path) -> HarnessResult<Self> {
        let yaml = fs::read_to_string(path).with_context(|| {
            format!("Failed to read robin instance file '{}'", path.display())
        })?;
        serde_yaml::from_str(&yaml).with_context(|| {
            format!(
                "Failed to parse robin instance file '{}'",
                path.display()
            )
        })
    }
}

/// Used to build a [`RobinInstance`]. The output directory and the two command lines are
/// required, the four timeouts default to `0` (disabled).
#[derive(Debug, Clone, Default)]
pub struct RobinInstanceBuilder {
    output_dir: Option<PathBuf>,
    batcmd: Option<String>,
    schedcmd: Option<String>,
    simulation_timeout: u64,
    ready_timeout: u64,
    success_timeout: u64,
    failure_timeout: u64,
}

impl RobinInstanceBuilder {
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    pub fn with_batcmd(mut self, batcmd: impl Into<String>) -> Self {
        self.batcmd = Some(batcmd.into());
        self
    }

    pub fn with_schedcmd(mut self, schedcmd: impl Into<String>) -> Self {
        self.schedcmd = Some(schedcmd.into());
        self
    }

    /// Abort the run if the whole simulation takes longer than this many seconds.
    pub fn with_simulation_timeout(mut self, seconds: u64) -> Self {
        self.simulation_timeout = seconds;
        self
    }

    /// Abort the run if the two processes are not ready within this many seconds.
    pub fn with_ready_timeout(mut self, seconds: u64) -> Self {
        self.ready_timeout = seconds;
        self
    }

    /// Grace period for the processes to terminate after a successful simulation.
    pub fn with_success_timeout(mut self, seconds: u64) -> Self {
        self.success_timeout = seconds;
        self
    }

    /// Grace period for the processes to terminate after a failed simulation.
    pub fn with_failure_timeout(mut self, seconds: u64) -> Self {
        self.failure_timeout = seconds;
        self
    }

    /// Build a [`RobinInstance`], returning an error if a required field is not set.
    pub fn build(self) -> HarnessResult<RobinInstance> {
        Ok(RobinInstance {
            output_dir: self
                .output_dir
                .ok_or(anyhow!("Output directory not set on the robin instance"))?,
            batcmd: self
                .batcmd
                .ok_or(anyhow!("Simulator command not set on the robin instance"))?,
            schedcmd: self
                .schedcmd
                .ok_or(anyhow!("Scheduler command not set on the robin instance"))?,
            simulation_timeout: self.simulation_timeout,
            ready_timeout: self.ready_timeout,
            success_timeout: self.success_timeout,
            failure_timeout: self.failure_timeout,
        })
    }
}
