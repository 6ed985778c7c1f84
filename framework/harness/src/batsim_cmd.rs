use std::path::PathBuf;

use crate::bin_path::batsim_path;
use crate::types::HarnessResult;

/// Builds the command string that launches the simulator for one run.
///
/// The rendered command follows the simulator's CLI: `-p` for the platform file, `-w` for the
/// workload file and `-e` for the export prefix under the output directory. The platform and
/// workload paths are passed through untouched, the simulator validates them itself.
#[derive(Debug, Clone)]
pub struct BatsimCmdBuilder {
    platform: PathBuf,
    workload: PathBuf,
    output_dir: PathBuf,
    extra_args: Vec<String>,
}

impl BatsimCmdBuilder {
    pub fn new(
        platform: impl Into<PathBuf>,
        workload: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            platform: platform.into(),
            workload: workload.into(),
            output_dir: output_dir.into(),
            extra_args: Vec::new(),
        }
    }

    /// Append a single extra argument for the simulator.
    pub fn with_extra_arg(mut self, arg: impl Into<String>) -> Self {
        self.extra_args.push(arg.into());
        self
    }

    /// Append whitespace-separated extra arguments for the simulator.
    ///
    /// An empty string is accepted and adds nothing, so a scenario can pass its extra-arguments
    /// option through unconditionally.
    pub fn with_extra_args(mut self, args: &str) -> Self {
        self.extra_args
            .extend(args.split_whitespace().map(|arg| arg.to_string()));
        self
    }

    /// Render the command string, resolving the simulator binary via [`batsim_path`].
    pub fn build(self) -> HarnessResult<String> {
        let batsim = batsim_path()?;
        let mut cmd = format!(
            "{batsim} -p {platform} -w {workload} -e {export_prefix}",
            batsim = batsim.display(),
            platform = self.platform.display(),
            workload = self.workload.display(),
            export_prefix = self.output_dir.join("out").display(),
        );
        for arg in &self.extra_args {
            cmd.push(' ');
            cmd.push_str(arg);
        }
        Ok(cmd)
    }
}
