use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(about, long_about = None)]
pub struct ScenarioCli {
    /// Override the platform file passed to the simulator.
    #[clap(short, long)]
    pub platform: Option<PathBuf>,

    /// Override the workload file passed to the simulator.
    #[clap(short, long)]
    pub workload: Option<PathBuf>,

    /// Override the name of the directory the run writes its output under.
    #[clap(long)]
    pub test_name: Option<String>,

    /// Extra arguments appended to the simulator command, as a single whitespace-separated
    /// string. For example `--batsim-extra-args='--forward-profiles-on-submission'`.
    #[clap(long, default_value = "")]
    pub batsim_extra_args: String,
}
