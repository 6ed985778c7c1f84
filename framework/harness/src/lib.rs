mod batsim_cmd;
mod bin_path;
mod cli;
mod init;
mod instance;
mod robin;
mod types;
mod workspace;

pub mod prelude {
    pub use crate::batsim_cmd::BatsimCmdBuilder;
    pub use crate::bin_path::{
        batsched_path, batsim_path, robin_path, BT_BATSCHED_PATH_ENV, BT_BATSIM_PATH_ENV,
        BT_ROBIN_PATH_ENV,
    };
    pub use crate::cli::ScenarioCli;
    pub use crate::init::init;
    pub use crate::instance::{RobinInstance, RobinInstanceBuilder};
    pub use crate::robin::{run_robin, RobinRun, RobinStatusError};
    pub use crate::types::HarnessResult;
    pub use crate::workspace::{init_instance, init_instance_in, InstancePaths};
}
