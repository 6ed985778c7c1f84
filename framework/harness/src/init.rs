use crate::cli::ScenarioCli;
use clap::Parser;

/// Initialise the CLI and logging for a scenario binary.
pub fn init() -> ScenarioCli {
    env_logger::init();

    ScenarioCli::parse()
}
