//! Runs a simulation of a workload whose events arrive simultaneously and checks that the
//! whole run completes successfully.

use batsim_harness::prelude::*;

const DEFAULT_PLATFORM: &str = "platforms/energy_platform_homogeneous_no_net_1.xml";
const DEFAULT_WORKLOAD: &str = "workloads/test_group_simultaneous_events.json";

fn main() -> HarnessResult<()> {
    let cli = init();

    let platform = cli
        .platform
        .unwrap_or_else(|| DEFAULT_PLATFORM.into());
    let workload = cli
        .workload
        .unwrap_or_else(|| DEFAULT_WORKLOAD.into());
    let test_name = cli
        .test_name
        .unwrap_or_else(|| "group-simultaneous-events".to_string());

    let paths = init_instance(&test_name)?;

    let batcmd = BatsimCmdBuilder::new(platform, workload, &paths.output_dir)
        .with_extra_args(&cli.batsim_extra_args)
        .build()?;

    let instance = RobinInstanceBuilder::default()
        .with_output_dir(&paths.output_dir)
        .with_batcmd(batcmd)
        .with_schedcmd("batsched -v 'filler'")
        .with_simulation_timeout(30)
        .with_ready_timeout(5)
        .with_success_timeout(10)
        .with_failure_timeout(0)
        .build()?;

    instance.to_file(&paths.robin_file)?;

    let run = run_robin(&paths.robin_file)?;
    run.ensure_success()?;

    log::info!("Scenario {test_name} passed");
    Ok(())
}
