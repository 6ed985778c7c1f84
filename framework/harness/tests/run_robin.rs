//! Drives [`batsim_harness::prelude::run_robin`] against fake robin scripts so the whole
//! prepare/build/persist/run/assert sequence can be exercised without real installations.

#![cfg(unix)]

use std::env;
use std::os::unix::fs::PermissionsExt as _;
use std::path::{Path, PathBuf};

use serial_test::serial;
use tempfile::TempDir;

use batsim_harness::prelude::*;

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).expect("failed to write script");
    let mut perms = std::fs::metadata(&path)
        .expect("failed to read script metadata")
        .permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("failed to mark script executable");
    path
}

#[test]
#[serial]
fn test_should_report_exit_zero_and_captured_output() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let robin = write_script(
        temp.path(),
        "robin",
        "#!/bin/sh\necho simulation succeeded\nexit 0\n",
    );
    env::set_var(BT_ROBIN_PATH_ENV, &robin);

    let run = run_robin(&temp.path().join("instance.yaml")).expect("failed to run robin");

    assert_eq!(run.exit_code, 0);
    assert!(run.stdout.contains("simulation succeeded"));
    run.ensure_success().expect("expected a successful run");
}

#[test]
#[serial]
fn test_should_fail_with_the_literal_return_code() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let robin = write_script(
        temp.path(),
        "robin",
        "#!/bin/sh\necho simulation blew up >&2\nexit 3\n",
    );
    env::set_var(BT_ROBIN_PATH_ENV, &robin);

    let run = run_robin(&temp.path().join("instance.yaml")).expect("failed to run robin");

    assert_eq!(run.exit_code, 3);
    assert!(run.stderr.contains("simulation blew up"));

    let err = run.ensure_success().expect_err("expected a status error");
    assert_eq!(err.to_string(), "Bad robin return code (3)");
}

/// End-to-end sequence: prepare the workspace, build the simulator command, persist the robin
/// instance and run a robin that checks the instance file it was handed. Run twice with the same
/// test name to cover re-runs overwriting the previous artifacts.
#[test]
#[serial]
fn test_full_sequence_against_a_fake_robin() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let batsim = write_script(temp.path(), "batsim", "#!/bin/sh\nexit 0\n");
    let robin = write_script(
        temp.path(),
        "robin",
        concat!(
            "#!/bin/sh\n",
            "test -f \"$1\" || exit 2\n",
            "grep -q \"batsched -v 'filler'\" \"$1\" || exit 3\n",
            "grep -q 'simulation-timeout: 30' \"$1\" || exit 4\n",
            "exit 0\n",
        ),
    );
    env::set_var(BT_BATSIM_PATH_ENV, &batsim);
    env::set_var(BT_ROBIN_PATH_ENV, &robin);

    for _ in 0..2 {
        let paths = init_instance_in(temp.path(), "group-simultaneous-events")
            .expect("failed to init instance");

        let batcmd = BatsimCmdBuilder::new("pf.xml", "wl.json", &paths.output_dir)
            .with_extra_args("")
            .build()
            .expect("failed to build batsim command");

        let instance = RobinInstanceBuilder::default()
            .with_output_dir(&paths.output_dir)
            .with_batcmd(batcmd)
            .with_schedcmd("batsched -v 'filler'")
            .with_simulation_timeout(30)
            .with_ready_timeout(5)
            .with_success_timeout(10)
            .with_failure_timeout(0)
            .build()
            .expect("failed to build robin instance");

        instance
            .to_file(&paths.robin_file)
            .expect("failed to write instance file");

        let run = run_robin(&paths.robin_file).expect("failed to run robin");
        run.ensure_success().expect("expected a successful run");
    }
}
