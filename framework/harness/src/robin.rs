//! Invokes the robin orchestration tool against a serialized instance file.

use std::path::Path;
use std::process::Stdio;

use anyhow::{anyhow, Context};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;

use crate::bin_path::robin_path;
use crate::types::HarnessResult;

/// The outcome of one robin invocation: the exit status of the orchestration process and the
/// output it produced while supervising the simulator and scheduler.
#[derive(Debug)]
pub struct RobinRun {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl RobinRun {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Turn a nonzero exit status into an error carrying the literal status value.
    pub fn ensure_success(&self) -> HarnessResult<()> {
        if self.success() {
            Ok(())
        } else {
            Err(RobinStatusError {
                code: self.exit_code,
            }
            .into())
        }
    }
}

/// Error raised when robin reports a failed run through its exit status.
#[derive(derive_more::Error, derive_more::Display, Debug)]
#[display("Bad robin return code ({code})")]
pub struct RobinStatusError {
    pub code: i32,
}

/// Run robin against the instance file, blocking the calling thread until the run finishes.
///
/// Robin supervises the simulator and scheduler processes itself, including the four timeouts
/// from the instance file; this call only waits for robin and reports its exit status. The
/// instance file must have been written before this is called, see
/// [`crate::instance::RobinInstance::to_file`].
pub fn run_robin(instance_file: &Path) -> HarnessResult<RobinRun> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to create Tokio runtime")?;
    runtime.block_on(run_robin_async(instance_file))
}

/// Async version of [`run_robin`] for callers that already own a runtime.
pub async fn run_robin_async(instance_file: &Path) -> HarnessResult<RobinRun> {
    let robin = robin_path()?;

    log::info!("Running robin on '{}'", instance_file.display());
    let mut robin_handle = Command::new(robin)
        .arg(instance_file)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .context("Failed to run robin")?;

    let stdout = robin_handle
        .stdout
        .take()
        .context("Failed to get stdout for the running robin")?;
    let stderr = robin_handle
        .stderr
        .take()
        .context("Failed to get stderr for the running robin")?;

    let stdout_reader = tokio::spawn(capture_lines(stdout, log::Level::Info, "robin::stdout"));
    let stderr_reader = tokio::spawn(capture_lines(stderr, log::Level::Warn, "robin::stderr"));

    let status = robin_handle
        .wait()
        .await
        .context("Failed to wait for robin to finish")?;
    let stdout = stdout_reader
        .await
        .context("Robin stdout reader panicked")?
        .context("Failed to read robin stdout")?;
    let stderr = stderr_reader
        .await
        .context("Robin stderr reader panicked")?
        .context("Failed to read robin stderr")?;

    let exit_code = status
        .code()
        .ok_or(anyhow!("Robin was terminated by a signal"))?;
    log::info!("Robin finished with exit code {exit_code}");

    Ok(RobinRun {
        exit_code,
        stdout,
        stderr,
    })
}

/// Stream lines from a child pipe into the log while capturing them for the caller.
async fn capture_lines<R>(
    reader: R,
    level: log::Level,
    log_target: &'static str,
) -> std::io::Result<String>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let mut lines = BufReader::new(reader).lines();
    let mut captured = String::new();
    while let Some(line) = lines.next_line().await? {
        log::log!(target: log_target, level, "{line}");
        captured.push_str(&line);
        captured.push('\n');
    }
    Ok(captured)
}
