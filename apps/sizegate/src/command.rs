//! # Command Reporter
//!
//! [`SizeReporter`] backed by a real subprocess: `<size_tool> <artifact>`.
//!
//! Stdout is captured in full before parsing. Without a timeout the call
//! blocks until the tool exits. With one, the child is polled and killed
//! once the deadline passes.

use sizegate_core::{GateConfig, GateError, SizeReporter};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Runs an external size tool against the artifact.
#[derive(Debug, Clone)]
pub struct CommandReporter {
    tool: PathBuf,
    timeout: Option<Duration>,
}

impl CommandReporter {
    /// Create a reporter for `tool` with no timeout.
    pub fn new(tool: impl Into<PathBuf>) -> Self {
        Self {
            tool: tool.into(),
            timeout: None,
        }
    }

    /// Reporter for the config's size tool and timeout.
    pub fn from_config(config: &GateConfig) -> Self {
        Self::new(&config.size_tool).with_timeout(config.timeout)
    }

    /// Kill the tool if it runs longer than `timeout`.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    fn tool_name(&self) -> String {
        self.tool.display().to_string()
    }

    fn invocation_error(&self, reason: impl Into<String>) -> GateError {
        GateError::tool_invocation(self.tool_name(), reason)
    }

    fn spawn(&self, artifact: &Path) -> Result<Child, GateError> {
        Command::new(&self.tool)
            .arg(artifact)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.invocation_error(e.to_string()))
    }

    fn wait_with_deadline(&self, mut child: Child, timeout: Duration) -> Result<Output, GateError> {
        // Pipes must be drained while polling or a full pipe stalls the tool.
        let stdout = child.stdout.take().map(spawn_reader);
        let stderr = child.stderr.take().map(spawn_reader);

        let deadline = Instant::now().checked_add(timeout);
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) if deadline.is_some_and(|d| Instant::now() >= d) => {
                    tracing::warn!(tool = %self.tool_name(), ?timeout, "Size tool timed out");
                    self.terminate(&mut child);
                    return Err(self.invocation_error(format!("timed out after {:?}", timeout)));
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(e) => {
                    self.terminate(&mut child);
                    return Err(self.invocation_error(e.to_string()));
                }
            }
        };

        Ok(Output {
            status,
            stdout: join_reader(stdout),
            stderr: join_reader(stderr),
        })
    }

    /// Kill and reap `child`. Failures are logged, not returned.
    fn terminate(&self, child: &mut Child) {
        if let Err(e) = child.kill() {
            tracing::warn!(tool = %self.tool_name(), error = %e, "Failed to kill size tool");
        }
        if let Err(e) = child.wait() {
            tracing::warn!(tool = %self.tool_name(), error = %e, "Failed to reap size tool");
        }
    }

    fn check_status(&self, status: ExitStatus, stderr: &[u8]) -> Result<(), GateError> {
        if status.success() {
            return Ok(());
        }

        let mut reason = match status.code() {
            Some(code) => format!("exited with status {}", code),
            None => "terminated by signal".to_string(),
        };
        let stderr = String::from_utf8_lossy(stderr);
        let stderr = stderr.trim();
        if !stderr.is_empty() {
            reason.push_str(": ");
            reason.push_str(stderr);
        }
        Err(self.invocation_error(reason))
    }
}

impl SizeReporter for CommandReporter {
    fn measure(&self, artifact: &Path) -> Result<String, GateError> {
        tracing::debug!(
            tool = %self.tool_name(),
            artifact = %artifact.display(),
            "Running size tool"
        );

        let child = self.spawn(artifact)?;
        let output = match self.timeout {
            Some(timeout) => self.wait_with_deadline(child, timeout)?,
            None => child
                .wait_with_output()
                .map_err(|e| self.invocation_error(e.to_string()))?,
        };

        self.check_status(output.status, &output.stderr)?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        tracing::trace!(output = %stdout, "Size tool output");
        Ok(stdout)
    }
}

fn spawn_reader<R: Read + Send + 'static>(mut pipe: R) -> thread::JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        buf
    })
}

fn join_reader(handle: Option<thread::JoinHandle<Vec<u8>>>) -> Vec<u8> {
    handle.and_then(|h| h.join().ok()).unwrap_or_default()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sizegate_core::GateErrorKind;

    #[test]
    fn missing_tool_is_invocation_error() {
        let reporter = CommandReporter::new("/nonexistent/sizegate-test-tool");
        let err = reporter.measure(Path::new("fw.elf"));
        assert_eq!(
            err.map_err(|e| e.kind()),
            Err(GateErrorKind::ToolInvocation)
        );
    }

    #[test]
    fn missing_tool_with_timeout_is_invocation_error() {
        let reporter = CommandReporter::new("/nonexistent/sizegate-test-tool")
            .with_timeout(Some(Duration::from_secs(1)));
        assert!(reporter.measure(Path::new("fw.elf")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn sub_second_timeout_is_reported_exactly() {
        let reporter =
            CommandReporter::new("sleep").with_timeout(Some(Duration::from_millis(200)));
        let err = reporter.measure(Path::new("5"));
        assert_eq!(
            err,
            Err(GateError::tool_invocation("sleep", "timed out after 200ms"))
        );
    }
}
