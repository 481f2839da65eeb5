//! External checker invocation and report parsing.
//!
//! Spawns the static checker as a child process against one target file and
//! parses its stdout as a diagnostics report. The checker's exit code
//! carries no signal: it exits non-zero whenever it has findings at all,
//! advisory-only runs included, so only the report content decides
//! anything. A run that produces no parseable report is an infrastructure
//! fault, which is a different thing entirely.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, warn};
use warden_core::diagnostics::DiagnosticsReport;
use warden_core::error::CheckError;

/// Default wall-clock budget for one checker run.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Handle on one external checker installation.
///
/// Both paths are explicit state, not process-wide configuration, so
/// several runtimes can be verified against in the same process without
/// cross-talk.
#[derive(Debug, Clone)]
pub struct CheckRunner {
    /// The checker executable.
    binary: PathBuf,

    /// Interpreter/runtime whose standard library and installed packages
    /// define the symbol universe being checked against.
    runtime: PathBuf,

    timeout: Duration,
}

impl CheckRunner {
    pub fn new(binary: impl Into<PathBuf>, runtime: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            runtime: runtime.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the wall-clock budget for one run.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    pub fn runtime(&self) -> &Path {
        &self.runtime
    }

    /// Run the checker against one target file and parse its report.
    ///
    /// The configuration file (see
    /// [`CheckerSettings::write_config`](crate::settings::CheckerSettings::write_config))
    /// must already exist in `working_dir`. On timeout the child is killed;
    /// the working directory is the caller's to clean up.
    pub async fn run(
        &self,
        working_dir: &Path,
        target: &Path,
    ) -> std::result::Result<DiagnosticsReport, CheckError> {
        if !self.runtime.exists() {
            return Err(CheckError::ToolUnavailable(format!(
                "runtime not found at {}",
                self.runtime.display()
            )));
        }

        debug!(
            binary = %self.binary.display(),
            target = %target.display(),
            "Running static checker"
        );

        let child = Command::new(&self.binary)
            .arg("--outputjson")
            .arg("--pythonpath")
            .arg(&self.runtime)
            .arg(target)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    CheckError::ToolUnavailable(format!(
                        "checker not found at {}",
                        self.binary.display()
                    ))
                } else {
                    CheckError::Io(e)
                }
            })?;

        // Dropping the in-flight future on timeout drops the child handle,
        // and kill_on_drop reaps it — no orphaned checker processes.
        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result?,
            Err(_) => {
                warn!(
                    timeout_secs = self.timeout.as_secs(),
                    "Static checker timed out, child killed"
                );
                return Err(CheckError::Timeout {
                    timeout_secs: self.timeout.as_secs(),
                });
            }
        };

        if !output.status.success() {
            // Expected whenever findings exist; the report decides.
            debug!(
                exit_code = output.status.code().unwrap_or(-1),
                "Checker exited non-zero (findings present)"
            );
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let report = DiagnosticsReport::from_json(&stdout)?;
        debug!(
            diagnostics = report.general_diagnostics.len(),
            time_in_sec = report.summary.time_in_sec,
            "Parsed checker report"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_REPORT: &str = r#"{"version": "1.1.400", "time": "0", "generalDiagnostics": [], "summary": {"filesAnalyzed": 1, "errorCount": 0, "warningCount": 0, "informationCount": 0, "timeInSec": 0.1}}"#;

    #[cfg(unix)]
    fn fake_checker(dir: &Path, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join("fake-checker");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn nonzero_exit_with_valid_report_parses() {
        let dir = tempfile::tempdir().unwrap();
        let binary = fake_checker(
            dir.path(),
            &format!("cat <<'EOF'\n{EMPTY_REPORT}\nEOF\nexit 1"),
        );
        let runner = CheckRunner::new(&binary, dir.path());
        let report = runner
            .run(dir.path(), Path::new("guard_candidate.py"))
            .await
            .unwrap();
        assert!(report.general_diagnostics.is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn garbage_output_is_malformed_report() {
        let dir = tempfile::tempdir().unwrap();
        let binary = fake_checker(dir.path(), "echo 'Traceback (most recent call last)'");
        let runner = CheckRunner::new(&binary, dir.path());
        let err = runner
            .run(dir.path(), Path::new("guard_candidate.py"))
            .await
            .unwrap_err();
        assert!(matches!(err, CheckError::MalformedReport { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn hung_checker_times_out() {
        let dir = tempfile::tempdir().unwrap();
        let binary = fake_checker(dir.path(), "sleep 30");
        let runner =
            CheckRunner::new(&binary, dir.path()).with_timeout(Duration::from_millis(100));
        let err = runner
            .run(dir.path(), Path::new("guard_candidate.py"))
            .await
            .unwrap_err();
        assert!(matches!(err, CheckError::Timeout { .. }));
    }

    #[tokio::test]
    async fn missing_binary_is_tool_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let runner = CheckRunner::new(dir.path().join("no-such-checker"), dir.path());
        let err = runner
            .run(dir.path(), Path::new("guard_candidate.py"))
            .await
            .unwrap_err();
        assert!(matches!(err, CheckError::ToolUnavailable(_)));
    }

    #[tokio::test]
    async fn missing_runtime_is_tool_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let runner = CheckRunner::new("checker", dir.path().join("no-such-runtime"));
        let err = runner
            .run(dir.path(), Path::new("guard_candidate.py"))
            .await
            .unwrap_err();
        assert!(matches!(err, CheckError::ToolUnavailable(_)));
        assert!(err.to_string().contains("runtime"));
    }
}
