//! `ping` subprocess runner.
//!
//! Invokes the system `ping` as `ping -W<timeout> -c<count> <host>` and
//! captures everything it prints.

use std::time::Duration;

use tokio::process::Command;

use crate::collector::{
    CollectorError, ProbeOutput, ProbeRunner, ProbeTarget, SIGNALED_EXIT_STATUS,
};

/// Default probe executable, resolved through `PATH`.
pub const DEFAULT_PROGRAM: &str = "ping";

/// Round a timeout up to whole seconds, never below one.
fn timeout_secs(timeout: Duration) -> u64 {
    let secs = timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0);
    secs.max(1)
}

/// Command-line arguments for probing `target`.
fn arguments(target: &ProbeTarget) -> [String; 3] {
    [
        format!("-W{}", timeout_secs(target.timeout)),
        format!("-c{}", target.count),
        target.host.clone(),
    ]
}

/// [`ProbeRunner`] backed by the system `ping` executable.
#[derive(Debug, Clone)]
pub struct SystemPing {
    program: String,
}

impl Default for SystemPing {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl SystemPing {
    /// Use `program` instead of `ping`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Executable this runner invokes.
    pub fn program(&self) -> &str {
        &self.program
    }
}

#[async_trait::async_trait]
impl ProbeRunner for SystemPing {
    async fn run(&self, target: &ProbeTarget) -> Result<ProbeOutput, CollectorError> {
        let args = arguments(target);
        tracing::debug!(
            program = %self.program,
            args = ?args,
            "Running probe"
        );

        let output = Command::new(&self.program)
            .args(&args)
            .kill_on_drop(true)
            .output()
            .await
            .inspect_err(|e| {
                tracing::warn!(
                    program = %self.program,
                    host = %target.host,
                    error = %e,
                    "Failed to run probe"
                );
            })?;

        let exit_status = output.status.code().unwrap_or(SIGNALED_EXIT_STATUS);

        // Diagnostics first so the summary block stays at the tail.
        let mut text = String::from_utf8_lossy(&output.stderr).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stdout));

        tracing::debug!(
            host = %target.host,
            exit_status,
            bytes = text.len(),
            "Probe finished"
        );

        Ok(ProbeOutput::new(text, exit_status))
    }
}
