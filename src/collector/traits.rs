//! Core collector traits and types.

use std::time::Duration;

use thiserror::Error;

/// Exit status reported for a probe process that was terminated by a signal.
pub const SIGNALED_EXIT_STATUS: i32 = -1;

/// Errors that prevent a probe from producing any report at all.
#[derive(Debug, Error)]
pub enum CollectorError {
    /// The probe process could not be spawned or awaited.
    #[error("failed to run probe: {0}")]
    Spawn(#[from] std::io::Error),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),
}

/// What to probe and how hard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    /// Hostname or IP address.
    pub host: String,
    /// Number of echo requests to send.
    pub count: u32,
    /// Per-reply wait time.
    pub timeout: Duration,
}

/// Captured result of one probe invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutput {
    /// Combined stderr and stdout text, stdout last.
    pub text: String,
    /// Process exit status.
    pub exit_status: i32,
}

impl ProbeOutput {
    /// Create a new probe output.
    pub fn new(text: impl Into<String>, exit_status: i32) -> Self {
        Self {
            text: text.into(),
            exit_status,
        }
    }

    /// Whether the probe exited cleanly.
    pub fn success(&self) -> bool {
        self.exit_status == 0
    }
}

/// Runs the external round-trip probe.
///
/// A non-zero exit status is a valid outcome and is returned as
/// [`ProbeOutput`]; `Err` is reserved for failing to run the probe at all.
#[async_trait::async_trait]
pub trait ProbeRunner: Send + Sync {
    /// Probe `target` once and capture its report.
    async fn run(&self, target: &ProbeTarget) -> Result<ProbeOutput, CollectorError>;
}
