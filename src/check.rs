//! Check status reporting.
//!
//! Failed sweeps are reported the way Sensu check plugins report them: one
//! status line on stdout and an exit code derived from the status.
//!
//! | Status   | Exit code |
//! |----------|-----------|
//! | OK       | 0         |
//! | WARNING  | 1         |
//! | CRITICAL | 2         |
//! | UNKNOWN  | 3         |

use std::fmt;

use strum_macros::{AsRefStr, Display, EnumString};

use crate::collector::ping::PingError;
use crate::config::ConfigError;

/// Name printed in front of every status line.
pub const CHECK_NAME: &str = "PingMetrics";

/// Sensu check status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum CheckStatus {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl CheckStatus {
    /// Process exit code for this status.
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Ok => 0,
            Self::Warning => 1,
            Self::Critical => 2,
            Self::Unknown => 3,
        }
    }
}

/// Final status of a run that did not emit metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub status: CheckStatus,
    pub message: String,
}

impl CheckOutcome {
    pub fn new(status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn critical(message: impl Into<String>) -> Self {
        Self::new(CheckStatus::Critical, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(CheckStatus::Unknown, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.status.exit_code()
    }
}

impl From<&PingError> for CheckOutcome {
    /// A probe that ran and failed is critical; one that never ran is unknown.
    fn from(err: &PingError) -> Self {
        match err {
            PingError::Probe(failure) => Self::critical(failure.to_string()),
            PingError::Collector(e) => Self::unknown(e.to_string()),
        }
    }
}

impl From<&ConfigError> for CheckOutcome {
    fn from(err: &ConfigError) -> Self {
        Self::unknown(err.to_string())
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{CHECK_NAME} {}: {}", self.status, self.message)
    }
}
