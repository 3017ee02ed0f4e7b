//! Ping collector for probing network reachability via the system `ping`.
//!
//! - [`PingCollector`]: One sweep per call, parsed into a [`MetricRecord`](crate::metrics::MetricRecord)
//! - [`SystemPing`]: Runs `ping -W<timeout> -c<count> <host>`
//! - [`report`]: Parser for the two-line summary block

mod collector;
mod command;
pub mod report;

pub use collector::{
    DEFAULT_COUNT, DEFAULT_HOST, DEFAULT_TIMEOUT, PingCollector, PingConfig, PingError,
};
pub use command::{DEFAULT_PROGRAM, SystemPing};
pub use report::{ProbeFailure, parse};
