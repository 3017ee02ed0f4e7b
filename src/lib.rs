//! ping-metrics - Ping Sweep Metrics
//!
//! Pings a host once, parses the summary `ping` prints at the end of its
//! report, and renders the result as Graphite plaintext lines:
//!
//! ```text
//! myhost.ping.packets_transmitted 5 1437137076
//! myhost.ping.packets_received 5 1437137076
//! myhost.ping.packet_loss 0 1437137076
//! myhost.ping.time 3996 1437137076
//! myhost.ping.min 0.016 1437137076
//! myhost.ping.max 0.017 1437137076
//! myhost.ping.avg 0.019 1437137076
//! myhost.ping.mdev 0.004 1437137076
//! ```
//!
//! # Architecture
//!
//! - **Collector**: Runs the probe and parses its report ([`collector`])
//! - **Metrics**: Typed metric record and line rendering ([`metrics`])
//! - **Config**: YAML, environment and flag layering ([`config`])
//! - **Check**: Sensu-style status and exit codes for failed runs ([`check`])
//!
//! # Example
//!
//! ```
//! use ping_metrics::collector::ping::parse;
//! use ping_metrics::metrics::render;
//!
//! let report = "\
//! 5 packets transmitted, 5 received, 0% packet loss, time 3996ms
//! rtt min/avg/max/mdev = 0.016/0.019/0.017/0.004 ms
//! ";
//! let record = parse(report, 0).unwrap();
//! let lines = render(&record, "myhost.ping", 1437137076);
//! assert_eq!(lines[4].to_string(), "myhost.ping.min 0.016 1437137076");
//! ```

pub mod check;
pub mod collector;
pub mod config;
pub mod metrics;

pub use check::{CheckOutcome, CheckStatus};
pub use collector::ping::{PingCollector, PingConfig, PingError, ProbeFailure, SystemPing};
pub use collector::{CollectorError, ProbeOutput, ProbeRunner, ProbeTarget};
pub use config::{AppConfig, ConfigError};
pub use metrics::{MetricLine, MetricName, MetricRecord, MetricValue};
