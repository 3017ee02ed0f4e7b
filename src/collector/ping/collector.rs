//! ICMP ping sweep collector.
//!
//! Runs one `ping` sweep against a host and turns its summary into a
//! [`MetricRecord`].

use std::time::Duration;

use thiserror::Error;

use super::command::SystemPing;
use super::report::{self, ProbeFailure};
use crate::collector::{CollectorError, ProbeRunner, ProbeTarget};
use crate::metrics::{MetricLine, MetricRecord, render};

/// Default target host.
pub const DEFAULT_HOST: &str = "localhost";

/// Default number of echo requests per sweep.
pub const DEFAULT_COUNT: u32 = 5;

/// Default per-reply timeout (5 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Why a sweep produced no metrics.
#[derive(Debug, Error)]
pub enum PingError {
    /// The probe could not be run.
    #[error(transparent)]
    Collector(#[from] CollectorError),

    /// The probe ran but failed or printed an unusable report.
    #[error(transparent)]
    Probe(#[from] ProbeFailure),
}

/// Configuration for a ping sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PingConfig {
    /// Metric path prefix, e.g. `web01.ping`.
    pub scheme: String,
    /// Target host (hostname or IP address).
    pub host: String,
    /// Echo requests to send.
    pub count: u32,
    /// Per-reply timeout.
    pub timeout: Duration,
}

impl PingConfig {
    /// Create a new ping configuration with default count and timeout.
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            count: DEFAULT_COUNT,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the number of echo requests.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Set the per-reply timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    /// Returns `CollectorError::Config` describing the first invalid field.
    pub fn validate(&self) -> Result<(), CollectorError> {
        if self.scheme.is_empty() {
            return Err(CollectorError::Config("scheme cannot be empty".to_string()));
        }
        if self.scheme.chars().any(char::is_whitespace) {
            return Err(CollectorError::Config(format!(
                "scheme '{}' cannot contain whitespace",
                self.scheme
            )));
        }
        if self.host.is_empty() {
            return Err(CollectorError::Config("host cannot be empty".to_string()));
        }
        // The host is passed as a bare argument, keep it from reading as a flag.
        if self.host.starts_with('-') || self.host.chars().any(char::is_whitespace) {
            return Err(CollectorError::Config(format!(
                "invalid host: '{}'",
                self.host
            )));
        }
        if self.count == 0 {
            return Err(CollectorError::Config(
                "count must be positive".to_string(),
            ));
        }
        if self.timeout.is_zero() {
            return Err(CollectorError::Config(
                "timeout must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Probe target described by this configuration.
    pub fn target(&self) -> ProbeTarget {
        ProbeTarget {
            host: self.host.clone(),
            count: self.count,
            timeout: self.timeout,
        }
    }
}

/// Ping sweep collector.
///
/// Runs the probe through its [`ProbeRunner`] and parses the report.
pub struct PingCollector<R = SystemPing> {
    config: PingConfig,
    runner: R,
}

impl PingCollector<SystemPing> {
    /// Create a collector that shells out to the system `ping`.
    pub fn system(config: PingConfig) -> Self {
        Self::new(config, SystemPing::default())
    }
}

impl<R: ProbeRunner> PingCollector<R> {
    /// Create a new ping collector with the given configuration and runner.
    pub fn new(config: PingConfig, runner: R) -> Self {
        Self { config, runner }
    }

    /// Get the collector's configuration.
    pub fn config(&self) -> &PingConfig {
        &self.config
    }

    /// Get the probe runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run one sweep and parse its summary.
    ///
    /// # Errors
    /// - `PingError::Collector` if the probe could not be run
    /// - `PingError::Probe` if it exited non-zero or its report is malformed
    pub async fn collect(&self) -> Result<MetricRecord, PingError> {
        let output = self.runner.run(&self.config.target()).await?;

        let record = report::parse_output(output).inspect_err(|e| {
            tracing::warn!(
                host = %self.config.host,
                error = %e,
                "Ping sweep failed"
            );
        })?;

        tracing::debug!(
            host = %self.config.host,
            packets_transmitted = record.overview().packets_transmitted,
            packet_loss = record.overview().packet_loss,
            avg_ms = record.statistics().avg.value(),
            "Ping sweep successful"
        );
        Ok(record)
    }

    /// Run one sweep and render it under the configured scheme.
    ///
    /// # Errors
    /// Same as [`PingCollector::collect`].
    pub async fn collect_lines(&self, timestamp: i64) -> Result<Vec<MetricLine>, PingError> {
        let record = self.collect().await?;
        Ok(render(&record, &self.config.scheme, timestamp))
    }
}

impl<R> std::fmt::Debug for PingCollector<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PingCollector")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
