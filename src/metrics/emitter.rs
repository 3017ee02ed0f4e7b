//! Graphite plaintext rendering of a [`MetricRecord`].
//!
//! Each metric becomes one line of the form
//! `<scheme>.<metric> <value> <timestamp>`.

use std::fmt;
use std::io::{self, Write};

use super::types::{MetricName, MetricRecord, MetricValue};

/// A single rendered metric sample.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricLine {
    /// Dotted metric path, `<scheme>.<metric>`.
    pub path: String,
    /// Sample value.
    pub value: MetricValue,
    /// Capture time in seconds since the Unix epoch.
    pub timestamp: i64,
}

impl MetricLine {
    /// Build a line for `name` under `scheme`.
    pub fn new(scheme: &str, name: MetricName, value: MetricValue, timestamp: i64) -> Self {
        Self {
            path: format!("{scheme}.{name}"),
            value,
            timestamp,
        }
    }
}

impl fmt::Display for MetricLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.path, self.value, self.timestamp)
    }
}

/// Render every metric of `record` in record order.
pub fn render(record: &MetricRecord, scheme: &str, timestamp: i64) -> Vec<MetricLine> {
    record
        .iter()
        .map(|(name, value)| MetricLine::new(scheme, name, value, timestamp))
        .collect()
}

/// Write the rendered lines of `record` to `writer`, one per line.
///
/// # Errors
/// Returns the first I/O error raised by `writer`.
pub fn emit<W: Write>(
    writer: &mut W,
    record: &MetricRecord,
    scheme: &str,
    timestamp: i64,
) -> io::Result<()> {
    for line in render(record, scheme, timestamp) {
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}
