//! Parser for the summary block that ends every `ping` report.
//!
//! `ping` always finishes with two fixed lines, whatever precedes them:
//!
//! ```text
//! 5 packets transmitted, 5 received, 0% packet loss, time 3996ms
//! rtt min/avg/max/mdev = 0.016/0.019/0.017/0.004 ms
//! ```
//!
//! [`parse`] takes that position on trust but checks the shape of both lines,
//! so a shifted or truncated report fails loudly instead of parsing wrong.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::collector::ProbeOutput;
use crate::metrics::{Millis, MetricRecord, OverviewMetrics, StatisticMetrics};

/// Reasons a probe run yields no metrics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeFailure {
    /// `ping` exited with a non-zero status. Carries everything it printed.
    #[error("ping error: ({status}): {output}")]
    Execution { status: i32, output: String },

    /// The overview line did not look like `N packets transmitted, ...`.
    #[error("malformed overview line: '{line}'")]
    MalformedOverview { line: String },

    /// The statistics line did not look like `rtt min/avg/max/mdev = ...`.
    #[error("malformed statistics line: '{line}'")]
    MalformedStatistics { line: String },
}

fn overview_regex() -> &'static Regex {
    static OVERVIEW_REGEX: OnceLock<Regex> = OnceLock::new();
    OVERVIEW_REGEX.get_or_init(|| {
        Regex::new(r"^(\d+) packets transmitted, (\d+) received, (\d+)% packet loss, time (\d+)ms")
            .expect("failed to compile overview regex")
    })
}

fn statistics_regex() -> &'static Regex {
    static STATISTICS_REGEX: OnceLock<Regex> = OnceLock::new();
    STATISTICS_REGEX.get_or_init(|| {
        Regex::new(
            r"^rtt min/avg/max/mdev = (\d+\.\d+)/(\d+\.\d+)/(\d+\.\d+)/(\d+\.\d+) ms",
        )
        .expect("failed to compile statistics regex")
    })
}

/// The last two lines of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SummaryBlock<'a> {
    overview: &'a str,
    statistics: &'a str,
}

impl<'a> SummaryBlock<'a> {
    /// Missing lines come back empty and fail their pattern later.
    fn locate(text: &'a str) -> Self {
        let mut lines = text.trim_end_matches(['\r', '\n']).lines().rev();
        let statistics = lines.next().unwrap_or_default();
        let overview = lines.next().unwrap_or_default();
        Self {
            overview,
            statistics,
        }
    }
}

fn parse_overview(line: &str) -> Result<OverviewMetrics, ProbeFailure> {
    let malformed = || ProbeFailure::MalformedOverview {
        line: line.to_string(),
    };
    let caps = overview_regex().captures(line).ok_or_else(malformed)?;
    // \d+ can still overflow u64
    let field = |i: usize| caps[i].parse::<u64>().map_err(|_| malformed());

    Ok(OverviewMetrics {
        packets_transmitted: field(1)?,
        packets_received: field(2)?,
        packet_loss: field(3)?,
        time: field(4)?,
    })
}

fn parse_statistics(line: &str) -> Result<StatisticMetrics, ProbeFailure> {
    let malformed = || ProbeFailure::MalformedStatistics {
        line: line.to_string(),
    };
    let caps = statistics_regex().captures(line).ok_or_else(malformed)?;
    let field = |i: usize| caps[i].parse::<Millis>().map_err(|_| malformed());

    // ping prints min/avg/max/mdev; downstream expects min/max/avg/mdev.
    Ok(StatisticMetrics {
        min: field(1)?,
        max: field(3)?,
        avg: field(2)?,
        mdev: field(4)?,
    })
}

/// Parse the captured text and exit status of one `ping` run.
///
/// The exit status is checked before any text is looked at.
///
/// # Errors
/// - [`ProbeFailure::Execution`] if `exit_status` is non-zero
/// - [`ProbeFailure::MalformedOverview`] if the second-to-last line is not an overview
/// - [`ProbeFailure::MalformedStatistics`] if the last line is not an rtt summary
pub fn parse(raw_text: &str, exit_status: i32) -> Result<MetricRecord, ProbeFailure> {
    if exit_status != 0 {
        return Err(ProbeFailure::Execution {
            status: exit_status,
            output: raw_text.to_string(),
        });
    }

    let block = SummaryBlock::locate(raw_text);
    let overview = parse_overview(block.overview)?;
    let statistics = parse_statistics(block.statistics)?;

    Ok(MetricRecord::new(overview, statistics))
}

/// Parse a captured [`ProbeOutput`].
pub fn parse_output(output: ProbeOutput) -> Result<MetricRecord, ProbeFailure> {
    if !output.success() {
        return Err(ProbeFailure::Execution {
            status: output.exit_status,
            output: output.text,
        });
    }
    parse(&output.text, output.exit_status)
}
