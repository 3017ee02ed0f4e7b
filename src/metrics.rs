//! Metric Layer
//!
//! Typed results of a ping sweep and their line-oriented output form.
//!
//! # Components
//!
//! - [`MetricRecord`]: The eight metrics of one sweep, in fixed order
//! - [`MetricLine`] / [`render`] / [`emit`]: Graphite plaintext rendering
//! - [`capture_timestamp`]: Process-wide timestamp shared by all lines

mod emitter;
mod timestamp;
mod types;

pub use emitter::{MetricLine, emit, render};
pub use timestamp::capture_timestamp;
pub use types::{
    METRIC_COUNT, MetricName, MetricRecord, MetricValue, Millis, OverviewMetrics,
    StatisticMetrics,
};
