//! Core data types for a single ping sweep.
//!
//! - [`MetricName`]: The eight fixed metric keys, in emission order
//! - [`MetricValue`]: Integer counters or decimal millisecond readings
//! - [`Millis`]: A round-trip reading that remembers how `ping` printed it
//! - [`OverviewMetrics`] / [`StatisticMetrics`]: The two halves of the summary block
//! - [`MetricRecord`]: Both halves, exposed as an ordered sequence of values

use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Number of metrics produced by one sweep.
pub const METRIC_COUNT: usize = 8;

/// Metric key, rendered as the last path segment of an emitted line.
///
/// Declaration order is the emission order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum MetricName {
    /// Probes sent.
    PacketsTransmitted,
    /// Replies received.
    PacketsReceived,
    /// Loss percentage as reported by `ping`.
    PacketLoss,
    /// Wall-clock duration of the sweep in milliseconds.
    Time,
    /// Minimum round-trip time.
    Min,
    /// Maximum round-trip time.
    Max,
    /// Average round-trip time.
    Avg,
    /// Mean deviation of the round-trip time.
    Mdev,
}

/// A round-trip reading in milliseconds.
///
/// Keeps the decimal text it was parsed from so that `1.000` is emitted as
/// `1.000`, not `1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Millis {
    value: f64,
    text: String,
}

impl Millis {
    /// Build a reading from a number, using its shortest textual form.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            text: value.to_string(),
        }
    }

    /// Numeric value in milliseconds.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Text as it appeared in the probe report.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for Millis {
    type Err = ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.parse::<f64>()?;
        Ok(Self {
            value,
            text: s.to_string(),
        })
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The value carried by one metric line.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    /// Counter or whole-millisecond value, rendered without a decimal point.
    Int(u64),
    /// Decimal millisecond reading, rendered with its parsed precision.
    Float(Millis),
}

impl MetricValue {
    /// Get an f64 representation of this value. Extremely large integers lose precision.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> f64 {
        match self {
            MetricValue::Int(int) => *int as f64,
            MetricValue::Float(millis) => millis.value(),
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Int(int) => write!(f, "{int}"),
            MetricValue::Float(millis) => write!(f, "{millis}"),
        }
    }
}

/// First summary line: `5 packets transmitted, 5 received, 0% packet loss, time 3996ms`.
///
/// Values are passed through as reported; loss is not clamped to 0..=100 and
/// `packets_received` is not checked against `packets_transmitted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverviewMetrics {
    pub packets_transmitted: u64,
    pub packets_received: u64,
    pub packet_loss: u64,
    pub time: u64,
}

/// Second summary line: `rtt min/avg/max/mdev = 0.016/0.019/0.017/0.004 ms`.
///
/// Field order follows the emitted key order (min, max, avg, mdev), not the
/// order `ping` prints them in.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticMetrics {
    pub min: Millis,
    pub max: Millis,
    pub avg: Millis,
    pub mdev: Millis,
}

/// All metrics from one sweep.
///
/// Immutable once built. Iteration always yields the eight [`MetricName`]s
/// in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRecord {
    overview: OverviewMetrics,
    statistics: StatisticMetrics,
}

impl MetricRecord {
    /// Combine both halves of a summary block.
    pub fn new(overview: OverviewMetrics, statistics: StatisticMetrics) -> Self {
        Self {
            overview,
            statistics,
        }
    }

    /// Packet counters and sweep duration.
    pub fn overview(&self) -> &OverviewMetrics {
        &self.overview
    }

    /// Round-trip statistics.
    pub fn statistics(&self) -> &StatisticMetrics {
        &self.statistics
    }

    /// Value for a single key.
    pub fn get(&self, name: MetricName) -> MetricValue {
        match name {
            MetricName::PacketsTransmitted => MetricValue::Int(self.overview.packets_transmitted),
            MetricName::PacketsReceived => MetricValue::Int(self.overview.packets_received),
            MetricName::PacketLoss => MetricValue::Int(self.overview.packet_loss),
            MetricName::Time => MetricValue::Int(self.overview.time),
            MetricName::Min => MetricValue::Float(self.statistics.min.clone()),
            MetricName::Max => MetricValue::Float(self.statistics.max.clone()),
            MetricName::Avg => MetricValue::Float(self.statistics.avg.clone()),
            MetricName::Mdev => MetricValue::Float(self.statistics.mdev.clone()),
        }
    }

    /// All values in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (MetricName, MetricValue)> + '_ {
        MetricName::iter().map(move |name| (name, self.get(name)))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    fn sample_record() -> MetricRecord {
        MetricRecord::new(
            OverviewMetrics {
                packets_transmitted: 5,
                packets_received: 4,
                packet_loss: 20,
                time: 4005,
            },
            StatisticMetrics {
                min: "0.016".parse().unwrap(),
                max: "0.017".parse().unwrap(),
                avg: "0.019".parse().unwrap(),
                mdev: "0.004".parse().unwrap(),
            },
        )
    }

    #[test]
    fn test_metric_name_as_str() {
        assert_eq!(MetricName::PacketsTransmitted.as_ref(), "packets_transmitted");
        assert_eq!(MetricName::PacketsReceived.as_ref(), "packets_received");
        assert_eq!(MetricName::PacketLoss.as_ref(), "packet_loss");
        assert_eq!(MetricName::Time.as_ref(), "time");
        assert_eq!(MetricName::Mdev.to_string(), "mdev");
    }

    #[test]
    fn test_metric_name_from_str() {
        assert_eq!(
            MetricName::from_str("packet_loss").unwrap(),
            MetricName::PacketLoss
        );
        assert!(MetricName::from_str("jitter").is_err());
    }

    #[test]
    fn test_metric_name_iteration_order() {
        let names: Vec<String> = MetricName::iter().map(|n| n.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "packets_transmitted",
                "packets_received",
                "packet_loss",
                "time",
                "min",
                "max",
                "avg",
                "mdev",
            ]
        );
        assert_eq!(names.len(), METRIC_COUNT);
    }

    #[test]
    fn test_millis_keeps_source_precision() {
        let millis: Millis = "1.000".parse().unwrap();
        assert_eq!(millis.value(), 1.0);
        assert_eq!(millis.to_string(), "1.000");

        let millis: Millis = "12.3456789".parse().unwrap();
        assert_eq!(millis.as_str(), "12.3456789");
    }

    #[test]
    fn test_millis_new_uses_shortest_form() {
        assert_eq!(Millis::new(0.25).to_string(), "0.25");
    }

    #[test]
    fn test_millis_rejects_garbage() {
        assert!("fast".parse::<Millis>().is_err());
    }

    #[test]
    fn test_metric_value_display() {
        assert_eq!(MetricValue::Int(3996).to_string(), "3996");
        assert_eq!(
            MetricValue::Float("0.016".parse().unwrap()).to_string(),
            "0.016"
        );
    }

    #[test]
    fn test_metric_value_as_f64() {
        assert_eq!(MetricValue::Int(5).as_f64(), 5.0);
        assert_eq!(MetricValue::Float(Millis::new(0.5)).as_f64(), 0.5);
    }

    #[test]
    fn test_record_iterates_in_fixed_order() {
        let record = sample_record();
        let entries: Vec<(MetricName, String)> = record
            .iter()
            .map(|(name, value)| (name, value.to_string()))
            .collect();

        assert_eq!(
            entries,
            vec![
                (MetricName::PacketsTransmitted, "5".to_string()),
                (MetricName::PacketsReceived, "4".to_string()),
                (MetricName::PacketLoss, "20".to_string()),
                (MetricName::Time, "4005".to_string()),
                (MetricName::Min, "0.016".to_string()),
                (MetricName::Max, "0.017".to_string()),
                (MetricName::Avg, "0.019".to_string()),
                (MetricName::Mdev, "0.004".to_string()),
            ]
        );
    }

    #[test]
    fn test_record_get() {
        let record = sample_record();
        assert_eq!(record.get(MetricName::PacketLoss), MetricValue::Int(20));
        assert_eq!(record.get(MetricName::Avg).to_string(), "0.019");
        assert_eq!(record.overview().packets_received, 4);
        assert_eq!(record.statistics().max.as_str(), "0.017");
    }
}
