//! Sweep Integration Tests for ping-metrics
//!
//! Drives a full sweep (runner, parser, emitter, check outcome) with a
//! scripted probe in place of the system `ping`.

use std::sync::Mutex;
use std::time::Duration;

use ping_metrics::check::{CheckOutcome, CheckStatus};
use ping_metrics::collector::ping::{PingCollector, PingConfig, PingError, ProbeFailure};
use ping_metrics::collector::{CollectorError, ProbeOutput, ProbeRunner, ProbeTarget};
use ping_metrics::metrics::{METRIC_COUNT, emit};

// =============================================================================
// Test Helpers
// =============================================================================

const TIMESTAMP: i64 = 1_437_137_076;

const SUCCESS_REPORT: &str = "\
PING localhost (127.0.0.1) 56(84) bytes of data.
64 bytes from localhost (127.0.0.1): icmp_seq=1 ttl=64 time=0.016 ms
64 bytes from localhost (127.0.0.1): icmp_seq=2 ttl=64 time=0.017 ms
64 bytes from localhost (127.0.0.1): icmp_seq=3 ttl=64 time=0.022 ms
64 bytes from localhost (127.0.0.1): icmp_seq=4 ttl=64 time=0.019 ms
64 bytes from localhost (127.0.0.1): icmp_seq=5 ttl=64 time=0.021 ms

--- localhost ping statistics ---
5 packets transmitted, 5 received, 0% packet loss, time 3996ms
rtt min/avg/max/mdev = 0.016/0.019/0.017/0.004 ms
";

/// Probe that replays a fixed output and records what it was asked to do.
struct ScriptedProbe {
    output: ProbeOutput,
    targets: Mutex<Vec<ProbeTarget>>,
}

impl ScriptedProbe {
    fn new(text: &str, exit_status: i32) -> Self {
        Self {
            output: ProbeOutput::new(text, exit_status),
            targets: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ProbeRunner for ScriptedProbe {
    async fn run(&self, target: &ProbeTarget) -> Result<ProbeOutput, CollectorError> {
        self.targets.lock().unwrap().push(target.clone());
        Ok(self.output.clone())
    }
}

/// Run one sweep, returning what would be written to stdout and the outcome.
async fn sweep(probe: ScriptedProbe, scheme: &str) -> (String, Result<(), CheckOutcome>) {
    let collector = PingCollector::new(PingConfig::new(scheme, "localhost"), probe);
    let mut stdout = Vec::new();

    let result = match collector.collect().await {
        Ok(record) => {
            emit(&mut stdout, &record, scheme, TIMESTAMP).unwrap();
            Ok(())
        }
        Err(e) => Err(CheckOutcome::from(&e)),
    };

    (String::from_utf8(stdout).unwrap(), result)
}

// =============================================================================
// End-to-end Scenarios
// =============================================================================

#[tokio::test]
async fn test_successful_sweep_output() {
    let (stdout, result) = sweep(ScriptedProbe::new(SUCCESS_REPORT, 0), "myhost.ping").await;

    assert!(result.is_ok());
    assert_eq!(
        stdout,
        "\
myhost.ping.packets_transmitted 5 1437137076
myhost.ping.packets_received 5 1437137076
myhost.ping.packet_loss 0 1437137076
myhost.ping.time 3996 1437137076
myhost.ping.min 0.016 1437137076
myhost.ping.max 0.017 1437137076
myhost.ping.avg 0.019 1437137076
myhost.ping.mdev 0.004 1437137076
"
    );
    assert_eq!(stdout.lines().count(), METRIC_COUNT);
}

#[tokio::test]
async fn test_probe_failure_emits_nothing() {
    let (stdout, result) = sweep(
        ScriptedProbe::new("ping: unknown host nowhere.invalid\n", 2),
        "host.ping",
    )
    .await;

    assert!(stdout.is_empty());
    let outcome = result.unwrap_err();
    assert_eq!(outcome.status, CheckStatus::Critical);
    assert_eq!(outcome.exit_code(), 2);
    assert!(outcome.message.starts_with("ping error: (2): "));
}

#[tokio::test]
async fn test_probe_failure_wins_over_parsable_text() {
    let (stdout, result) = sweep(ScriptedProbe::new(SUCCESS_REPORT, 1), "host.ping").await;

    assert!(stdout.is_empty());
    assert_eq!(result.unwrap_err().status, CheckStatus::Critical);
}

#[tokio::test]
async fn test_malformed_overview_emits_nothing() {
    let report = SUCCESS_REPORT.replace(", 0% packet loss", "");
    let probe = ScriptedProbe::new(&report, 0);
    let collector = PingCollector::new(PingConfig::new("host.ping", "localhost"), probe);

    let err = collector.collect().await.unwrap_err();
    assert!(matches!(
        err,
        PingError::Probe(ProbeFailure::MalformedOverview { ref line })
            if line == "5 packets transmitted, 5 received, time 3996ms"
    ));

    let outcome = CheckOutcome::from(&err);
    assert_eq!(
        outcome.to_string(),
        "PingMetrics CRITICAL: malformed overview line: \
         '5 packets transmitted, 5 received, time 3996ms'"
    );
}

#[tokio::test]
async fn test_malformed_statistics_emits_nothing() {
    let report = SUCCESS_REPORT.replace("rtt min/avg/max/mdev", "rtt min/avg/max");
    let (stdout, result) = sweep(ScriptedProbe::new(&report, 0), "host.ping").await;

    assert!(stdout.is_empty());
    let outcome = result.unwrap_err();
    assert_eq!(outcome.status, CheckStatus::Critical);
    assert!(outcome.message.starts_with("malformed statistics line"));
}

// =============================================================================
// Runner Contract
// =============================================================================

#[tokio::test]
async fn test_runner_receives_configured_target() {
    let config = PingConfig::new("host.ping", "192.0.2.10")
        .with_count(3)
        .with_timeout(Duration::from_secs(2));
    let collector = PingCollector::new(config, ScriptedProbe::new(SUCCESS_REPORT, 0));

    collector.collect().await.unwrap();

    let recorded = collector.runner().targets.lock().unwrap().clone();
    assert_eq!(
        recorded,
        vec![ProbeTarget {
            host: "192.0.2.10".to_string(),
            count: 3,
            timeout: Duration::from_secs(2),
        }]
    );
}

#[tokio::test]
async fn test_sweeps_are_idempotent() {
    let (first, _) = sweep(ScriptedProbe::new(SUCCESS_REPORT, 0), "host.ping").await;
    let (second, _) = sweep(ScriptedProbe::new(SUCCESS_REPORT, 0), "host.ping").await;
    assert_eq!(first, second);
}
