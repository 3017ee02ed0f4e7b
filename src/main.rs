//! ping-metrics Binary Entry Point
//!
//! Runs one ping sweep and prints its metrics on stdout.
//! Core functionality is provided by the `ping_metrics` library crate.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use ping_metrics::{
    AppConfig, CheckOutcome, CheckStatus, PingCollector,
    config::TimeoutSetting,
    metrics::{capture_timestamp, emit},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Ping a host and output ping statistics as Graphite metrics
#[derive(Parser, Debug)]
#[command(name = "ping-metrics", version, about, long_about = None, disable_help_flag = true)]
struct Cli {
    /// Metric naming scheme, text to prepend to metric [default: <hostname>.ping]
    #[arg(short, long, env = "PING_METRICS_SCHEME")]
    scheme: Option<String>,

    /// Host to ping [default: localhost]
    #[arg(short = 'h', long, env = "PING_METRICS_HOST")]
    host: Option<String>,

    /// Ping count [default: 5]
    #[arg(short, long, env = "PING_METRICS_COUNT")]
    count: Option<u32>,

    /// Timeout, in seconds or as a duration such as 1500ms [default: 5]
    #[arg(short, long, env = "PING_METRICS_TIMEOUT")]
    timeout: Option<String>,

    /// Path to an optional YAML configuration file
    #[arg(long, env = "PING_METRICS_CONFIG")]
    config: Option<PathBuf>,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Cli {
    /// Command-line and environment values, to be layered over the config file.
    fn overrides(&self) -> AppConfig {
        AppConfig {
            scheme: self.scheme.clone(),
            host: self.host.clone(),
            count: self.count,
            timeout: self.timeout.clone().map(TimeoutSetting::from),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // stdout carries metrics and check status, logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match AppConfig::resolve(cli.config.as_deref(), cli.overrides()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return report(CheckOutcome::from(&e));
        }
    };

    tracing::debug!(
        scheme = %config.scheme,
        host = %config.host,
        count = config.count,
        timeout = ?config.timeout,
        "Starting ping sweep"
    );

    let collector = PingCollector::system(config);
    let record = match collector.collect().await {
        Ok(record) => record,
        Err(e) => return report(CheckOutcome::from(&e)),
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = emit(
        &mut stdout,
        &record,
        &collector.config().scheme,
        capture_timestamp(),
    ) {
        tracing::error!(error = %e, "Failed to write metrics");
        return ExitCode::from(CheckStatus::Unknown.exit_code());
    }

    ExitCode::SUCCESS
}

/// Print a check status line and turn it into the process exit code.
fn report(outcome: CheckOutcome) -> ExitCode {
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{outcome}").and_then(|()| stdout.flush()) {
        tracing::error!(error = %e, "Failed to write check status");
    }
    ExitCode::from(outcome.exit_code())
}
