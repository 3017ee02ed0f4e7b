//! Collector Layer
//!
//! Runs the external probe and turns its report into metrics.
//!
//! # Architecture
//!
//! - [`ProbeRunner`]: Seam around the probe process, returns a [`ProbeOutput`]
//! - [`ping::PingCollector`]: Drives one sweep through a runner and the report parser
//!
//! # Example
//!
//! ```rust,no_run
//! use ping_metrics::collector::ping::{PingCollector, PingConfig};
//! use ping_metrics::metrics::{capture_timestamp, emit};
//!
//! # async fn sweep() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PingConfig::new("web01.ping", "10.0.0.1").with_count(3);
//! let collector = PingCollector::system(config);
//! let record = collector.collect().await?;
//! emit(&mut std::io::stdout(), &record, "web01.ping", capture_timestamp())?;
//! # Ok(())
//! # }
//! ```

pub mod ping;
mod traits;

pub use traits::{CollectorError, ProbeOutput, ProbeRunner, ProbeTarget, SIGNALED_EXIT_STATUS};
