//! Capture timestamp shared by every line of a sweep.

use std::sync::OnceLock;

use chrono::Utc;

static CAPTURE_TIMESTAMP: OnceLock<i64> = OnceLock::new();

/// Seconds since the Unix epoch, fixed at the first call in this process.
pub fn capture_timestamp() -> i64 {
    *CAPTURE_TIMESTAMP.get_or_init(|| Utc::now().timestamp())
}
