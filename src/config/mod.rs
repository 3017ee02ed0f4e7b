//! Configuration module for ping-metrics.
//!
//! Provides layered configuration for a single sweep:
//! - Optional YAML file (scheme, host, count, timeout)
//! - Environment variables and command-line flags on top
//! - Built-in defaults underneath (`<hostname>.ping`, `localhost`, 5, 5s)

mod app;
mod validation;

pub use app::{AppConfig, DEFAULT_SCHEME_SUFFIX, TimeoutSetting, default_scheme};
pub use validation::{ConfigError, expand_env_vars, parse_duration, parse_timeout};
