//! Application configuration structures.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::collector::CollectorError;
use crate::collector::ping::{DEFAULT_COUNT, DEFAULT_HOST, DEFAULT_TIMEOUT, PingConfig};

use super::validation::{ConfigError, expand_env_vars, parse_timeout};

// =============================================================================
// Constants
// =============================================================================

/// Suffix appended to the local hostname to build the default scheme.
pub const DEFAULT_SCHEME_SUFFIX: &str = ".ping";

/// Used when the local hostname cannot be determined.
const FALLBACK_HOSTNAME: &str = "localhost";

/// Default metric scheme: `<local-hostname>.ping`.
pub fn default_scheme() -> String {
    let hostname = match nix::unistd::gethostname() {
        Ok(name) => name
            .into_string()
            .unwrap_or_else(|name| name.to_string_lossy().into_owned()),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to look up local hostname");
            FALLBACK_HOSTNAME.to_string()
        }
    };
    format!("{hostname}{DEFAULT_SCHEME_SUFFIX}")
}

// =============================================================================
// Timeout Setting
// =============================================================================

/// Probe timeout as written in a config file or on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeoutSetting {
    /// Whole seconds, e.g. `timeout: 5`.
    Seconds(u64),
    /// Bare seconds or a humantime duration, e.g. `timeout: 1500ms`.
    Text(String),
}

impl TimeoutSetting {
    /// Resolve to a duration.
    ///
    /// # Errors
    /// Returns `ConfigError::ValidationError` if the text is not a duration.
    pub fn to_duration(&self) -> Result<Duration, ConfigError> {
        match self {
            Self::Seconds(secs) => Ok(Duration::from_secs(*secs)),
            Self::Text(text) => parse_timeout(text).map_err(|e| {
                ConfigError::ValidationError(format!("invalid timeout '{text}': {e}"))
            }),
        }
    }
}

impl From<String> for TimeoutSetting {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

// =============================================================================
// Application Configuration
// =============================================================================

/// Sweep settings from one configuration source.
///
/// Every field is optional so that sources can be layered with
/// [`AppConfig::merge`]; unset fields fall back to built-in defaults in
/// [`AppConfig::to_ping_config`].
///
/// ```yaml
/// scheme: ${HOSTNAME:-web01}.ping
/// host: 10.0.0.1
/// count: 3
/// timeout: 2s
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Metric path prefix (default: `<local-hostname>.ping`).
    pub scheme: Option<String>,

    /// Host to ping (default: "localhost").
    pub host: Option<String>,

    /// Echo requests per sweep (default: 5).
    pub count: Option<u32>,

    /// Per-reply timeout (default: 5s).
    pub timeout: Option<TimeoutSetting>,
}

impl AppConfig {
    /// Load configuration from a YAML file.
    ///
    /// `${VAR}` and `${VAR:-default}` references are expanded before parsing.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text.
    ///
    /// # Errors
    /// Returns `ConfigError::ParseError` on malformed YAML or unknown keys.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let expanded = expand_env_vars(content);
        if expanded.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&expanded)?)
    }

    /// Layer `overrides` on top of this configuration, field by field.
    #[must_use]
    pub fn merge(self, overrides: AppConfig) -> Self {
        Self {
            scheme: overrides.scheme.or(self.scheme),
            host: overrides.host.or(self.host),
            count: overrides.count.or(self.count),
            timeout: overrides.timeout.or(self.timeout),
        }
    }

    /// Fill in defaults and build a validated [`PingConfig`].
    ///
    /// # Errors
    /// Returns `ConfigError::ValidationError` if any field is invalid.
    pub fn to_ping_config(&self) -> Result<PingConfig, ConfigError> {
        let scheme = self.scheme.clone().unwrap_or_else(default_scheme);
        let host = self
            .host
            .clone()
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let timeout = match &self.timeout {
            Some(setting) => setting.to_duration()?,
            None => DEFAULT_TIMEOUT,
        };

        let config = PingConfig::new(scheme, host)
            .with_count(self.count.unwrap_or(DEFAULT_COUNT))
            .with_timeout(timeout);

        config.validate().map_err(|e| match e {
            CollectorError::Config(msg) => ConfigError::ValidationError(msg),
            other => ConfigError::ValidationError(other.to_string()),
        })?;

        Ok(config)
    }

    /// Resolve the effective sweep configuration.
    ///
    /// Precedence: `overrides` (command line and environment) > config file >
    /// built-in defaults.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be loaded or the result is invalid.
    pub fn resolve(file: Option<&Path>, overrides: AppConfig) -> Result<PingConfig, ConfigError> {
        let base = match file {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading configuration file");
                Self::load(path)?
            }
            None => Self::default(),
        };

        base.merge(overrides).to_ping_config()
    }
}
