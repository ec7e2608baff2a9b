//! Configuration loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use alert_client::ClientConfig;
use alert_core::{RegionId, UnknownRegion};
use alert_monitor::MonitorConfig;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub client: ClientConfig,
    pub monitor: MonitorConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `ALERTS_BASE_URL` | Alerts server base URL | `http://127.0.0.1:8080` |
    /// | `POLL_INTERVAL_MS` | Current-alert poll interval | `1000` |
    /// | `DEMO_INTERVAL_MS` | Demo advance interval | `4000` |
    /// | `HISTORY_INTERVAL_SECS` | History refresh interval | `60` |
    /// | `REQUEST_TIMEOUT_SECS` | HTTP request timeout | `4` |
    /// | `ALERTS_REGION` | Region selected at startup | `all` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let mut client = ClientConfig::default();
        if let Some(url) = lookup("ALERTS_BASE_URL") {
            client = ClientConfig::new(url).with_timeout(client.request_timeout);
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, "REQUEST_TIMEOUT_SECS")? {
            client = client.with_timeout(Duration::from_secs(secs));
        }

        let mut monitor = MonitorConfig::default();
        if let Some(ms) = parse_var::<u64, _>(&lookup, "POLL_INTERVAL_MS")? {
            monitor.poll_interval = Duration::from_millis(ms);
        }
        if let Some(ms) = parse_var::<u64, _>(&lookup, "DEMO_INTERVAL_MS")? {
            monitor.demo_interval = Duration::from_millis(ms);
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, "HISTORY_INTERVAL_SECS")? {
            monitor.history_interval = Duration::from_secs(secs);
        }
        if let Some(region) = lookup("ALERTS_REGION") {
            monitor.region = region.parse()?;
        }

        Ok(Self { client, monitor })
    }
}

/// Parse a variable if set. Zero is rejected; tokio intervals need a period.
fn parse_var<T, L>(lookup: &L, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr + PartialEq + Default,
    L: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    match raw.trim().parse::<T>() {
        Ok(value) if value != T::default() => Ok(Some(value)),
        _ => Err(ConfigError::InvalidNumber { key, value: raw }),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error(transparent)]
    Region(#[from] UnknownRegion),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.client.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.client.request_timeout, Duration::from_secs(4));
        assert_eq!(config.monitor.poll_interval, Duration::from_secs(1));
        assert_eq!(config.monitor.demo_interval, Duration::from_secs(4));
        assert_eq!(config.monitor.history_interval, Duration::from_secs(60));
        assert_eq!(config.monitor.region, RegionId::All);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("ALERTS_BASE_URL", "http://alerts.local/"),
            ("REQUEST_TIMEOUT_SECS", "9"),
            ("POLL_INTERVAL_MS", "500"),
            ("DEMO_INTERVAL_MS", "2000"),
            ("HISTORY_INTERVAL_SECS", "30"),
            ("ALERTS_REGION", "gush-dan"),
        ])
        .unwrap();
        assert_eq!(config.client.alerts_url(), "http://alerts.local/api/alerts");
        assert_eq!(config.client.request_timeout, Duration::from_secs(9));
        assert_eq!(config.monitor.poll_interval, Duration::from_millis(500));
        assert_eq!(config.monitor.demo_interval, Duration::from_millis(2000));
        assert_eq!(config.monitor.history_interval, Duration::from_secs(30));
        assert_eq!(config.monitor.region, RegionId::GushDan);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            load(&[("POLL_INTERVAL_MS", "fast")]),
            Err(ConfigError::InvalidNumber { key: "POLL_INTERVAL_MS", .. })
        ));
        assert!(matches!(
            load(&[("HISTORY_INTERVAL_SECS", "0")]),
            Err(ConfigError::InvalidNumber { .. })
        ));
        assert!(matches!(
            load(&[("ALERTS_REGION", "atlantis")]),
            Err(ConfigError::Region(_))
        ));
    }
}
