//! Server configuration.
//!
//! Everything has a default; environment variables override:
//!
//! | Variable | Default |
//! |---|---|
//! | `TUBE_BIND_ADDR` | `127.0.0.1:3000` |
//! | `TUBE_STATIC_DIR` | `static` |
//! | `TFL_BASE_URL` | `https://api.tfl.gov.uk` |
//! | `TFL_MODE` | `tube` |
//! | `TFL_TIMEOUT_SECS` | `30` |
//! | `TFL_FIXTURES_DIR` | unset (use the live API) |
//! | `LINE_CACHE_TTL_SECS` | `600` |

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::cache::CacheConfig;
use crate::tfl::TflConfig;

/// Error returned when an environment variable holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {key}={value:?}: {reason}")]
pub struct ConfigError {
    key: &'static str,
    value: String,
    reason: String,
}

/// Top-level configuration for the server binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
    /// TfL client settings.
    pub tfl: TflConfig,
    /// Serve canned responses from this directory instead of calling TfL.
    pub fixtures_dir: Option<PathBuf>,
    /// Line directory cache settings.
    pub cache: CacheConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: PathBuf::from("static"),
            tfl: TflConfig::default(),
            fixtures_dir: None,
            cache: CacheConfig::default(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup("TUBE_BIND_ADDR") {
            config.bind_addr = parse("TUBE_BIND_ADDR", value)?;
        }
        if let Some(value) = lookup("TUBE_STATIC_DIR") {
            config.static_dir = PathBuf::from(value);
        }
        if let Some(value) = lookup("TFL_BASE_URL") {
            config.tfl = config.tfl.with_base_url(value);
        }
        if let Some(value) = lookup("TFL_MODE") {
            config.tfl = config.tfl.with_mode(value);
        }
        if let Some(value) = lookup("TFL_TIMEOUT_SECS") {
            config.tfl = config.tfl.with_timeout(parse("TFL_TIMEOUT_SECS", value)?);
        }
        if let Some(value) = lookup("TFL_FIXTURES_DIR").filter(|v| !v.is_empty()) {
            config.fixtures_dir = Some(PathBuf::from(value));
        }
        if let Some(value) = lookup("LINE_CACHE_TTL_SECS") {
            config.cache.ttl = Duration::from_secs(parse("LINE_CACHE_TTL_SECS", value)?);
        }

        Ok(config)
    }
}

fn parse<T>(key: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError {
        key,
        reason: e.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.bind_addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.tfl.base_url, "https://api.tfl.gov.uk");
        assert_eq!(config.tfl.mode, "tube");
        assert_eq!(config.fixtures_dir, None);
        assert_eq!(config.cache.ttl, Duration::from_secs(600));
    }

    #[test]
    fn environment_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("TUBE_BIND_ADDR", "0.0.0.0:8080"),
            ("TFL_BASE_URL", "http://localhost:9000"),
            ("TFL_MODE", "dlr"),
            ("TFL_TIMEOUT_SECS", " 5 "),
            ("TFL_FIXTURES_DIR", "data/fixtures"),
            ("LINE_CACHE_TTL_SECS", "60"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.tfl.base_url, "http://localhost:9000");
        assert_eq!(config.tfl.mode, "dlr");
        assert_eq!(config.tfl.timeout_secs, 5);
        assert_eq!(config.fixtures_dir, Some(PathBuf::from("data/fixtures")));
        assert_eq!(config.cache.ttl, Duration::from_secs(60));
    }

    #[test]
    fn empty_fixtures_dir_means_live() {
        let config = AppConfig::from_lookup(lookup(&[("TFL_FIXTURES_DIR", "")])).unwrap();
        assert_eq!(config.fixtures_dir, None);
    }

    #[test]
    fn invalid_values_are_reported() {
        let err = AppConfig::from_lookup(lookup(&[("TFL_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(err.to_string().starts_with("invalid TFL_TIMEOUT_SECS=\"soon\""));

        let err = AppConfig::from_lookup(lookup(&[("TUBE_BIND_ADDR", "localhost")])).unwrap_err();
        assert!(err.to_string().contains("TUBE_BIND_ADDR"));
    }
}
