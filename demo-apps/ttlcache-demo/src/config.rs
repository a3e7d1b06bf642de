use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while reading the demo configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DemoError {
    /// An environment variable was set but could not be parsed
    #[error("invalid value {value:?} for {name}: expected {expected}")]
    InvalidVar {
        name: &'static str,
        value: String,
        expected: &'static str,
    },

    /// The poll interval must be non-zero for the ticker to make progress
    #[error("{0} must be greater than zero")]
    ZeroInterval(&'static str),
}

/// Demo settings, read from the environment.
///
/// Reads:
/// - `TTLCACHE_DEMO_KEY` - Key to set and poll (defaults to "key1")
/// - `TTLCACHE_DEMO_VALUE` - Integer value to store (defaults to 10)
/// - `TTLCACHE_DEMO_TTL` - TTL in seconds; zero or below never expires (defaults to 20)
/// - `TTLCACHE_DEMO_POLL_MS` - Delay between reads in milliseconds (defaults to 1000)
/// - `TTLCACHE_DEMO_MAX_POLLS` - Stop after this many reads (defaults to running until Ctrl-C)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    pub key: String,
    pub value: i64,
    pub ttl_seconds: i64,
    pub poll_interval: Duration,
    pub max_polls: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            key: "key1".to_string(),
            value: 10,
            ttl_seconds: 20,
            poll_interval: Duration::from_secs(1),
            max_polls: None,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Result<Self, DemoError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DemoError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let key = lookup("TTLCACHE_DEMO_KEY").unwrap_or(defaults.key);
        let value = parse_var(&lookup, "TTLCACHE_DEMO_VALUE", "an integer")?.unwrap_or(defaults.value);
        let ttl_seconds =
            parse_var(&lookup, "TTLCACHE_DEMO_TTL", "an integer")?.unwrap_or(defaults.ttl_seconds);
        let poll_interval = match parse_var::<u64, _>(&lookup, "TTLCACHE_DEMO_POLL_MS", "milliseconds")? {
            Some(0) => return Err(DemoError::ZeroInterval("TTLCACHE_DEMO_POLL_MS")),
            Some(ms) => Duration::from_millis(ms),
            None => defaults.poll_interval,
        };
        let max_polls = parse_var(&lookup, "TTLCACHE_DEMO_MAX_POLLS", "a non-negative integer")?;

        Ok(Self {
            key,
            value,
            ttl_seconds,
            poll_interval,
            max_polls,
        })
    }
}

fn parse_var<T, F>(lookup: &F, name: &'static str, expected: &'static str) -> Result<Option<T>, DemoError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| DemoError::InvalidVar {
                name,
                value: raw,
                expected,
            }),
    }
}
