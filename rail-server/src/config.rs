//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::upstream::UpstreamConfig;

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Error returned when an environment variable holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {name}: {value:?}")]
pub struct ConfigError {
    name: &'static str,
    value: String,
}

/// Everything the server binary needs to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (`RAIL_BIND_ADDR`)
    pub bind_addr: SocketAddr,

    /// Upstream client settings (`RAIL_UPSTREAM_BASE_URL`,
    /// `RAIL_UPSTREAM_TIMEOUT_SECS`, `RAIL_USER_AGENT`)
    pub upstream: UpstreamConfig,

    /// Serve recorded payloads from this directory instead of the live
    /// upstream (`RAIL_FIXTURE_DIR`)
    pub fixture_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let bind_addr = var("RAIL_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr.parse().map_err(|_| ConfigError {
            name: "RAIL_BIND_ADDR",
            value: bind_addr.clone(),
        })?;

        let mut upstream = UpstreamConfig::new();
        if let Some(url) = var("RAIL_UPSTREAM_BASE_URL") {
            upstream = upstream.with_base_url(url);
        }
        if let Some(secs) = var("RAIL_UPSTREAM_TIMEOUT_SECS") {
            let parsed = secs.parse().ok().filter(|&s: &u64| s > 0).ok_or(ConfigError {
                name: "RAIL_UPSTREAM_TIMEOUT_SECS",
                value: secs,
            })?;
            upstream = upstream.with_timeout(parsed);
        }
        if let Some(user_agent) = var("RAIL_USER_AGENT") {
            upstream = upstream.with_user_agent(user_agent);
        }

        Ok(Self {
            bind_addr,
            upstream,
            fixture_dir: var("RAIL_FIXTURE_DIR").map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:5000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.upstream.base_url, "https://erail.in");
        assert_eq!(config.upstream.timeout_secs, 30);
        assert!(config.fixture_dir.is_none());
    }

    #[test]
    fn overrides() {
        let config = config(&[
            ("RAIL_BIND_ADDR", "0.0.0.0:8080"),
            ("RAIL_UPSTREAM_BASE_URL", "http://localhost:9000/"),
            ("RAIL_UPSTREAM_TIMEOUT_SECS", "5"),
            ("RAIL_USER_AGENT", "rail-test"),
            ("RAIL_FIXTURE_DIR", "fixtures"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.upstream.base_url, "http://localhost:9000");
        assert_eq!(config.upstream.timeout_secs, 5);
        assert_eq!(config.upstream.user_agent, "rail-test");
        assert_eq!(config.fixture_dir, Some(PathBuf::from("fixtures")));
    }

    #[test]
    fn blank_values_use_defaults() {
        let config = config(&[("RAIL_BIND_ADDR", "  "), ("RAIL_FIXTURE_DIR", "")]).unwrap();
        assert_eq!(config.bind_addr.port(), 5000);
        assert!(config.fixture_dir.is_none());
    }

    #[test]
    fn rejects_bad_values() {
        let err = config(&[("RAIL_BIND_ADDR", "localhost")]).unwrap_err();
        assert_eq!(err.to_string(), "invalid RAIL_BIND_ADDR: \"localhost\"");

        assert!(config(&[("RAIL_UPSTREAM_TIMEOUT_SECS", "soon")]).is_err());
        assert!(config(&[("RAIL_UPSTREAM_TIMEOUT_SECS", "0")]).is_err());
    }
}
