use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

use super::errors::ConfigError;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// `ip:port` of the resolver every SOA query is sent to.
    #[serde(default = "default_upstream")]
    pub upstream: String,

    /// Per-exchange timeout in seconds.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,
}

impl ResolverConfig {
    pub fn upstream_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.upstream.parse().map_err(|e| {
            ConfigError::Validation(format!(
                "Invalid upstream resolver address '{}': {}",
                self.upstream, e
            ))
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            upstream: default_upstream(),
            query_timeout: default_query_timeout(),
        }
    }
}

fn default_upstream() -> String {
    "8.8.8.8:53".to_string()
}

fn default_query_timeout() -> u64 {
    5
}
