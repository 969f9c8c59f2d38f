use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;
use super::server::ServerConfig;
use super::watch::{WatchConfig, MAX_INTERVAL_SECS};

const LOCAL_CONFIG_PATH: &str = "soawatch.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/soawatch/config.toml";

/// Main configuration structure for soawatch
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP listener configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream resolver used for SOA queries
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Watch session behaviour
    #[serde(default)]
    pub watch: WatchConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. soawatch.toml in current directory
    /// 3. /etc/soawatch/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(upstream) = overrides.upstream {
            self.resolver.upstream = upstream;
        }
        if let Some(secs) = overrides.interval_secs {
            self.watch.interval_secs = secs;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }

        self.resolver.upstream_addr()?;

        if self.resolver.query_timeout == 0 {
            return Err(ConfigError::Validation(
                "Resolver query timeout must be greater than 0".to_string(),
            ));
        }

        if self.watch.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "Watch interval must be greater than 0".to_string(),
            ));
        }

        if self.watch.interval_secs > MAX_INTERVAL_SECS {
            return Err(ConfigError::Validation(format!(
                "Watch interval must not exceed {} seconds",
                MAX_INTERVAL_SECS
            )));
        }

        if self.watch.max_sessions == Some(0) {
            return Err(ConfigError::Validation(
                "max_sessions must be greater than 0 when set".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub upstream: Option<String>,
    pub interval_secs: Option<u64>,
    pub log_level: Option<String>,
}
