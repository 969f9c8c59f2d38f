pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod server;
pub mod watch;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use watch::{WatchConfig, MAX_INTERVAL_SECS};
