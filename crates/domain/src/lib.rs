//! soawatch domain layer
pub mod config;
pub mod domain_name;
pub mod errors;
pub mod soa;
pub mod watch_event;

pub use config::{CliOverrides, Config, ConfigError};
pub use domain_name::DomainName;
pub use errors::DomainError;
pub use soa::{SoaChange, SoaSnapshot};
pub use watch_event::WatchEvent;
