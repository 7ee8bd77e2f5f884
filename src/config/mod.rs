//! Configuration: TOML file under the platform config directory.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ChannelConfig, Config, LoggingConfig};
