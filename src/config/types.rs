use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub channels: ChannelConfig,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives. `RUST_LOG` wins when set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Prefix lines with an RFC 3339 UTC timestamp (default: true).
    #[serde(default = "default_timestamps")]
    pub timestamps: bool,
}

/// Ring sizes of the per-screen broadcast channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Failures kept for slow observers before they start lagging (default: 64).
    #[serde(default = "default_failure_capacity")]
    pub failure_capacity: usize,
    /// Parsed domain errors kept for slow observers (default: 64).
    #[serde(default = "default_parsed_error_capacity")]
    pub parsed_error_capacity: usize,
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_timestamps() -> bool {
    true
}

fn default_failure_capacity() -> usize {
    64
}

fn default_parsed_error_capacity() -> usize {
    64
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            timestamps: default_timestamps(),
        }
    }
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            failure_capacity: default_failure_capacity(),
            parsed_error_capacity: default_parsed_error_capacity(),
        }
    }
}
