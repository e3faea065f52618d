use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Screen appearance and redraw pacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Color scheme (default: dark).
    #[serde(default)]
    pub theme: Theme,
    /// Longest wait between two redraws in milliseconds (default: 250).
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
    /// Draw the counter with the block font when it fits (default: true).
    #[serde(default = "default_large_text")]
    pub large_text: bool,
}

/// File logging. The screen owns the terminal, so logs never go to stdout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG` (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Logging is off when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

fn default_frame_interval_ms() -> u64 {
    250
}

fn default_large_text() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            frame_interval_ms: default_frame_interval_ms(),
            large_text: default_large_text(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
