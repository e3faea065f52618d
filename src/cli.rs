use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, Theme};

/// Full-screen countdown from 100, then "Done". Press q or Esc to leave.
#[derive(Debug, Parser)]
#[command(name = "countdown", version)]
pub struct Cli {
    /// Config file (default: ~/.config/countdown-screen/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the color theme
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Append logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. "debug" or "countdown_screen=trace"
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Load the config file this invocation points at and apply overrides.
    pub fn resolve_config(&self) -> Result<Config, crate::config::ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(theme) = self.theme {
            config.ui.theme = theme;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}
