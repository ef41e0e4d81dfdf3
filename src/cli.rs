//! Command-line flags
//!
//! Flags override values from `~/.agenda-tui/config.json`.

use crate::config::Config;
use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "agenda", version, about = "Terminal address book")]
pub struct Cli {
    /// Contacts document to open (created on first change)
    #[arg(long, value_name = "PATH", conflicts_with = "in_memory")]
    pub data_file: Option<String>,

    /// Keep contacts in memory only; nothing is written to disk
    #[arg(long)]
    pub in_memory: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// How long toasts stay on screen, in milliseconds
    #[arg(long, value_name = "MS")]
    pub toast_ms: Option<u64>,

    /// Save the effective settings to the config file before starting
    #[arg(long)]
    pub write_config: bool,
}

impl Cli {
    /// Layer the flags over a loaded config
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(ref file) = self.data_file {
            config.data_file = Some(file.clone());
        }
        if let Some(ref level) = self.log_level {
            config.log_level = level.clone();
        }
        if let Some(ms) = self.toast_ms {
            config.toast_duration_ms = ms;
        }
        config
    }
}
