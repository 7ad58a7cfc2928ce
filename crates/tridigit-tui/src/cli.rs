//! Command line arguments.

use std::time::Duration;

use clap::Parser;
use tridigit_app::{DEFAULT_MIRROR_INTERVAL, DisplayConfig};

use crate::TerminalConfig;

/// Three-digit display in the terminal
#[derive(Parser, Debug)]
#[command(name = "tridigit-tui")]
#[command(about = "Type three digits, then watch them mirror and rotate full-screen")]
#[command(version)]
pub struct Args {
    /// Milliseconds between mirror toggles
    #[arg(long, default_value_t = DEFAULT_MIRROR_INTERVAL.as_millis() as u64,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub mirror_interval_ms: u64,

    /// Simulated device orientation at startup, in degrees
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub angle: i32,

    /// Height of a terminal cell divided by its width
    #[arg(long, default_value_t = 2.0)]
    pub cell_aspect: f64,

    /// Append logs to this file (the terminal itself is owned by the UI)
    #[arg(long)]
    pub log_file: Option<String>,

    /// Log level (trace, debug, info, warn, error); `RUST_LOG` takes precedence
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Display settings shared with the state machine.
    pub fn display_config(&self) -> DisplayConfig {
        DisplayConfig { mirror_interval: Duration::from_millis(self.mirror_interval_ms) }
    }

    /// Terminal driver settings.
    pub fn terminal_config(&self) -> TerminalConfig {
        TerminalConfig { initial_angle: self.angle, cell_aspect: self.cell_aspect }
    }
}
