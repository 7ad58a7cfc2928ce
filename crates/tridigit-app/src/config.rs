//! Display configuration.

use std::time::Duration;

/// Default period of the mirror toggle.
pub const DEFAULT_MIRROR_INTERVAL: Duration = Duration::from_secs(2);

/// Static display parameters shared by every front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Period of the mirror toggle while a number is displayed.
    pub mirror_interval: Duration,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { mirror_interval: DEFAULT_MIRROR_INTERVAL }
    }
}

/// Hardcoded user-facing strings.
pub mod strings {
    /// Heading above the input field.
    pub const TITLE: &str = "Dreistellige Zahl eingeben";
    /// Tooltip on the displayed number and its close control.
    pub const TOOLTIP: &str = "Tippen zum Schließen";
    /// Placeholder inside the empty input field.
    pub const PLACEHOLDER: &str = "000";
}
