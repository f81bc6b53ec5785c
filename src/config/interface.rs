//! Interface configuration
//!
//! Which side panels start visible, mouse capture, redraw cadence.

use serde::Deserialize;

/// Interface settings
#[derive(Debug, Clone)]
pub struct InterfaceConfig {
    /// Show the accessibility inspector on startup (toggle: F2)
    pub show_inspector: bool,

    /// Show the log panel on startup (toggle: F4)
    pub show_logs: bool,

    /// Capture mouse events (click, outside-click, backdrop click)
    pub mouse: bool,

    /// Redraw interval in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for InterfaceConfig {
    fn default() -> Self {
        Self {
            show_inspector: true,
            show_logs: false,
            mouse: true,
            tick_rate_ms: 250,
        }
    }
}

/// Interface settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileInterface {
    pub show_inspector: Option<bool>,
    pub show_logs: Option<bool>,
    pub mouse: Option<bool>,
    pub tick_rate_ms: Option<u64>,
}

impl InterfaceConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileInterface>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            show_inspector: file.show_inspector.unwrap_or(defaults.show_inspector),
            show_logs: file.show_logs.unwrap_or(defaults.show_logs),
            mouse: file.mouse.unwrap_or(defaults.mouse),
            // A zero interval would spin the event loop
            tick_rate_ms: file
                .tick_rate_ms
                .filter(|&ms| ms > 0)
                .unwrap_or(defaults.tick_rate_ms),
        }
    }
}
