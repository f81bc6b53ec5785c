//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Generate a commented TOML config file from the current settings
    pub fn to_toml(&self) -> String {
        format!(
            r#"# inclusive configuration

# Theme: dark, light, high-contrast (cycle at runtime with F3)
theme = "{theme}"

# Panels and input
[interface]
show_inspector = {inspector}  # accessibility tree panel (F2)
show_logs = {logs}            # log panel (F4)
mouse = {mouse}               # pointer clicks, outside-click and backdrop dismissal
tick_rate_ms = {tick}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to the log panel or stderr)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme = self.theme,
            inspector = self.interface.show_inspector,
            logs = self.interface.show_logs,
            mouse = self.interface.mouse,
            tick = self.interface.tick_rate_ms,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            // Forward slashes keep Windows paths valid inside a basic string
            log_file_dir = self.logging.file_dir.display().to_string().replace('\\', "/"),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
