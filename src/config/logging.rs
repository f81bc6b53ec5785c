//! `[logging]` section: filter level and the optional JSON log file
//!
//! Values are checked while merging because logging is not up yet when the
//! config loads; a bad value is reported on stderr and the default is used.

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Levels accepted for the `inclusive` filter directive
pub const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Canonical form of a level name, or None if it is not one of [`LEVELS`]
pub fn normalize_level(level: &str) -> Option<&'static str> {
    let level = level.trim().to_ascii_lowercase();
    LEVELS.into_iter().find(|l| *l == level)
}

/// When the JSON log file starts a new segment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    /// One file for the lifetime of the directory
    Never,
}

impl LogRotation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

impl FromStr for LogRotation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hourly" => Ok(Self::Hourly),
            "daily" => Ok(Self::Daily),
            "never" => Ok(Self::Never),
            other => Err(format!(
                "unknown rotation {other:?} (expected hourly, daily or never)"
            )),
        }
    }
}

impl fmt::Display for LogRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Effective logging settings
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter level for this crate's targets; RUST_LOG still wins
    pub level: String,
    /// Also write JSON lines to a rolling file
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// File name prefix, e.g. "inclusive" -> "inclusive.2024-01-15"
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::Daily,
            file_prefix: "inclusive".to_string(),
        }
    }
}

/// `[logging]` as written in the config file; every key optional
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    /// Merge the file section over the defaults
    pub fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let mut config = Self::default();

        if let Some(level) = file.level {
            match normalize_level(&level) {
                Some(level) => config.level = level.to_string(),
                None => eprintln!(
                    "Warning: [logging] level {:?} is not one of {}; using {:?}",
                    level,
                    LEVELS.join(", "),
                    config.level
                ),
            }
        }

        if let Some(rotation) = file.file_rotation {
            match rotation.parse() {
                Ok(rotation) => config.file_rotation = rotation,
                Err(e) => eprintln!("Warning: [logging] {}; using {}", e, config.file_rotation),
            }
        }

        if let Some(dir) = file.file_dir.filter(|d| !d.trim().is_empty()) {
            config.file_dir = PathBuf::from(dir);
        }
        if let Some(prefix) = file.file_prefix.filter(|p| !p.trim().is_empty()) {
            config.file_prefix = prefix;
        }
        config.file_enabled = file.file_enabled.unwrap_or(config.file_enabled);

        config
    }
}
