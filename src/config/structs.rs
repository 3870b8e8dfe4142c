//! Configuration struct definitions.

use serde::Deserialize;

/// `[general]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum severity: `info`, `warning` or `error`.
    pub level: String,
    /// Prefix lines with the caller's `file:line`.
    pub verbose: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            verbose: false,
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// `stdout`, `stderr` or `file`.
    pub target: String,
    /// Log file for `target = "file"`. A leading `~` is expanded.
    pub path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            target: "stdout".to_string(),
            path: None,
        }
    }
}
