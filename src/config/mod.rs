//! TOML configuration for the level, verbosity and destination of a logger.
//!
//! ```toml
//! [general]
//! level = "warning"
//! verbose = true
//!
//! [output]
//! target = "file"
//! path = "~/.local/state/myapp/app.log"
//! ```

mod structs;

pub use structs::{GeneralConfig, OutputConfig};

use crate::level::Severity;
use crate::output::{FileOutput, Output, TerminalOutput};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Loads `<config dir>/levelog/config.toml`, or defaults when it does not exist.
    ///
    /// # Errors
    /// No config directory on this platform, an unreadable file or invalid TOML.
    pub fn load() -> Result<Self, crate::Error> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Loads an explicit file. A missing file yields the defaults.
    ///
    /// # Errors
    /// The file cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// # Errors
    /// `content` is not valid TOML for this schema.
    pub fn from_toml(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("levelog").join("config.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// # Errors
    /// `InvalidLevel` when `general.level` names no severity.
    pub fn severity(&self) -> Result<Severity, crate::Error> {
        Ok(self.general.level.parse()?)
    }

    /// Opens the configured destination.
    ///
    /// # Errors
    /// `InvalidOutput` for an unknown target or a file target without a path, `Io` when
    /// the file cannot be opened.
    pub fn open_output(&self) -> Result<Arc<dyn Output>, crate::Error> {
        match self.output.target.to_lowercase().as_str() {
            "stdout" => Ok(Arc::new(TerminalOutput::stdout())),
            "stderr" => Ok(Arc::new(TerminalOutput::stderr())),
            "file" => {
                let path = self.output.path.as_deref().ok_or_else(|| {
                    crate::Error::InvalidOutput("target \"file\" needs a path".to_string())
                })?;
                Ok(Arc::new(FileOutput::open(path)?))
            }
            other => Err(crate::Error::InvalidOutput(format!(
                "unknown target: {other}"
            ))),
        }
    }
}
