//! Building and reconfiguring loggers from a loaded [`Config`].

use super::Logger;
use crate::config::Config;

impl Logger {
    /// # Errors
    /// Invalid level names, an unknown output target, or a file output that cannot be opened.
    pub fn from_config(config: &Config) -> Result<Self, crate::Error> {
        Ok(Self::with_output(
            config.severity()?,
            config.general.verbose,
            config.open_output()?,
        ))
    }

    /// Applies `config` to an existing logger.
    ///
    /// Nothing is changed unless the whole config is valid.
    ///
    /// # Errors
    /// Same as [`Logger::from_config`].
    pub fn apply_config(&self, config: &Config) -> Result<(), crate::Error> {
        let level = config.severity()?;
        let output = config.open_output()?;
        self.set_level(level);
        self.verbose(config.general.verbose);
        self.set_writer(output);
        Ok(())
    }
}
