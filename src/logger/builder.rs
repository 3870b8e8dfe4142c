//! Stepwise construction for loggers that need more than a level.

use super::Logger;
use crate::level::Severity;
use crate::output::{FileOutput, Output, TerminalOutput};
use std::sync::Arc;

/// Collects level, verbosity and destination before building a [`Logger`].
pub struct LoggerBuilder {
    level: Severity,
    verbose: bool,
    output: Arc<dyn Output>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("level", &self.level)
            .field("verbose", &self.verbose)
            .finish_non_exhaustive()
    }
}

impl LoggerBuilder {
    /// `Info` to standard output, not verbose.
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: Severity::Info,
            verbose: false,
            output: Arc::new(TerminalOutput::stdout()),
        }
    }

    #[must_use]
    pub const fn level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub const fn verbose(mut self, enabled: bool) -> Self {
        self.verbose = enabled;
        self
    }

    #[must_use]
    pub fn stdout(self) -> Self {
        self.output(TerminalOutput::stdout())
    }

    #[must_use]
    pub fn stderr(self) -> Self {
        self.output(TerminalOutput::stderr())
    }

    /// Appends to the file at `path`, see [`FileOutput::open`].
    ///
    /// # Errors
    /// Whatever opening the file reports; the builder is consumed.
    pub fn file(self, path: impl AsRef<str>) -> Result<Self, crate::Error> {
        Ok(self.output(FileOutput::open(path)?))
    }

    /// Takes ownership of a destination.
    #[must_use]
    pub fn output(mut self, output: impl Output + 'static) -> Self {
        self.output = Arc::new(output);
        self
    }

    /// Uses a destination that stays reachable from elsewhere, e.g. a [`MemoryOutput`]
    /// the caller reads back.
    ///
    /// [`MemoryOutput`]: crate::output::MemoryOutput
    #[must_use]
    pub fn shared_output(mut self, output: Arc<dyn Output>) -> Self {
        self.output = output;
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        Logger::with_output(self.level, self.verbose, self.output)
    }
}
