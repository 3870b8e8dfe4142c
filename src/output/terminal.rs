//! Standard stream output, the default destination.

use super::Output;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// Writes to the process's standard output or standard error.
///
/// Each line goes out under the stream lock in a single `write_all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalOutput {
    stream: Stream,
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::stdout()
    }
}

impl TerminalOutput {
    #[must_use]
    pub const fn stdout() -> Self {
        Self {
            stream: Stream::Stdout,
        }
    }

    #[must_use]
    pub const fn stderr() -> Self {
        Self {
            stream: Stream::Stderr,
        }
    }

    #[must_use]
    pub const fn is_stderr(&self) -> bool {
        matches!(self.stream, Stream::Stderr)
    }
}

impl Output for TerminalOutput {
    fn write(&self, line: &str) -> Result<(), crate::Error> {
        match self.stream {
            Stream::Stdout => io::stdout().lock().write_all(line.as_bytes())?,
            Stream::Stderr => io::stderr().lock().write_all(line.as_bytes())?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        match self.stream {
            Stream::Stdout => io::stdout().flush()?,
            Stream::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }
}
