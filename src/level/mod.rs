//! Severities that decide whether a message reaches the destination.

use std::fmt;
use std::str::FromStr;

/// Ordered so a message's severity can be compared against the configured minimum.
///
/// The discriminants double as indices into the prefix table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Severity {
    /// Normal operational milestones.
    #[default]
    Info = 0,
    /// Anomalies worth a look that do not stop the program.
    Warning = 1,
    /// Failures. Never filtered out by the minimum level.
    Error = 2,
}

const PREFIXES: [&str; 3] = ["INFO> ", "WARN> ", "ERROR> "];

impl Severity {
    /// Text written between the header and the message body.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        PREFIXES[self as usize]
    }

    /// Lowercase name, as used in config files and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Info, Self::Warning, Self::Error]
    }

    /// Inverse of `self as u8`. Out-of-range values saturate to `Error`.
    #[must_use]
    pub(crate) const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Info,
            1 => Self::Warning,
            _ => Self::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` for names that match no severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(String);

impl ParseSeverityError {
    /// The rejected input.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity: '{}'", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warning),
            "error" | "err" => Ok(Self::Error),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}
