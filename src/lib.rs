//! `levelog` - leveled, timestamped diagnostic lines for embedding in other programs.
//!
//! Three severities (`Info < Warning < Error`), three formatting styles per severity
//! (operand joining, printf templates, space-joined lines), an optional `file:line`
//! annotation, and a `fatal` family that exits the process after writing.
//!
//! Every line looks like
//!
//! ```text
//! 2009/01/23 01:23:23.123123 [file:line: ]INFO> message
//! ```
//!
//! # Example
//!
//! ```
//! use levelog::{Logger, Severity, args};
//! use levelog::output::MemoryOutput;
//! use std::sync::Arc;
//!
//! let memory = Arc::new(MemoryOutput::new());
//! let logger = Logger::builder()
//!     .level(Severity::Warning)
//!     .shared_output(memory.clone())
//!     .build();
//!
//! logger.info(args!["filtered out"]);
//! logger.warningf("retry %d of %d", args![2, 5]);
//! logger.error(args!["Ciao", 7]);
//!
//! let lines = memory.lines();
//! assert_eq!(lines.len(), 2);
//! assert!(lines[0].ends_with("WARN> retry 2 of 5"));
//! assert!(lines[1].ends_with("ERROR> Ciao7"));
//! ```
//!
//! The process-wide logger is reached through free functions and macros:
//!
//! ```no_run
//! levelog::set_level(levelog::Severity::Info);
//! levelog::info!("listening on port ", 8080);
//! levelog::errorf!("fmt: %s %v", "ciao", 7);
//! ```
//!
//! # Features
//!
//! - `cli` (default): builds the `levelog` command-line binary

pub mod config;
mod error;
pub mod fmt;
pub mod global;
pub mod level;
pub mod logger;
mod macros;
pub mod output;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use error::Error;
pub use fmt::Value;
pub use global::{
    error, errorf, errorln, fatal, fatalf, fatalln, info, infof, infoln, level, set_level,
    set_writer, verbose, warning, warningf, warningln, writer,
};
pub use level::{ParseSeverityError, Severity};
pub use logger::{FATAL_EXIT_CODE, Logger, LoggerBuilder};
pub use output::{FileOutput, MemoryOutput, Output, TerminalOutput, WriterOutput};
