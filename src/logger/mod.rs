//! The leveled logger: filters by severity, frames the line and hands it to the output.
//!
//! Every variant funnels into [`Logger::emit`], which receives the caller's
//! [`Location`] through `#[track_caller]`. Wrappers that are themselves
//! `#[track_caller]` (the process-wide functions and macros) therefore report their own
//! caller without any frame counting.

mod builder;
mod from_config;

pub use builder::LoggerBuilder;

use crate::fmt::{self, Value};
use crate::level::Severity;
use crate::output::{Output, TerminalOutput};
use chrono::Local;
use std::panic::Location;
use std::process;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Exit status of the `fatal*` family.
pub const FATAL_EXIT_CODE: i32 = 1;

/// A minimum severity, a destination and a verbosity flag.
///
/// All three can be changed through `&self` at any time and apply to the next call.
/// Changes are not ordered against logging calls on other threads.
pub struct Logger {
    level: AtomicU8,
    verbose: AtomicBool,
    output: RwLock<Arc<dyn Output>>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Severity::Info)
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("verbose", &self.is_verbose())
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Logs `level` and above to standard output.
    #[must_use]
    pub fn new(level: Severity) -> Self {
        Self::with_output(level, false, Arc::new(TerminalOutput::stdout()))
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub(crate) fn with_output(level: Severity, verbose: bool, output: Arc<dyn Output>) -> Self {
        Self {
            level: AtomicU8::new(level as u8),
            verbose: AtomicBool::new(verbose),
            output: RwLock::new(output),
        }
    }

    /// Info message, operands joined as by [`fmt::sprint`].
    #[track_caller]
    pub fn info(&self, args: &[Value]) {
        if self.enabled(Severity::Info) {
            self.emit(Severity::Info, Location::caller(), &fmt::sprint(args));
        }
    }

    /// Info message, printf-style template.
    #[track_caller]
    pub fn infof(&self, format: &str, args: &[Value]) {
        if self.enabled(Severity::Info) {
            self.emit(Severity::Info, Location::caller(), &fmt::sprintf(format, args));
        }
    }

    /// Info message, operands joined as by [`fmt::sprintln`].
    #[track_caller]
    pub fn infoln(&self, args: &[Value]) {
        if self.enabled(Severity::Info) {
            self.emit(Severity::Info, Location::caller(), &fmt::sprintln(args));
        }
    }

    #[track_caller]
    pub fn warning(&self, args: &[Value]) {
        if self.enabled(Severity::Warning) {
            self.emit(Severity::Warning, Location::caller(), &fmt::sprint(args));
        }
    }

    #[track_caller]
    pub fn warningf(&self, format: &str, args: &[Value]) {
        if self.enabled(Severity::Warning) {
            self.emit(
                Severity::Warning,
                Location::caller(),
                &fmt::sprintf(format, args),
            );
        }
    }

    #[track_caller]
    pub fn warningln(&self, args: &[Value]) {
        if self.enabled(Severity::Warning) {
            self.emit(Severity::Warning, Location::caller(), &fmt::sprintln(args));
        }
    }

    /// Error message. Emitted whatever the minimum level is.
    #[track_caller]
    pub fn error(&self, args: &[Value]) {
        self.emit(Severity::Error, Location::caller(), &fmt::sprint(args));
    }

    /// Like [`Logger::error`], with a printf-style template.
    #[track_caller]
    pub fn errorf(&self, format: &str, args: &[Value]) {
        self.emit(Severity::Error, Location::caller(), &fmt::sprintf(format, args));
    }

    /// Like [`Logger::error`], operands space-separated.
    #[track_caller]
    pub fn errorln(&self, args: &[Value]) {
        self.emit(Severity::Error, Location::caller(), &fmt::sprintln(args));
    }

    /// Logs at `Error` severity, then exits the process with status 1.
    #[track_caller]
    pub fn fatal(&self, args: &[Value]) -> ! {
        self.emit(Severity::Error, Location::caller(), &fmt::sprint(args));
        self.exit()
    }

    #[track_caller]
    pub fn fatalf(&self, format: &str, args: &[Value]) -> ! {
        self.emit(Severity::Error, Location::caller(), &fmt::sprintf(format, args));
        self.exit()
    }

    #[track_caller]
    pub fn fatalln(&self, args: &[Value]) -> ! {
        self.emit(Severity::Error, Location::caller(), &fmt::sprintln(args));
        self.exit()
    }

    /// Adds `file:line: ` in front of the severity prefix while enabled.
    pub fn verbose(&self, enabled: bool) {
        self.verbose.store(enabled, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.verbose.load(Ordering::Relaxed)
    }

    /// Minimum severity for the info and warning families. Errors ignore it.
    pub fn set_level(&self, level: Severity) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    #[must_use]
    pub fn level(&self) -> Severity {
        Severity::from_u8(self.level.load(Ordering::Relaxed))
    }

    /// Replaces the destination. Lines already written are unaffected.
    pub fn set_writer(&self, output: Arc<dyn Output>) {
        *self.output.write().unwrap_or_else(PoisonError::into_inner) = output;
    }

    /// The current destination, the same `Arc` given to [`Logger::set_writer`].
    #[must_use]
    pub fn writer(&self) -> Arc<dyn Output> {
        Arc::clone(&self.output.read().unwrap_or_else(PoisonError::into_inner))
    }

    fn enabled(&self, severity: Severity) -> bool {
        severity >= self.level()
    }

    /// Frames and writes one line. Write failures are dropped.
    fn emit(&self, severity: Severity, location: &Location<'_>, body: &str) {
        let location = self.is_verbose().then_some(location);
        let line = fmt::frame_line(&Local::now(), location, severity.prefix(), body);
        let _ = self.writer().write(&line);
    }

    fn exit(&self) -> ! {
        let _ = self.writer().flush();
        process::exit(FATAL_EXIT_CODE)
    }
}
