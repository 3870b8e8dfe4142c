//! The process-wide logger and the free functions that forward to it.
//!
//! The shared instance is created on first use, exactly once, and lives until the
//! process exits. It starts at `Info`, writes to standard output and is not verbose.
//! Code that wants isolation (tests in particular) can build its own [`Logger`] instead;
//! every function here is a one-line forward to the method of the same name.

use crate::config::Config;
use crate::fmt::Value;
use crate::level::Severity;
use crate::logger::Logger;
use crate::output::Output;
use std::sync::{Arc, OnceLock};

static SHARED: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger.
pub fn shared() -> &'static Logger {
    SHARED.get_or_init(Logger::default)
}

/// Applies a loaded config to the shared logger.
///
/// # Errors
/// See [`Logger::apply_config`]. The shared logger is left untouched on error.
pub fn init_with_config(config: &Config) -> Result<(), crate::Error> {
    shared().apply_config(config)
}

/// Loads the default config file and applies it to the shared logger.
///
/// # Errors
/// See [`Config::load`] and [`Logger::apply_config`].
pub fn init() -> Result<(), crate::Error> {
    init_with_config(&Config::load()?)
}

#[track_caller]
pub fn info(args: &[Value]) {
    shared().info(args);
}

#[track_caller]
pub fn infof(format: &str, args: &[Value]) {
    shared().infof(format, args);
}

#[track_caller]
pub fn infoln(args: &[Value]) {
    shared().infoln(args);
}

#[track_caller]
pub fn warning(args: &[Value]) {
    shared().warning(args);
}

#[track_caller]
pub fn warningf(format: &str, args: &[Value]) {
    shared().warningf(format, args);
}

#[track_caller]
pub fn warningln(args: &[Value]) {
    shared().warningln(args);
}

#[track_caller]
pub fn error(args: &[Value]) {
    shared().error(args);
}

#[track_caller]
pub fn errorf(format: &str, args: &[Value]) {
    shared().errorf(format, args);
}

#[track_caller]
pub fn errorln(args: &[Value]) {
    shared().errorln(args);
}

#[track_caller]
pub fn fatal(args: &[Value]) -> ! {
    shared().fatal(args)
}

#[track_caller]
pub fn fatalf(format: &str, args: &[Value]) -> ! {
    shared().fatalf(format, args)
}

#[track_caller]
pub fn fatalln(args: &[Value]) -> ! {
    shared().fatalln(args)
}

pub fn verbose(enabled: bool) {
    shared().verbose(enabled);
}

pub fn set_level(level: Severity) {
    shared().set_level(level);
}

#[must_use]
pub fn level() -> Severity {
    shared().level()
}

pub fn set_writer(output: Arc<dyn Output>) {
    shared().set_writer(output);
}

#[must_use]
pub fn writer() -> Arc<dyn Output> {
    shared().writer()
}
