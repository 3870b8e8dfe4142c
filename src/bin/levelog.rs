//! `levelog` binary: one log line per invocation, for shell scripts.
//!
//! Usage:
//!   levelog info "service started"
//!   levelog --level warning info "dropped"      (prints nothing)
//!   levelog --stderr error "disk full"
//!   levelog fatal "cannot continue"             (exit status 1)

use clap::Parser;
use levelog::cli::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    run(&Cli::parse())
}
