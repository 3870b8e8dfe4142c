//! Command-line front end: writes one line through the process-wide logger.
//!
//! ```text
//! levelog [--config PATH] [--level LEVEL] [--verbose] [--stderr] <SEVERITY> [MESSAGE]...
//! ```
//!
//! Message words are joined with single spaces. `fatal` exits with status 1 after
//! writing; config problems exit with status 2 before anything is logged.

use crate::config::Config;
use crate::fmt::Value;
use crate::global;
use crate::level::Severity;
use crate::output::TerminalOutput;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

/// Exit status for unreadable or invalid configuration.
pub const CONFIG_ERROR: u8 = 2;

/// Minimum severity accepted by `--level`.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LevelArg {
    Info,
    #[value(alias = "warn")]
    Warning,
    #[value(alias = "err")]
    Error,
}

impl From<LevelArg> for Severity {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Info => Self::Info,
            LevelArg::Warning => Self::Warning,
            LevelArg::Error => Self::Error,
        }
    }
}

/// Which logging family to call.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Kind {
    Info,
    #[value(alias = "warn")]
    Warning,
    #[value(alias = "err")]
    Error,
    Fatal,
}

/// levelog - write a leveled, timestamped log line.
#[derive(Debug, Parser)]
#[command(name = "levelog", version, about = "Write a leveled, timestamped log line")]
pub struct Cli {
    /// Config file (default: <config dir>/levelog/config.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Minimum severity, overrides the config
    #[arg(short, long, value_enum)]
    pub level: Option<LevelArg>,

    /// Prefix the line with file:line
    #[arg(short, long)]
    pub verbose: bool,

    /// Write to standard error instead of the configured output
    #[arg(long)]
    pub stderr: bool,

    /// Severity of the message
    #[arg(value_enum)]
    pub severity: Kind,

    /// Message words
    pub message: Vec<String>,
}

/// Configures the shared logger from the config file and flags, then logs the message.
pub fn run(cli: &Cli) -> ExitCode {
    let config = match cli
        .config
        .as_deref()
        .map_or_else(Config::load, Config::load_from)
    {
        Ok(config) => config,
        Err(e) => {
            eprintln!("levelog: cannot load config: {e}");
            return ExitCode::from(CONFIG_ERROR);
        }
    };
    if let Err(e) = global::init_with_config(&config) {
        eprintln!("levelog: invalid config: {e}");
        return ExitCode::from(CONFIG_ERROR);
    }

    if let Some(level) = cli.level {
        global::set_level(level.into());
    }
    if cli.verbose {
        global::verbose(true);
    }
    if cli.stderr {
        global::set_writer(Arc::new(TerminalOutput::stderr()));
    }

    let words: Vec<Value> = cli.message.iter().map(Value::from).collect();
    match cli.severity {
        Kind::Info => global::infoln(&words),
        Kind::Warning => global::warningln(&words),
        Kind::Error => global::errorln(&words),
        Kind::Fatal => global::fatalln(&words),
    }
    ExitCode::SUCCESS
}
