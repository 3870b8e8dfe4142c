//! Tests for the `levelog` binary.

#![cfg(feature = "cli")]

use regex::Regex;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const TS: &str = r"^[0-9]{4}/[0-9]{2}/[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{6} ";

fn run(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_levelog"))
        .arg("--config")
        .arg(config)
        .args(args)
        .output()
        .expect("failed to run levelog")
}

fn no_config(tmp: &TempDir) -> std::path::PathBuf {
    tmp.path().join("absent.toml")
}

fn assert_line(text: &[u8], tail: &str) {
    let text = String::from_utf8_lossy(text);
    let line = text.strip_suffix('\n').expect("newline-terminated");
    let re = Regex::new(&format!("{TS}{tail}$")).unwrap();
    assert!(re.is_match(line), "pattern {tail:?}, got {line:?}");
}

#[test]
fn info_writes_to_stdout() {
    let tmp = TempDir::new().unwrap();
    let output = run(&no_config(&tmp), &["info", "Ciao", "mondo"]);
    assert!(output.status.success());
    assert_line(&output.stdout, "INFO> Ciao mondo");
    assert!(output.stderr.is_empty());
}

#[test]
fn level_flag_filters() {
    let tmp = TempDir::new().unwrap();
    let output = run(&no_config(&tmp), &["--level", "error", "warning", "Ciao"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn error_ignores_level() {
    let tmp = TempDir::new().unwrap();
    let output = run(&no_config(&tmp), &["--level", "error", "error", "Ciao", "7"]);
    assert!(output.status.success());
    assert_line(&output.stdout, "ERROR> Ciao 7");
}

#[test]
fn fatal_exits_with_status_one() {
    let tmp = TempDir::new().unwrap();
    let output = run(&no_config(&tmp), &["fatal", "Ciao"]);
    assert_eq!(output.status.code(), Some(1));
    assert_line(&output.stdout, "ERROR> Ciao");
}

#[test]
fn stderr_flag_redirects() {
    let tmp = TempDir::new().unwrap();
    let output = run(&no_config(&tmp), &["--stderr", "warn", "careful"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_line(&output.stderr, "WARN> careful");
}

#[test]
fn verbose_flag_adds_location() {
    let tmp = TempDir::new().unwrap();
    let output = run(&no_config(&tmp), &["--verbose", "info", "here"]);
    assert!(output.status.success());
    assert_line(&output.stdout, r"[A-Za-z0-9_.]+\.rs:[0-9]+: INFO> here");
}

#[test]
fn config_file_sets_level_and_destination() {
    let tmp = TempDir::new().unwrap();
    let log_path = tmp.path().join("out.log");
    let config_path = tmp.path().join("config.toml");
    fs::write(
        &config_path,
        format!(
            "[general]\nlevel = \"warning\"\n\n[output]\ntarget = \"file\"\npath = {:?}\n",
            log_path.to_string_lossy()
        ),
    )
    .unwrap();

    let filtered = run(&config_path, &["info", "dropped"]);
    assert!(filtered.status.success());
    let kept = run(&config_path, &["warning", "kept"]);
    assert!(kept.status.success());
    assert!(kept.stdout.is_empty());

    assert_line(fs::read_to_string(&log_path).unwrap().as_bytes(), "WARN> kept");
}

#[test]
fn invalid_config_exits_with_status_two() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("config.toml");
    fs::write(&config_path, "[general]\nlevel = \"loud\"\n").unwrap();

    let output = run(&config_path, &["info", "Ciao"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid level: loud"));
}

#[test]
fn unknown_severity_is_a_usage_error() {
    let tmp = TempDir::new().unwrap();
    let output = run(&no_config(&tmp), &["shout", "Ciao"]);
    assert!(!output.status.success());
}
