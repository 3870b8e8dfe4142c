//! Tests for severity ordering, names and prefixes.

use levelog::Severity;

#[test]
fn severity_ordering() {
    assert!(Severity::Info < Severity::Warning);
    assert!(Severity::Warning < Severity::Error);
}

#[test]
fn severity_display() {
    assert_eq!(Severity::Info.to_string(), "info");
    assert_eq!(Severity::Warning.to_string(), "warning");
    assert_eq!(Severity::Error.to_string(), "error");
}

#[test]
fn severity_prefix() {
    assert_eq!(Severity::Info.prefix(), "INFO> ");
    assert_eq!(Severity::Warning.prefix(), "WARN> ");
    assert_eq!(Severity::Error.prefix(), "ERROR> ");
}

#[test]
fn severity_from_str() {
    assert_eq!("info".parse::<Severity>().unwrap(), Severity::Info);
    assert_eq!("WARN".parse::<Severity>().unwrap(), Severity::Warning);
    assert_eq!("Warning".parse::<Severity>().unwrap(), Severity::Warning);
    assert_eq!("err".parse::<Severity>().unwrap(), Severity::Error);
}

#[test]
fn severity_from_str_invalid() {
    let err = "debug".parse::<Severity>().unwrap_err();
    assert_eq!(err.name(), "debug");
    assert_eq!(err.to_string(), "unknown severity: 'debug'");
}

#[test]
fn severity_default() {
    assert_eq!(Severity::default(), Severity::Info);
}

#[test]
fn all_is_ascending() {
    let all = Severity::all();
    assert!(all.windows(2).all(|pair| pair[0] < pair[1]));
}
