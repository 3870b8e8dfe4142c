//! Tests for the output destinations.

use levelog::output::{FileOutput, MemoryOutput, Output, TerminalOutput, WriterOutput};
use levelog::{Error, Logger, Severity, args};
use std::fs;
use tempfile::TempDir;

#[test]
fn memory_output_collects_lines() {
    let memory = MemoryOutput::new();
    assert!(memory.is_empty());
    memory.write("one\n").unwrap();
    memory.write("two\n").unwrap();
    assert_eq!(memory.contents(), "one\ntwo\n");
    assert_eq!(memory.lines(), vec!["one", "two"]);
    memory.clear();
    assert!(memory.is_empty());
}

#[test]
fn writer_output_wraps_any_writer() {
    let output = WriterOutput::new(Vec::new());
    output.write("hello\n").unwrap();
    output.flush().unwrap();
    assert_eq!(output.into_inner(), b"hello\n");
}

#[test]
fn file_output_appends() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("app.log");
    let path_str = path.to_string_lossy().to_string();

    let output = FileOutput::open(&path_str).unwrap();
    output.write("first\n").unwrap();
    drop(output);

    let output = FileOutput::open(&path_str).unwrap();
    output.write("second\n").unwrap();
    output.flush().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    assert_eq!(output.path(), path.as_path());
}

#[test]
fn file_output_creates_parent_directories() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("deeper").join("app.log");

    let output = FileOutput::open(path.to_string_lossy()).unwrap();
    output.write("line\n").unwrap();

    assert!(path.exists());
}

#[test]
fn file_output_rejects_empty_path() {
    let err = FileOutput::open("  ").unwrap_err();
    assert!(matches!(err, Error::InvalidOutput(_)));
}

#[test]
fn logger_writes_framed_lines_to_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("app.log");

    let logger = Logger::builder()
        .level(Severity::Warning)
        .output(FileOutput::open(path.to_string_lossy()).unwrap())
        .build();
    logger.info(args!["filtered"]);
    logger.warningf("disk at %d%%", args![91]);
    logger.errorln(args!["failed", 3, "times"]);

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("WARN> disk at 91%"));
    assert!(lines[1].ends_with("ERROR> failed 3 times"));
}

#[test]
fn builder_file_step_opens_the_destination() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("builder.log");

    let logger = Logger::builder()
        .file(path.to_string_lossy())
        .unwrap()
        .build();
    logger.errorf("code %d", args![7]);

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.ends_with("ERROR> code 7\n"));
}

#[test]
fn builder_file_step_rejects_empty_path() {
    let err = Logger::builder().file("").unwrap_err();
    assert!(matches!(err, Error::InvalidOutput(_)));
}

#[test]
fn terminal_output_streams() {
    assert!(!TerminalOutput::stdout().is_stderr());
    assert!(TerminalOutput::stderr().is_stderr());
    assert_eq!(TerminalOutput::default(), TerminalOutput::stdout());
}
