//! Tests for the fatal family: the line is written, then the process exits with status 1.
//!
//! Each case re-runs this test binary with `LEVELOG_FATAL_CASE` set, so only the child
//! process dies.

use levelog::{FATAL_EXIT_CODE, Severity, args};
use regex::Regex;
use std::env;
use std::process::Command;

const TS: &str = r"^[0-9]{4}/[0-9]{2}/[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{6} ";
const CASE_VAR: &str = "LEVELOG_FATAL_CASE";

struct FatalCase {
    name: &'static str,
    run: fn(),
    want: &'static str,
}

static CASES: &[FatalCase] = &[
    FatalCase { name: "Fatal normal", run: || levelog::fatal!("Ciao"), want: "Ciao" },
    FatalCase { name: "Fatal double string", run: || levelog::fatal!("Ciao", "ciao"), want: "Ciaociao" },
    FatalCase { name: "Fatal string number", run: || levelog::fatal!("Ciao", 7), want: "Ciao7" },
    FatalCase { name: "Fatal number string", run: || levelog::fatal!(7, "Ciao"), want: "7Ciao" },
    FatalCase { name: "Fatal double number", run: || levelog::fatal!(3, 7), want: "3 7" },
    FatalCase { name: "Fatalf normal", run: || levelog::fatalf("Ciao", &[]), want: "Ciao" },
    FatalCase { name: "Fatalf format", run: || levelog::fatalf!("fmt: %s %v", "ciao", 7), want: "fmt: ciao 7" },
    FatalCase { name: "Fatalln normal", run: || levelog::fatalln!("Ciao"), want: "Ciao" },
    FatalCase { name: "Fatalln double string", run: || levelog::fatalln!("Ciao", "ciao"), want: "Ciao ciao" },
    FatalCase { name: "Fatalln string number", run: || levelog::fatalln!("Ciao", 7), want: "Ciao 7" },
    FatalCase { name: "Fatalln number string", run: || levelog::fatalln(args![7, "Ciao"]), want: "7 Ciao" },
    FatalCase { name: "Fatalln double number", run: || levelog::fatalln!(3, 7), want: "3 7" },
    FatalCase {
        name: "Fatal on a private logger",
        run: || levelog::Logger::new(Severity::Error).fatal(args!["Ciao"]),
        want: "Ciao",
    },
];

/// Body of the child process. A no-op when run by the normal test harness.
#[test]
fn fatal_child() {
    let Ok(index) = env::var(CASE_VAR) else {
        return;
    };
    let index: usize = index.parse().unwrap();
    levelog::set_level(Severity::Error);
    (CASES[index].run)();
    unreachable!("fatal call returned");
}

#[test]
fn fatals() {
    let exe = env::current_exe().unwrap();

    for (index, case) in CASES.iter().enumerate() {
        let output = Command::new(&exe)
            .args(["--exact", "fatal_child", "--nocapture", "--test-threads=1", "--quiet"])
            .env(CASE_VAR, index.to_string())
            .output()
            .unwrap();

        assert_eq!(
            output.status.code(),
            Some(FATAL_EXIT_CODE),
            "{}: wrong exit status",
            case.name
        );

        // The harness prints its own banner to stdout before the test body runs.
        let stdout = String::from_utf8_lossy(&output.stdout);
        let line = stdout
            .lines()
            .find(|line| line.contains("ERROR> "))
            .unwrap_or_else(|| panic!("{}: no log line in {stdout:?}", case.name));

        let pattern = format!("{TS}ERROR> {}$", regex::escape(case.want));
        let re = Regex::new(&pattern).unwrap();
        assert!(re.is_match(line), "{}: pattern {pattern:?}, got {line:?}", case.name);
    }
}
