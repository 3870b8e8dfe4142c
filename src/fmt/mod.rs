//! Message body rendering: operand joining, printf templates and line framing.

mod print;
mod printf;
mod value;

pub use print::{sprint, sprintln};
pub use printf::sprintf;
pub use value::Value;

use chrono::{DateTime, Local};
use std::panic::Location;
use std::path::Path;

/// `2009/01/23 01:23:23.123123`
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.6f";

/// Builds one complete output line.
///
/// The newline is only appended when `body` does not already end with one, so the `*ln`
/// variants never produce an empty line.
#[must_use]
pub fn frame_line(
    time: &DateTime<Local>,
    location: Option<&Location<'_>>,
    prefix: &str,
    body: &str,
) -> String {
    let mut line = String::with_capacity(40 + prefix.len() + body.len());
    line.push_str(&time.format(TIMESTAMP_FORMAT).to_string());
    line.push(' ');
    if let Some(location) = location {
        line.push_str(&short_file(location.file()));
        line.push(':');
        line.push_str(&location.line().to_string());
        line.push_str(": ");
    }
    line.push_str(prefix);
    line.push_str(body);
    if !line.ends_with('\n') {
        line.push('\n');
    }
    line
}

/// Final path component, so lines stay short regardless of workspace layout.
fn short_file(file: &str) -> String {
    Path::new(file)
        .file_name()
        .map_or_else(|| file.to_string(), |name| name.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2009, 1, 23, 1, 23, 23)
            .single()
            .expect("unambiguous local time")
    }

    #[test]
    fn frames_plain_line() {
        let line = frame_line(&fixed_time(), None, "INFO> ", "Ciao");
        assert_eq!(line, "2009/01/23 01:23:23.000000 INFO> Ciao\n");
    }

    #[test]
    fn does_not_double_newline() {
        let line = frame_line(&fixed_time(), None, "WARN> ", "Ciao\n");
        assert_eq!(line, "2009/01/23 01:23:23.000000 WARN> Ciao\n");
    }

    #[test]
    fn includes_short_location() {
        let location = Location::caller();
        let line = frame_line(&fixed_time(), Some(location), "ERROR> ", "boom");
        let expected = format!(
            "2009/01/23 01:23:23.000000 mod.rs:{}: ERROR> boom\n",
            location.line()
        );
        assert_eq!(line, expected);
    }

    #[test]
    fn short_file_strips_directories() {
        assert_eq!(short_file("src/logger/mod.rs"), "mod.rs");
        assert_eq!(short_file("main.rs"), "main.rs");
    }
}
