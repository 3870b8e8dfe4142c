//! The shared logger's initial state, checked in a process nothing else touches.

use levelog::{Severity, global};

#[test]
fn shared_logger_starts_at_info_and_quiet() {
    assert_eq!(levelog::level(), Severity::Info);
    assert!(!global::shared().is_verbose());
}
