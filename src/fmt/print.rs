//! Operand joining for the plain and `*ln` logging variants.

use super::Value;
use std::fmt::Write;

/// Joins operands, adding a space only between two adjacent non-string operands.
#[must_use]
pub fn sprint(args: &[Value]) -> String {
    let mut out = String::new();
    let mut prev_is_str = true;
    for (i, arg) in args.iter().enumerate() {
        let is_str = arg.is_str();
        if i > 0 && !is_str && !prev_is_str {
            out.push(' ');
        }
        let _ = write!(out, "{arg}");
        prev_is_str = is_str;
    }
    out
}

/// Joins operands with a single space between every pair and appends a newline.
#[must_use]
pub fn sprintln(args: &[Value]) -> String {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{arg}");
    }
    out.push('\n');
    out
}
