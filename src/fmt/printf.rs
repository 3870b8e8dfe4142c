//! printf-style templating for the `*f` logging variants.
//!
//! A directive is `%[flags][width][.precision]verb`. Supported flags are `-`, `+`, space,
//! `0` and `#`. Width and precision are decimal numbers or `*`, which takes the count
//! from the next integer operand (a negative `*` width left-justifies). Counts are
//! limited to 1 000 000. Problems are reported inline rather than as errors, so a bad
//! template still produces a readable line:
//!
//! | problem                          | output                       |
//! |----------------------------------|------------------------------|
//! | operand missing                  | `%!d(MISSING)`               |
//! | verb does not fit operand        | `%!d(string=abc)`            |
//! | template ends after `%`          | `%!(NOVERB)`                 |
//! | operands left over               | `%!(EXTRA int=7, bool=true)` |
//! | width too large, `*` not an int  | `%!(BADWIDTH)`               |
//! | precision too large or negative  | `%!(BADPREC)`                |

use super::Value;
use std::fmt::Write;
use std::iter::Peekable;
use std::str::Chars;

/// Largest accepted width or precision.
const MAX_COUNT: i64 = 1_000_000;

#[derive(Debug, Default, Clone, Copy)]
struct Directive {
    minus: bool,
    plus: bool,
    space: bool,
    zero: bool,
    sharp: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

/// Substitutes `args` into `format`.
#[must_use]
pub fn sprintf(format: &str, args: &[Value]) -> String {
    let mut out = String::with_capacity(format.len() + 16);
    let mut next = 0;
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let mut directive = Directive::default();
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => directive.minus = true,
                '+' => directive.plus = true,
                ' ' => directive.space = true,
                '0' => directive.zero = true,
                '#' => directive.sharp = true,
                _ => break,
            }
            chars.next();
        }
        match parse_count(&mut chars, args, &mut next) {
            Count::Absent => {}
            Count::Given(width) => {
                if width < 0 {
                    directive.minus = true;
                }
                directive.width = usize::try_from(width.unsigned_abs()).ok();
            }
            Count::Bad => out.push_str("%!(BADWIDTH)"),
        }
        if chars.peek() == Some(&'.') {
            chars.next();
            match parse_count(&mut chars, args, &mut next) {
                Count::Absent => directive.precision = Some(0),
                Count::Given(precision) if precision >= 0 => {
                    directive.precision = usize::try_from(precision).ok();
                }
                Count::Given(_) | Count::Bad => out.push_str("%!(BADPREC)"),
            }
        }
        // Left-justification wins over zero padding.
        if directive.minus {
            directive.zero = false;
        }

        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };
        if verb == '%' {
            out.push('%');
            continue;
        }
        let Some(arg) = args.get(next) else {
            let _ = write!(out, "%!{verb}(MISSING)");
            continue;
        };
        next += 1;
        format_arg(&mut out, verb, directive, arg);
    }

    if next < args.len() {
        out.push_str("%!(EXTRA ");
        for (i, arg) in args[next..].iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{}={arg}", arg.type_name());
        }
        out.push(')');
    }

    out
}

/// A width or precision as written in the template.
enum Count {
    Absent,
    Given(i64),
    Bad,
}

/// Reads decimal digits or a `*`. A `*` consumes the next operand if there is one.
fn parse_count(chars: &mut Peekable<Chars<'_>>, args: &[Value], next: &mut usize) -> Count {
    if chars.peek() == Some(&'*') {
        chars.next();
        let Some(arg) = args.get(*next) else {
            return Count::Bad;
        };
        *next += 1;
        let count = match *arg {
            Value::Int(n) => Some(n),
            Value::Uint(n) => i64::try_from(n).ok(),
            _ => None,
        };
        return match count {
            Some(n) if (-MAX_COUNT..=MAX_COUNT).contains(&n) => Count::Given(n),
            _ => Count::Bad,
        };
    }

    let mut number: Option<i64> = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        let n = number.unwrap_or(0);
        // once past the limit the value only has to stay past it
        number = Some(if n > MAX_COUNT { n } else { n * 10 + i64::from(digit) });
    }
    match number {
        None => Count::Absent,
        Some(n) if n > MAX_COUNT => Count::Bad,
        Some(n) => Count::Given(n),
    }
}

fn format_arg(out: &mut String, verb: char, d: Directive, arg: &Value) {
    match (verb, arg) {
        ('v', _) => format_default(out, d, arg),
        ('T', _) => pad_text(out, arg.type_name(), d),
        ('s', Value::Str(s) | Value::Other { text: s, .. }) => {
            pad_text(out, &truncate(s, d.precision), d);
        }
        ('s', Value::Char(c)) => pad_text(out, &c.to_string(), d),
        ('q', Value::Str(s)) if d.sharp && can_backquote(s) => {
            pad_text(out, &format!("`{s}`"), d);
        }
        ('q', Value::Str(s)) => pad_text(out, &quote(s, '"'), d),
        ('q', Value::Char(c)) => pad_text(out, &quote(&c.to_string(), '\''), d),
        ('x' | 'X', Value::Str(s)) => pad_text(out, &hex_bytes(s, verb == 'X'), d),
        ('t', Value::Bool(b)) => pad_text(out, if *b { "true" } else { "false" }, d),
        ('d' | 'b' | 'o' | 'x' | 'X' | 'c', Value::Int(n)) => {
            format_integer(out, verb, d, *n < 0, n.unsigned_abs());
        }
        ('d' | 'b' | 'o' | 'x' | 'X' | 'c', Value::Uint(n)) => {
            format_integer(out, verb, d, false, *n);
        }
        ('d' | 'b' | 'o' | 'x' | 'X' | 'c', Value::Char(c)) => {
            format_integer(out, verb, d, false, u64::from(u32::from(*c)));
        }
        ('f' | 'F' | 'e' | 'E' | 'g' | 'G', Value::Float(x)) => format_float(out, verb, d, *x),
        _ => {
            let _ = write!(out, "%!{verb}({}={arg})", arg.type_name());
        }
    }
}

/// `%v`: each kind's natural verb. `%#v` quotes strings and chars.
fn format_default(out: &mut String, d: Directive, arg: &Value) {
    match arg {
        Value::Str(s) if d.sharp => pad_text(out, &quote(s, '"'), d),
        Value::Char(c) if d.sharp => pad_text(out, &quote(&c.to_string(), '\''), d),
        Value::Str(_) | Value::Other { .. } => format_arg(out, 's', d, arg),
        Value::Char(c) => pad_text(out, &c.to_string(), d),
        Value::Int(_) | Value::Uint(_) => format_arg(out, 'd', d, arg),
        Value::Float(_) => format_arg(out, 'g', d, arg),
        Value::Bool(_) => format_arg(out, 't', d, arg),
    }
}

fn format_integer(out: &mut String, verb: char, d: Directive, negative: bool, magnitude: u64) {
    let (prefix, mut digits) = match verb {
        'b' => ("0b", format!("{magnitude:b}")),
        'o' => ("0", format!("{magnitude:o}")),
        'x' => ("0x", format!("{magnitude:x}")),
        'X' => ("0X", format!("{magnitude:X}")),
        'c' => {
            let c = u32::try_from(magnitude)
                .ok()
                .filter(|_| !negative)
                .and_then(char::from_u32)
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            pad_text(out, &c.to_string(), d);
            return;
        }
        _ => ("", magnitude.to_string()),
    };
    let prefix = if d.sharp { prefix } else { "" };

    let mut d = d;
    if let Some(min_digits) = d.precision {
        if digits.len() < min_digits {
            digits.insert_str(0, &"0".repeat(min_digits - digits.len()));
        }
        d.zero = false;
    }
    pad_number(out, negative, prefix, &digits, d);
}

fn format_float(out: &mut String, verb: char, d: Directive, x: f64) {
    if x.is_nan() {
        pad_text(out, "NaN", d);
        return;
    }
    let negative = x.is_sign_negative();
    if x.is_infinite() {
        let mut d = d;
        d.zero = false;
        if !negative {
            d.plus = true;
        }
        pad_number(out, negative, "", "Inf", d);
        return;
    }

    let magnitude = x.abs();
    let digits = match verb {
        'e' | 'E' => scientific(magnitude, d.precision.unwrap_or(6), verb == 'E'),
        'g' | 'G' => general(magnitude, d.precision, verb == 'G'),
        _ => format!("{magnitude:.prec$}", prec = d.precision.unwrap_or(6)),
    };
    pad_number(out, negative, "", &digits, d);
}

fn scientific(magnitude: f64, precision: usize, upper: bool) -> String {
    signed_exponent(&format!("{magnitude:.precision$e}"), upper)
}

/// Renders a float the way `%v` does. Print-style joining uses the same text.
pub(super) fn float_text(x: f64) -> String {
    let mut out = String::new();
    format_float(&mut out, 'g', Directive::default(), x);
    out
}

/// `%g`: shortest representation, or `precision` significant digits with trailing
/// zeros removed. Exponent form is used when the decimal exponent is below -4 or at
/// least the precision (6 for the shortest representation).
fn general(magnitude: f64, precision: Option<usize>, upper: bool) -> String {
    let Some(precision) = precision else {
        let shortest = format!("{magnitude:e}");
        let exponent = exponent_of(&shortest);
        if exponent < -4 || exponent >= 6 {
            return signed_exponent(&shortest, upper);
        }
        return format!("{magnitude}");
    };

    let precision = precision.max(1);
    let rounded = format!("{magnitude:.prec$e}", prec = precision - 1);
    let exponent = exponent_of(&rounded);

    let limit = i64::try_from(precision).unwrap_or(i64::MAX);
    if exponent < -4 || exponent >= limit {
        let (mantissa, rest) = rounded.split_once('e').unwrap_or((rounded.as_str(), "0"));
        let mantissa = trim_fraction(mantissa);
        return signed_exponent(&format!("{mantissa}e{rest}"), upper);
    }

    let decimals = usize::try_from(limit - 1 - exponent).unwrap_or(0);
    trim_fraction(&format!("{magnitude:.decimals$}")).to_string()
}

/// Decimal exponent of Rust's `{:e}` output.
fn exponent_of(scientific: &str) -> i64 {
    scientific
        .split_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0)
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Rewrites Rust's `1.5e3` / `1.5e-7` exponent into `1.5e+03` / `1.5e-07`.
fn signed_exponent(raw: &str, upper: bool) -> String {
    let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw, "0"));
    let (sign, digits) = exponent
        .strip_prefix('-')
        .map_or(('+', exponent), |digits| ('-', digits));
    let e = if upper { 'E' } else { 'e' };
    format!("{mantissa}{e}{sign}{digits:0>2}")
}

/// Double- or single-quoted literal with C-style escapes. Control characters become
/// `\xNN` below U+0080 and `\uNNNN` above.
fn quote(text: &str, delimiter: char) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push(delimiter);
    for c in text.chars() {
        match c {
            '\x07' => out.push_str("\\a"),
            '\x08' => out.push_str("\\b"),
            '\x0c' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x0b' => out.push_str("\\v"),
            '\\' => out.push_str("\\\\"),
            c if c == delimiter => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\x{:02x}", u32::from(c));
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push(delimiter);
    out
}

/// `%#q` prints a raw backquoted string when nothing in it needs escaping.
fn can_backquote(s: &str) -> bool {
    !s.chars()
        .any(|c| c == '`' || c == '\u{feff}' || (c.is_control() && c != '\t'))
}

fn truncate(s: &str, precision: Option<usize>) -> String {
    precision.map_or_else(|| s.to_string(), |p| s.chars().take(p).collect())
}

fn hex_bytes(s: &str, upper: bool) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    for byte in s.bytes() {
        if upper {
            let _ = write!(out, "{byte:02X}");
        } else {
            let _ = write!(out, "{byte:02x}");
        }
    }
    out
}

fn pad_text(out: &mut String, text: &str, d: Directive) {
    let len = text.chars().count();
    let fill = d.width.map_or(0, |w| w.saturating_sub(len));
    if d.minus {
        out.push_str(text);
        out.extend(std::iter::repeat_n(' ', fill));
    } else {
        out.extend(std::iter::repeat_n(' ', fill));
        out.push_str(text);
    }
}

fn pad_number(out: &mut String, negative: bool, prefix: &str, digits: &str, d: Directive) {
    let sign = if negative {
        "-"
    } else if d.plus {
        "+"
    } else if d.space {
        " "
    } else {
        ""
    };
    let len = sign.len() + prefix.len() + digits.len();
    let fill = d.width.map_or(0, |w| w.saturating_sub(len));

    if d.minus {
        out.push_str(sign);
        out.push_str(prefix);
        out.push_str(digits);
        out.extend(std::iter::repeat_n(' ', fill));
    } else if d.zero {
        out.push_str(sign);
        out.push_str(prefix);
        out.extend(std::iter::repeat_n('0', fill));
        out.push_str(digits);
    } else {
        out.extend(std::iter::repeat_n(' ', fill));
        out.push_str(sign);
        out.push_str(prefix);
        out.push_str(digits);
    }
}
