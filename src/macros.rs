//! Variadic front ends. Each macro converts its operands with `Value::from` and forwards to
//! the process-wide function of the same name, so the reported location is the macro
//! invocation.

/// Builds a `&[Value]` operand list.
///
/// ```
/// let line = levelog::fmt::sprint(levelog::args!["Ciao", 7]);
/// assert_eq!(line, "Ciao7");
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        &[$($crate::Value::from($arg)),*]
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:expr),* $(,)?) => {
        $crate::global::info($crate::args![$($arg),*])
    };
}

#[macro_export]
macro_rules! infof {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::global::infof($format, $crate::args![$($arg),*])
    };
}

#[macro_export]
macro_rules! infoln {
    ($($arg:expr),* $(,)?) => {
        $crate::global::infoln($crate::args![$($arg),*])
    };
}

#[macro_export]
macro_rules! warning {
    ($($arg:expr),* $(,)?) => {
        $crate::global::warning($crate::args![$($arg),*])
    };
}

#[macro_export]
macro_rules! warningf {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::global::warningf($format, $crate::args![$($arg),*])
    };
}

#[macro_export]
macro_rules! warningln {
    ($($arg:expr),* $(,)?) => {
        $crate::global::warningln($crate::args![$($arg),*])
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:expr),* $(,)?) => {
        $crate::global::error($crate::args![$($arg),*])
    };
}

#[macro_export]
macro_rules! errorf {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::global::errorf($format, $crate::args![$($arg),*])
    };
}

#[macro_export]
macro_rules! errorln {
    ($($arg:expr),* $(,)?) => {
        $crate::global::errorln($crate::args![$($arg),*])
    };
}

/// Logs through the shared logger and exits with status 1.
#[macro_export]
macro_rules! fatal {
    ($($arg:expr),* $(,)?) => {
        $crate::global::fatal($crate::args![$($arg),*])
    };
}

#[macro_export]
macro_rules! fatalf {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::global::fatalf($format, $crate::args![$($arg),*])
    };
}

#[macro_export]
macro_rules! fatalln {
    ($($arg:expr),* $(,)?) => {
        $crate::global::fatalln($crate::args![$($arg),*])
    };
}
