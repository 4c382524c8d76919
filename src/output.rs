use std::fmt;
use std::io::{self, Write};

/// Print one diagnostic line to stdout and flush it right away.
pub fn say(args: fmt::Arguments<'_>) {
    let mut out = io::stdout().lock();
    // A closed stdout must not abort the run; the exit code still reports the outcome.
    let _ = writeln!(out, "{args}");
    let _ = out.flush();
}

#[macro_export]
macro_rules! say {
    ($($arg:tt)*) => {
        $crate::output::say(format_args!($($arg)*))
    };
}
