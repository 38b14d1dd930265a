//! Terminal text for results and diagnostics.

use colored::Colorize;

use crate::error::Error;
use crate::measurement::Elapsed;
use crate::workload::Precision;

/// Line printed to stderr whenever a clock read fails.
pub const CLOCK_FAILURE: &str = "get time wrong";

/// Format one result line, without the trailing newline.
///
/// Labels are left-aligned to the width of `double` so both lines line up:
///
/// ```text
/// float  +-*/ time: 0.004211s
/// double +-*/ time: 0.004379s
/// ```
pub fn format_result_line(precision: Precision, elapsed: Elapsed) -> String {
    format!("{:<6} +-*/ time: {}s", precision.label(), elapsed)
}

/// The two-line usage message, with a trailing newline.
pub fn usage_message(program: &str) -> String {
    format!(
        "Please run as: {} 1000\nwith 1000 means loop count\n",
        program
    )
}

/// Format a fatal error for stderr, with the cause chain appended.
///
/// The `error:` prefix is colored when the terminal supports it.
pub fn format_error(err: &Error) -> String {
    let mut out = format!("{} {}", "error:".red().bold(), err);
    // Allocation is the only variant whose Display omits its cause.
    if matches!(err, Error::Allocation { .. }) {
        let mut source = std::error::Error::source(err);
        while let Some(cause) = source {
            out.push_str(&format!("\n  caused by: {}", cause));
            source = cause.source();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::{ClockError, CpuTimestamp};

    fn elapsed(secs: i64, nanos: i64) -> Elapsed {
        CpuTimestamp::new(secs, nanos).elapsed_since(&CpuTimestamp::new(0, 0))
    }

    #[test]
    fn result_lines_align() {
        assert_eq!(
            format_result_line(Precision::Single, elapsed(0, 4_211_999)),
            "float  +-*/ time: 0.004211s"
        );
        assert_eq!(
            format_result_line(Precision::Double, elapsed(1, 500_000_000)),
            "double +-*/ time: 1.500000s"
        );
    }

    #[test]
    fn zero_duration_line() {
        assert_eq!(
            format_result_line(Precision::Single, Elapsed::ZERO),
            "float  +-*/ time: 0.000000s"
        );
    }

    #[test]
    fn usage_is_two_lines() {
        let usage = usage_message("arith-bench");
        let lines: Vec<_> = usage.lines().collect();
        assert_eq!(
            lines,
            ["Please run as: arith-bench 1000", "with 1000 means loop count"]
        );
    }

    #[test]
    fn error_includes_message() {
        colored::control::set_override(false);
        let text = format_error(&Error::Clock(ClockError::Unsupported));
        assert_eq!(
            text,
            "error: get time wrong: per-thread CPU clock is not available on this platform"
        );
    }
}
