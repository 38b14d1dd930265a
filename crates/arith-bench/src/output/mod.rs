//! Output formatting for benchmark results.
//!
//! Results go to stdout as plain text, one line per precision. Diagnostics go
//! to stderr.

mod terminal;

pub use terminal::{format_error, format_result_line, usage_message, CLOCK_FAILURE};
