//! End-to-end tests of the `arith-bench` binary.
//!
//! Timings vary run to run, so these check structure and sign, never values.

use std::process::{Command, Output};

use regex::Regex;

const USAGE: &str = "Please run as: arith-bench 1000\nwith 1000 means loop count\n";

fn arith_bench(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_arith-bench"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn arith-bench")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

fn line_pattern() -> Regex {
    Regex::new(r"^(float |double) \+-\*/ time: ([0-9]+\.[0-9]{6})s$").unwrap()
}

/// Check the two result lines and return the parsed durations.
fn assert_two_timing_lines(out: &str) -> (f64, f64) {
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2, "expected two lines, got {out:?}");
    assert!(lines[0].starts_with("float  +-*/ time: "), "{out:?}");
    assert!(lines[1].starts_with("double +-*/ time: "), "{out:?}");

    let re = line_pattern();
    let secs: Vec<f64> = lines
        .iter()
        .map(|line| {
            let caps = re
                .captures(line)
                .unwrap_or_else(|| panic!("malformed line {line:?}"));
            caps[2].parse().unwrap()
        })
        .collect();
    assert!(secs.iter().all(|&s| s >= 0.0));
    (secs[0], secs[1])
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
mod success {
    use super::*;

    #[test]
    fn zero_iterations() {
        let output = arith_bench(&["0"]);
        assert!(output.status.success());
        let (single, double) = assert_two_timing_lines(&stdout(&output));
        // No loop work; allow scheduler noise.
        assert!(single < 0.01, "float took {single}");
        assert!(double < 0.01, "double took {double}");
        assert!(stderr(&output).is_empty());
    }

    #[test]
    fn one_million_iterations() {
        let output = arith_bench(&["1000000"]);
        assert!(output.status.success());
        assert_two_timing_lines(&stdout(&output));
        assert!(stderr(&output).is_empty());
    }

    #[test]
    fn repeated_runs_have_identical_structure() {
        let shape = |out: String| -> Vec<String> {
            out.lines()
                .map(|l| line_pattern().replace(l, "$1 +-*/ time: Ns").into_owned())
                .collect()
        };
        let a = shape(stdout(&arith_bench(&["1000"])));
        let b = shape(stdout(&arith_bench(&["1000"])));
        assert_eq!(a, b);
        assert_eq!(a, ["float  +-*/ time: Ns", "double +-*/ time: Ns"]);
    }

    #[test]
    fn flags_do_not_count_as_arguments() {
        let output = arith_bench(&["--strict-clock", "--no-color", "100"]);
        assert!(output.status.success());
        assert_two_timing_lines(&stdout(&output));
    }

    #[test]
    fn verbose_logs_to_stderr_only() {
        let output = arith_bench(&["-vv", "100"]);
        assert!(output.status.success());
        assert_two_timing_lines(&stdout(&output));
        assert!(stderr(&output).contains("pass timed"));
    }
}

#[test]
fn no_arguments_prints_usage() {
    let output = arith_bench(&[]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(255));
    assert_eq!(stderr(&output), USAGE);
    assert!(output.stdout.is_empty());
}

#[test]
fn two_arguments_prints_usage() {
    let output = arith_bench(&["10", "20"]);
    assert!(!output.status.success());
    assert_eq!(stderr(&output), USAGE);
    assert!(output.stdout.is_empty());
}

#[test]
fn unknown_flag_prints_usage() {
    let output = arith_bench(&["--frobnicate", "10"]);
    assert!(!output.status.success());
    assert_eq!(stderr(&output), USAGE);
    assert!(output.stdout.is_empty());
}

#[test]
fn non_numeric_argument_fails_fast() {
    let output = arith_bench(&["--no-color", "lots"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let err = stderr(&output);
    assert!(err.starts_with("error: invalid loop count 'lots': "), "{err:?}");
    assert_eq!(err.lines().count(), 1);
}

#[test]
fn negative_argument_fails_fast() {
    let output = arith_bench(&["--no-color", "-5"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).starts_with("error: invalid loop count '-5': "));
}

#[test]
fn out_of_range_argument_fails_fast() {
    let output = arith_bench(&["--no-color", "999999999999999999999999999"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("invalid loop count"));
}

#[test]
fn help_succeeds() {
    let output = arith_bench(&["--help"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("LOOP_COUNT"));
}
