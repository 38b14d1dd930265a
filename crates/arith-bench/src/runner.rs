//! The benchmark procedure: allocate, time the `f32` pass, time the `f64` pass.
//!
//! Three clock reads bound two back-to-back intervals:
//!
//! ```text
//! start ── f32 pass ── mid ── print ── f64 pass ── end
//!        [start, mid]        [mid, end]
//! ```
//!
//! The `f64` interval reuses `mid` as its start, so the two reported times
//! never overlap.

use std::io::{self, Write};

use tracing::{debug, info};

use crate::config::{ClockPolicy, Config};
use crate::error::Error;
use crate::measurement::{CpuClock, CpuTimestamp, Elapsed, ThreadCpuClock};
use crate::output::{format_result_line, CLOCK_FAILURE};
use crate::workload::{arithmetic_pass, Buffers, Precision};

/// What a run measured.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Report {
    /// `f32` pass time, absent if either bounding clock read failed.
    pub single: Option<Elapsed>,
    /// `f64` pass time, absent if either bounding clock read failed.
    pub double: Option<Elapsed>,
    /// Number of failed clock reads (0 to 3).
    pub clock_failures: usize,
}

impl Report {
    pub fn elapsed(&self, precision: Precision) -> Option<Elapsed> {
        match precision {
            Precision::Single => self.single,
            Precision::Double => self.double,
        }
    }
}

/// Runs the benchmark against a [`CpuClock`].
#[derive(Debug)]
pub struct Runner<C = ThreadCpuClock> {
    config: Config,
    clock: C,
}

impl Runner<ThreadCpuClock> {
    /// Runner reading the calling thread's CPU clock.
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, ThreadCpuClock::new())
    }
}

impl<C: CpuClock> Runner<C> {
    pub fn with_clock(config: Config, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run once, writing result lines to `out` and clock diagnostics to `diag`.
    ///
    /// Under [`ClockPolicy::Lenient`] a failed clock read writes
    /// [`CLOCK_FAILURE`] to `diag` and the run continues; only lines whose
    /// interval lacks a timestamp are skipped. Both passes always run.
    pub fn run<O, D>(&mut self, out: &mut O, diag: &mut D) -> Result<Report, Error>
    where
        O: Write + ?Sized,
        D: Write + ?Sized,
    {
        let len = self.config.iterations;
        let mut buffers =
            Buffers::allocate(len).map_err(|source| Error::Allocation { len, source })?;

        debug!(
            iterations = len,
            clock = self.clock.name(),
            resolution = ?self.clock.resolution(),
            policy = ?self.config.clock_policy,
            "buffers allocated"
        );

        let mut report = Report::default();

        let start = self.read_clock(&mut report, diag)?;
        arithmetic_pass(&mut buffers.single);
        let mid = self.read_clock(&mut report, diag)?;
        report.single = interval(start, mid);
        emit(out, Precision::Single, report.single)?;

        arithmetic_pass(&mut buffers.double);
        let end = self.read_clock(&mut report, diag)?;
        report.double = interval(mid, end);
        emit(out, Precision::Double, report.double)?;

        out.flush()?;
        Ok(report)
    }

    fn read_clock<D>(
        &mut self,
        report: &mut Report,
        diag: &mut D,
    ) -> Result<Option<CpuTimestamp>, Error>
    where
        D: Write + ?Sized,
    {
        match self.clock.now() {
            Ok(ts) => Ok(Some(ts)),
            Err(err) => {
                report.clock_failures += 1;
                debug!(clock = self.clock.name(), error = %err, "clock read failed");
                match self.config.clock_policy {
                    ClockPolicy::Strict => Err(Error::Clock(err)),
                    ClockPolicy::Lenient => {
                        writeln!(diag, "{}", CLOCK_FAILURE)?;
                        Ok(None)
                    }
                }
            }
        }
    }
}

fn interval(start: Option<CpuTimestamp>, end: Option<CpuTimestamp>) -> Option<Elapsed> {
    Some(end?.elapsed_since(&start?))
}

fn emit<O>(out: &mut O, precision: Precision, elapsed: Option<Elapsed>) -> io::Result<()>
where
    O: Write + ?Sized,
{
    match elapsed {
        Some(elapsed) => {
            info!(%precision, secs = elapsed.as_secs_f64(), "pass timed");
            writeln!(out, "{}", format_result_line(precision, elapsed))
        }
        None => Ok(()),
    }
}

/// Run with the thread CPU clock, printing to stdout and stderr.
pub fn run(config: Config) -> Result<Report, Error> {
    Runner::new(config).run(&mut io::stdout(), &mut io::stderr())
}
