//! Per-thread CPU clock, timestamps, and elapsed durations.
//!
//! | Platform              | Source                                   |
//! |-----------------------|------------------------------------------|
//! | Linux / Android       | `clock_gettime(CLOCK_THREAD_CPUTIME_ID)` |
//! | macOS / iOS / FreeBSD | `clock_gettime(CLOCK_THREAD_CPUTIME_ID)` |
//! | Everything else       | none, every read is `Unsupported`        |
//!
//! The thread CPU clock only advances while the calling thread is on a CPU,
//! so load from other processes does not inflate readings. Scheduler quantum
//! effects still show up for very small workloads.

use std::fmt;
use std::time::Duration;

use super::error::{ClockError, ClockResult};

const NANOS_PER_SEC: i64 = 1_000_000_000;
const NANOS_PER_MICRO: i64 = 1_000;
const MICROS_PER_SEC: f64 = 1_000_000.0;

/// A single reading of a CPU clock.
///
/// Only meaningful relative to another reading of the same clock on the same
/// thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CpuTimestamp {
    secs: i64,
    nanos: i64,
}

impl CpuTimestamp {
    /// Build a timestamp from whole seconds and a nanosecond remainder.
    ///
    /// # Panics
    ///
    /// Panics if `nanos` is outside `0..1_000_000_000`.
    pub fn new(secs: i64, nanos: i64) -> Self {
        assert!(
            (0..NANOS_PER_SEC).contains(&nanos),
            "nanos must be in [0, 1_000_000_000)"
        );
        Self { secs, nanos }
    }

    fn checked(secs: i64, nanos: i64) -> ClockResult<Self> {
        if (0..NANOS_PER_SEC).contains(&nanos) {
            Ok(Self { secs, nanos })
        } else {
            Err(ClockError::OutOfRange)
        }
    }

    pub fn secs(&self) -> i64 {
        self.secs
    }

    pub fn nanos(&self) -> i64 {
        self.nanos
    }

    /// CPU time elapsed from `earlier` to `self`.
    ///
    /// Whole seconds are subtracted exactly. The sub-second difference is
    /// truncated toward zero to microseconds before being added as a fraction,
    /// so nanosecond input yields microsecond output. A negative result is
    /// clamped to zero.
    pub fn elapsed_since(&self, earlier: &CpuTimestamp) -> Elapsed {
        let whole = (self.secs - earlier.secs) as f64;
        let micros = (self.nanos - earlier.nanos) / NANOS_PER_MICRO;
        let secs = whole + micros as f64 / MICROS_PER_SEC;
        Elapsed(if secs > 0.0 { secs } else { 0.0 })
    }
}

/// Non-negative CPU time in seconds with microsecond granularity.
///
/// `Display` renders fixed-point with exactly six fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Elapsed(f64);

impl Elapsed {
    pub const ZERO: Elapsed = Elapsed(0.0);

    pub fn as_secs_f64(&self) -> f64 {
        self.0
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_secs_f64(self.0)
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

/// Source of CPU timestamps.
///
/// Takes `&mut self` so scripted clocks can advance between reads.
pub trait CpuClock {
    /// Read the clock.
    fn now(&mut self) -> ClockResult<CpuTimestamp>;

    /// Clock name for diagnostics.
    fn name(&self) -> &'static str;

    /// Advertised resolution, if the platform reports one.
    fn resolution(&self) -> Option<Duration> {
        None
    }
}

/// The calling thread's CPU-time clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadCpuClock;

impl ThreadCpuClock {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd"
))]
mod sys {
    use super::{ClockError, ClockResult, CpuTimestamp};
    use std::time::Duration;

    fn zeroed() -> libc::timespec {
        // SAFETY: timespec is plain integers (plus padding on some targets),
        // for which all-zero bytes are a valid value.
        unsafe { std::mem::zeroed() }
    }

    fn last_errno() -> i32 {
        std::io::Error::last_os_error().raw_os_error().unwrap_or(0)
    }

    #[allow(clippy::unnecessary_cast)]
    pub(super) fn thread_cputime() -> ClockResult<CpuTimestamp> {
        let mut ts = zeroed();
        // SAFETY: `ts` is a valid, writable timespec for the duration of the call.
        let rc = unsafe { libc::clock_gettime(libc::CLOCK_THREAD_CPUTIME_ID, &mut ts) };
        if rc != 0 {
            return Err(ClockError::SyscallFailed(last_errno()));
        }
        CpuTimestamp::checked(ts.tv_sec as i64, ts.tv_nsec as i64)
    }

    #[allow(clippy::unnecessary_cast)]
    pub(super) fn thread_cputime_res() -> Option<Duration> {
        let mut ts = zeroed();
        // SAFETY: as above.
        let rc = unsafe { libc::clock_getres(libc::CLOCK_THREAD_CPUTIME_ID, &mut ts) };
        if rc != 0 || ts.tv_sec < 0 || ts.tv_nsec < 0 {
            return None;
        }
        Some(Duration::new(ts.tv_sec as u64, ts.tv_nsec as u32))
    }
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd"
)))]
mod sys {
    use super::{ClockError, ClockResult, CpuTimestamp};
    use std::time::Duration;

    pub(super) fn thread_cputime() -> ClockResult<CpuTimestamp> {
        Err(ClockError::Unsupported)
    }

    pub(super) fn thread_cputime_res() -> Option<Duration> {
        None
    }
}

impl CpuClock for ThreadCpuClock {
    #[inline]
    fn now(&mut self) -> ClockResult<CpuTimestamp> {
        sys::thread_cputime()
    }

    fn name(&self) -> &'static str {
        "CLOCK_THREAD_CPUTIME_ID"
    }

    fn resolution(&self) -> Option<Duration> {
        sys::thread_cputime_res()
    }
}
