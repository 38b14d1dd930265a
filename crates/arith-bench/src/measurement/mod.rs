//! CPU time measurement.
//!
//! This module provides:
//! - [`ThreadCpuClock`], the calling thread's CPU-time clock
//! - [`CpuTimestamp`] readings and the [`Elapsed`] duration between two of them
//! - [`CpuClock`], the seam the runner reads time through
//!
//! There is no wall-clock timer here. Time spent descheduled must not count
//! against the arithmetic loops.

mod clock;
mod error;

pub use clock::{CpuClock, CpuTimestamp, Elapsed, ThreadCpuClock};
pub use error::{ClockError, ClockResult};
