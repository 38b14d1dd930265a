//! # arith-bench
//!
//! Measure how much per-thread CPU time four elementary float operations cost
//! over an `f32` buffer versus an `f64` buffer.
//!
//! A run allocates two buffers of `N` elements set to `5.5`, then for each
//! precision applies `+= 2.3`, `-= 3.4`, `*= 4.5`, `/= 5.6` to every element
//! while reading `CLOCK_THREAD_CPUTIME_ID` before and after. Output is two
//! lines:
//!
//! ```text
//! float  +-*/ time: 0.004211s
//! double +-*/ time: 0.004379s
//! ```
//!
//! This is a single sample. There is no warm-up and no repetition.
//!
//! ## Quick Start
//!
//! ```no_run
//! use arith_bench::{run, Config};
//!
//! let report = run(Config::new(1_000_000)).unwrap();
//! println!("{:?}", report.single);
//! ```
//!
//! ## Custom clocks
//!
//! [`Runner::with_clock`] accepts any [`CpuClock`], which is how the runner is
//! driven deterministically in tests:
//!
//! ```
//! use arith_bench::{Config, CpuClock, CpuTimestamp, ClockResult, Runner};
//!
//! struct Ticking(i64);
//!
//! impl CpuClock for Ticking {
//!     fn now(&mut self) -> ClockResult<CpuTimestamp> {
//!         self.0 += 1_000;
//!         Ok(CpuTimestamp::new(0, self.0))
//!     }
//!     fn name(&self) -> &'static str {
//!         "ticking"
//!     }
//! }
//!
//! let mut out = Vec::new();
//! Runner::with_clock(Config::new(8), Ticking(0))
//!     .run(&mut out, &mut std::io::sink())
//!     .unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "float  +-*/ time: 0.000001s\ndouble +-*/ time: 0.000001s\n"
//! );
//! ```

#![warn(clippy::all)]

mod config;
mod error;
pub mod measurement;
pub mod output;
mod runner;
pub mod workload;

pub use config::{ClockPolicy, Config};
pub use error::Error;
pub use measurement::{ClockError, ClockResult, CpuClock, CpuTimestamp, Elapsed, ThreadCpuClock};
pub use runner::{run, Report, Runner};
pub use workload::{arithmetic_pass, Buffers, Operand, Precision};
