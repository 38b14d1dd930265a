//! Run configuration.

use crate::error::Error;

/// How a failed clock read is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockPolicy {
    /// Print `get time wrong`, keep running, and omit only the result lines
    /// whose interval is missing a timestamp.
    #[default]
    Lenient,

    /// Abort the run with [`Error::Clock`] on the first failed read.
    Strict,
}

/// Configuration for a single benchmark run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Elements per buffer, which is also the number of loop iterations per
    /// precision. Zero is valid and produces two near-zero timings.
    pub iterations: usize,

    /// Behaviour on clock-acquisition failure. Default: [`ClockPolicy::Lenient`].
    pub clock_policy: ClockPolicy,
}

impl Config {
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }

    /// Parse the iteration-count argument.
    ///
    /// Accepts base-10 unsigned integers that fit in `usize`. Anything else,
    /// including negative numbers, whitespace, and the empty string, is
    /// rejected with [`Error::InvalidIterations`].
    pub fn from_iterations_arg(arg: &str) -> Result<Self, Error> {
        let iterations = arg
            .parse::<usize>()
            .map_err(|source| Error::InvalidIterations {
                input: arg.to_owned(),
                source,
            })?;
        Ok(Self::new(iterations))
    }

    pub fn clock_policy(mut self, policy: ClockPolicy) -> Self {
        self.clock_policy = policy;
        self
    }

    pub fn strict_clock(self, strict: bool) -> Self {
        self.clock_policy(if strict {
            ClockPolicy::Strict
        } else {
            ClockPolicy::Lenient
        })
    }
}
