//! Crate error type.

use std::collections::TryReserveError;
use std::fmt;
use std::io;
use std::num::ParseIntError;

use crate::measurement::ClockError;

/// Everything that can stop a run.
#[derive(Debug)]
pub enum Error {
    /// Wrong number of positional arguments.
    Usage,

    /// The iteration count is not a base-10 `usize`.
    InvalidIterations {
        input: String,
        source: ParseIntError,
    },

    /// The buffers could not be allocated.
    Allocation {
        len: usize,
        source: TryReserveError,
    },

    /// The CPU clock could not be read and the run uses the strict policy.
    Clock(ClockError),

    /// Writing a result line failed.
    Io(io::Error),
}

impl Error {
    /// Process exit status for this error.
    ///
    /// Usage errors exit with 255, which is what a shell sees for a `-1`
    /// return. Every other failure exits with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Usage => 255,
            _ => 1,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Usage => write!(f, "expected exactly one argument: the loop count"),
            Error::InvalidIterations { input, source } => {
                write!(f, "invalid loop count '{}': {}", input, source)
            }
            Error::Allocation { len, .. } => {
                write!(f, "could not allocate buffers of {} elements", len)
            }
            Error::Clock(err) => write!(f, "get time wrong: {}", err),
            Error::Io(err) => write!(f, "failed to write results: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Usage => None,
            Error::InvalidIterations { source, .. } => Some(source),
            Error::Allocation { source, .. } => Some(source),
            Error::Clock(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<ClockError> for Error {
    fn from(err: ClockError) -> Self {
        Error::Clock(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}
