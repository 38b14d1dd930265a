//! Error types for CPU clock reads.

/// Error returned when the per-thread CPU clock cannot be read.
///
/// A failed read produces no timestamp at all. Callers must skip any interval
/// bounded by the missing reading rather than substituting a sentinel like 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockError {
    /// `clock_gettime` returned non-zero.
    ///
    /// Carries the raw OS error number. On Linux this is usually `EINVAL`
    /// (clock id not supported by the kernel) or `EFAULT`.
    SyscallFailed(i32),

    /// The kernel returned a nanosecond field outside `0..1_000_000_000`.
    OutOfRange,

    /// No per-thread CPU clock exists on this target.
    Unsupported,
}

impl std::fmt::Display for ClockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SyscallFailed(errno) => write!(
                f,
                "clock_gettime(CLOCK_THREAD_CPUTIME_ID) failed: {}",
                std::io::Error::from_raw_os_error(*errno)
            ),
            Self::OutOfRange => write!(f, "thread CPU clock returned out-of-range nanoseconds"),
            Self::Unsupported => write!(f, "per-thread CPU clock is not available on this platform"),
        }
    }
}

impl std::error::Error for ClockError {}

/// Result type for clock reads.
pub type ClockResult<T> = Result<T, ClockError>;
