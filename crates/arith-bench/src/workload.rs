//! The timed workload: four arithmetic ops per element, per precision.

use std::collections::TryReserveError;
use std::fmt;
use std::hint::black_box;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// Floating-point precision of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    /// `f32`
    Single,
    /// `f64`
    Double,
}

impl Precision {
    /// Both precisions, in the order they are timed.
    pub const ALL: [Precision; 2] = [Precision::Single, Precision::Double];

    /// C type name used in the result lines.
    pub fn label(&self) -> &'static str {
        match self {
            Precision::Single => "float",
            Precision::Double => "double",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A float type the arithmetic pass can run over.
///
/// Constants are stored per precision so `2.3f32` and `2.3f64` are each
/// the nearest representable value in their own type.
pub trait Operand:
    Copy + fmt::Debug + PartialEq + AddAssign + SubAssign + MulAssign + DivAssign
{
    const PRECISION: Precision;
    const INITIAL: Self;
    const ADDEND: Self;
    const SUBTRAHEND: Self;
    const FACTOR: Self;
    const DIVISOR: Self;
}

impl Operand for f32 {
    const PRECISION: Precision = Precision::Single;
    const INITIAL: Self = 5.5;
    const ADDEND: Self = 2.3;
    const SUBTRAHEND: Self = 3.4;
    const FACTOR: Self = 4.5;
    const DIVISOR: Self = 5.6;
}

impl Operand for f64 {
    const PRECISION: Precision = Precision::Double;
    const INITIAL: Self = 5.5;
    const ADDEND: Self = 2.3;
    const SUBTRAHEND: Self = 3.4;
    const FACTOR: Self = 4.5;
    const DIVISOR: Self = 5.6;
}

/// Allocate `len` copies of `T::INITIAL` without aborting on OOM.
pub fn filled<T: Operand>(len: usize) -> Result<Vec<T>, TryReserveError> {
    let mut values = Vec::new();
    values.try_reserve_exact(len)?;
    values.resize(len, T::INITIAL);
    Ok(values)
}

/// Run add, subtract, multiply, divide over every element in index order.
///
/// Each element receives all four ops before moving to the next index. The
/// index and the finished buffer both pass through [`black_box`] so the loop
/// cannot be removed as dead code.
#[inline(never)]
pub fn arithmetic_pass<T: Operand>(values: &mut [T]) {
    for i in 0..values.len() {
        let i = black_box(i);
        let value = &mut values[i];
        *value += T::ADDEND;
        *value -= T::SUBTRAHEND;
        *value *= T::FACTOR;
        *value /= T::DIVISOR;
    }
    black_box(values);
}

/// The two buffers a run times, allocated up front so allocation cost stays
/// outside the measured intervals.
#[derive(Debug, Clone, PartialEq)]
pub struct Buffers {
    pub single: Vec<f32>,
    pub double: Vec<f64>,
}

impl Buffers {
    /// Allocate both buffers with `len` elements set to 5.5.
    pub fn allocate(len: usize) -> Result<Self, TryReserveError> {
        Ok(Self {
            single: filled(len)?,
            double: filled(len)?,
        })
    }

    pub fn len(&self) -> usize {
        self.single.len()
    }

    pub fn is_empty(&self) -> bool {
        self.single.is_empty()
    }
}
