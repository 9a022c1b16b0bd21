// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Zero Tolerance
//!
//! The assignment solver decides structure (covers, candidates) by asking
//! whether a reduced cost is zero. For floating-point costs repeated
//! subtraction leaves residue such as `1e-15`, so every such test goes through
//! a single `Tolerance<T>` instead of `== 0`.
//!
//! Costs are non-negative by construction, hence the test is one-sided:
//! a value is "zero" when it is `<= epsilon`.
//!
//! The epsilon is usually configured as an `f64` and converted into the cost
//! type once. For integer cost types the conversion truncates towards zero, so
//! `1e-6` becomes an exact comparison against `0`.

use crate::num::cost::CostNumeric;

/// The default epsilon used to treat near-zero values as zero.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// A one-sided tolerance for zero tests on non-negative cost values.
///
/// # Examples
///
/// ```rust
/// # use munkres_core::num::tolerance::Tolerance;
/// let tol = Tolerance::<f64>::from_f64(1e-6);
/// assert!(tol.is_zero(0.0));
/// assert!(tol.is_zero(4e-7));
/// assert!(!tol.is_zero(0.01));
///
/// let exact = Tolerance::<i32>::from_f64(1e-6);
/// assert!(exact.is_zero(0));
/// assert!(!exact.is_zero(1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance<T> {
    epsilon: T,
}

impl<T> Tolerance<T>
where
    T: CostNumeric,
{
    /// Creates a tolerance with the given epsilon in the cost type.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `epsilon` is negative.
    #[inline]
    pub fn new(epsilon: T) -> Self {
        debug_assert!(
            epsilon >= T::zero(),
            "called `Tolerance::new` with a negative epsilon: {}",
            epsilon
        );

        Self { epsilon }
    }

    /// Creates a tolerance that only accepts values `<= 0`.
    #[inline]
    pub fn exact() -> Self {
        Self { epsilon: T::zero() }
    }

    /// Converts an `f64` epsilon into the cost type.
    ///
    /// Falls back to an exact comparison if the value cannot be represented.
    #[inline]
    pub fn from_f64(epsilon: f64) -> Self {
        match <T as num_traits::NumCast>::from(epsilon) {
            Some(e) if e >= T::zero() => Self { epsilon: e },
            _ => Self::exact(),
        }
    }

    /// Returns the epsilon in the cost type.
    #[inline]
    pub fn epsilon(&self) -> T {
        self.epsilon
    }

    /// Returns `true` if `value` counts as zero.
    #[inline(always)]
    pub fn is_zero(&self, value: T) -> bool {
        value <= self.epsilon
    }
}

impl<T> Default for Tolerance<T>
where
    T: CostNumeric,
{
    fn default() -> Self {
        Self::from_f64(DEFAULT_EPSILON)
    }
}

impl<T> std::fmt::Display for Tolerance<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tolerance(<= {})", self.epsilon)
    }
}
