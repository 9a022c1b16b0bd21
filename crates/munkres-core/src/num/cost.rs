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

//! # Cost Numeric Trait
//!
//! Unified numeric bounds for cost matrices. `CostNumeric` collects everything
//! the assignment solver needs from an element type into a single alias so that
//! generic signatures stay short: ordering, in-place arithmetic, lossy casts for
//! configuration constants and the type bounds used to detect overflow.
//!
//! Integer (`i32`, `u64`, ...) and floating-point (`f32`, `f64`) types both
//! qualify. Floating-point types are only partially ordered; `is_comparable`
//! lets callers reject `NaN` before it reaches the solver.

use num_traits::{Bounded, NumAssign, NumCast};

/// A trait alias for numeric types that can be used as assignment costs.
///
/// Blanket-implemented for every type satisfying the bounds, which in practice
/// are all primitive integer and floating-point types.
pub trait CostNumeric:
    Copy
    + PartialOrd
    + NumAssign
    + NumCast
    + Bounded
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
{
}

impl<T> CostNumeric for T where
    T: Copy
        + PartialOrd
        + NumAssign
        + NumCast
        + Bounded
        + std::fmt::Debug
        + std::fmt::Display
        + Send
        + Sync
{
}

/// Returns `true` if `value` can be ordered against itself.
///
/// This is `false` exactly for `NaN` values of floating-point types and always
/// `true` for integers.
///
/// # Examples
///
/// ```rust
/// # use munkres_core::num::cost::is_comparable;
/// assert!(is_comparable(&3_i32));
/// assert!(is_comparable(&1.5_f64));
/// assert!(!is_comparable(&f64::NAN));
/// ```
#[inline(always)]
pub fn is_comparable<T>(value: &T) -> bool
where
    T: PartialOrd,
{
    value.partial_cmp(value).is_some()
}

/// Returns the smaller of two partially ordered values, preferring `a` on ties.
#[inline(always)]
pub fn partial_min<T>(a: T, b: T) -> T
where
    T: PartialOrd,
{
    if b < a { b } else { a }
}

/// Returns the larger of two partially ordered values, preferring `a` on ties.
#[inline(always)]
pub fn partial_max<T>(a: T, b: T) -> T
where
    T: PartialOrd,
{
    if b > a { b } else { a }
}

/// Returns the minimum of an iterator of partially ordered values, or `None`
/// if the iterator is empty.
#[inline]
pub fn min_of<T, I>(values: I) -> Option<T>
where
    T: PartialOrd,
    I: IntoIterator<Item = T>,
{
    values.into_iter().reduce(partial_min)
}

/// Returns the maximum of an iterator of partially ordered values, or `None`
/// if the iterator is empty.
#[inline]
pub fn max_of<T, I>(values: I) -> Option<T>
where
    T: PartialOrd,
    I: IntoIterator<Item = T>,
{
    values.into_iter().reduce(partial_max)
}
