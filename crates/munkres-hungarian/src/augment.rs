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

//! Augmentation: manufacturing new zeros when the cover is too small.
//!
//! With `k < n` lines covering all zeros, let `m` be the smallest uncovered
//! value. Subtracting `m` from every uncovered cell and adding it to every cell
//! at the intersection of a covered row and a covered column keeps all values
//! non-negative, keeps every zero that lies on exactly one line, and turns at
//! least one uncovered cell into a zero.

use crate::cover::ZeroCover;
use munkres_core::num::cost::{CostNumeric, min_of};
use munkres_model::matrix::Matrix;

/// Applies one augmentation step and returns the shift `m`, or `None` if the
/// cover leaves no cell uncovered (the matrix is left unchanged).
pub fn augment<T>(working: &mut Matrix<T>, cover: &ZeroCover) -> Option<T>
where
    T: CostNumeric,
{
    let shift = min_of(
        working
            .iter_indexed()
            .filter(|&((row, col), _)| !cover.is_covered(row, col))
            .map(|(_, &v)| v),
    )?;

    for row in 0..working.num_rows() {
        let row_covered = cover.is_row_covered(row);
        for (col, value) in working.row_mut(row).iter_mut().enumerate() {
            match (row_covered, cover.is_column_covered(col)) {
                (false, false) => *value -= shift,
                (true, true) => *value += shift,
                _ => {}
            }
        }
    }

    debug_assert!(
        working.as_slice().iter().all(|&v| v >= T::zero()),
        "called `augment` and produced a negative working value"
    );
    Some(shift)
}
