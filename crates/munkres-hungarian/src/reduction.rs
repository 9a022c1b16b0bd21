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

//! Row and column reduction.
//!
//! Subtracting the minimum of a row (or column) from all of its entries does
//! not change which assignment is optimal, because every assignment uses each
//! row exactly once. After reducing rows and then columns every row and every
//! column of the working matrix holds at least one zero.

use munkres_core::num::{
    cost::{CostNumeric, min_of},
    tolerance::Tolerance,
};
use munkres_model::matrix::Matrix;

/// The order in which rows and columns are reduced.
///
/// Both orders lead to an optimal assignment; they differ in intermediate
/// values and therefore in which optimum is found when several exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReductionOrder {
    RowsFirst,
    ColumnsFirst,
}

impl ReductionOrder {
    /// Rows first for tall or square inputs, columns first for wide inputs.
    #[inline]
    pub fn for_shape(num_rows: usize, num_cols: usize) -> Self {
        if num_rows >= num_cols {
            Self::RowsFirst
        } else {
            Self::ColumnsFirst
        }
    }
}

/// Subtracts each row's minimum from that row. Rows whose minimum already
/// counts as zero are left untouched. Returns the number of rows changed.
pub fn subtract_row_minima<T>(working: &mut Matrix<T>, tolerance: Tolerance<T>) -> usize
where
    T: CostNumeric,
{
    let mut changed = 0;
    for row in 0..working.num_rows() {
        let values = working.row_mut(row);
        let Some(min) = min_of(values.iter().copied()) else {
            continue;
        };
        if tolerance.is_zero(min) {
            continue;
        }
        values.iter_mut().for_each(|v| *v -= min);
        changed += 1;
    }
    changed
}

/// Subtracts each column's minimum from that column. Columns whose minimum
/// already counts as zero are left untouched. Returns the number of columns changed.
pub fn subtract_column_minima<T>(working: &mut Matrix<T>, tolerance: Tolerance<T>) -> usize
where
    T: CostNumeric,
{
    let mut changed = 0;
    for col in 0..working.num_cols() {
        let Some(min) = min_of(working.column(col).copied()) else {
            continue;
        };
        if tolerance.is_zero(min) {
            continue;
        }
        for row in 0..working.num_rows() {
            working[(row, col)] -= min;
        }
        changed += 1;
    }
    changed
}

/// Runs both reductions in the given order.
pub fn reduce<T>(working: &mut Matrix<T>, order: ReductionOrder, tolerance: Tolerance<T>)
where
    T: CostNumeric,
{
    let (rows, cols) = match order {
        ReductionOrder::RowsFirst => {
            let rows = subtract_row_minima(working, tolerance);
            (rows, subtract_column_minima(working, tolerance))
        }
        ReductionOrder::ColumnsFirst => {
            let cols = subtract_column_minima(working, tolerance);
            (subtract_row_minima(working, tolerance), cols)
        }
    };
    log::trace!("reduced {} rows and {} columns ({:?})", rows, cols, order);
}
