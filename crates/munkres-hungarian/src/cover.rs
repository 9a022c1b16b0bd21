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

//! # Zero Cover
//!
//! Computes the minimum number of row and column lines covering every zero of
//! the working matrix. The line count is the optimality test of the Hungarian
//! method: once it reaches the matrix size, a full assignment over zeros exists.
//!
//! The cover is built greedily, one line at a time:
//!
//! - Find the first uncovered zero in row-major order and scan from there to
//!   the bottom-right corner, again in row-major order.
//! - For each uncovered zero, count the uncovered zeros in its row (`zr`) and
//!   column (`zc`). Cover the row if `zr > zc`, the column if `zr < zc`, the row
//!   if the zero is isolated (`zr == zc == 1`), and skip it on a tie
//!   `zr == zc > 1`.
//! - If a scan covers nothing, every remaining zero is tied; cover the row of
//!   the first uncovered zero and scan again.
//!
//! The greedy cover is not always minimum. It is checked against a maximum
//! matching over the zeros (whose size is the true minimum) and replaced by the
//! cover derived from that matching when it uses too many lines. A greedy cover
//! that is already minimum is kept as is, so the scan order above decides which
//! of several optimal assignments is reported.

use crate::{matching::ZeroMatching, stats::SolverStatistics};
use fixedbitset::FixedBitSet;
use munkres_core::num::{cost::CostNumeric, tolerance::Tolerance};
use munkres_model::matrix::Matrix;

/// Covered rows and columns of a square matrix.
///
/// A cell is covered when its row or its column is covered. The same structure
/// records committed rows and columns during extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZeroCover {
    rows: FixedBitSet,
    columns: FixedBitSet,
    num_lines: usize,
}

impl ZeroCover {
    /// Creates an empty cover for a `size x size` matrix.
    pub fn new(size: usize) -> Self {
        Self {
            rows: FixedBitSet::with_capacity(size),
            columns: FixedBitSet::with_capacity(size),
            num_lines: 0,
        }
    }

    /// Removes all lines.
    #[inline]
    pub fn clear(&mut self) {
        self.rows.clear();
        self.columns.clear();
        self.num_lines = 0;
    }

    /// Returns the number of lines drawn.
    #[inline]
    pub fn num_lines(&self) -> usize {
        self.num_lines
    }

    #[inline(always)]
    pub fn is_row_covered(&self, row: usize) -> bool {
        self.rows.contains(row)
    }

    #[inline(always)]
    pub fn is_column_covered(&self, col: usize) -> bool {
        self.columns.contains(col)
    }

    /// Returns `true` if the cell lies on a row or a column line.
    #[inline(always)]
    pub fn is_covered(&self, row: usize, col: usize) -> bool {
        self.rows.contains(row) || self.columns.contains(col)
    }

    /// Covers `row`; drawing an existing line again is a no-op.
    #[inline]
    pub fn cover_row(&mut self, row: usize) {
        if !self.rows.put(row) {
            self.num_lines += 1;
        }
    }

    /// Covers `col`; drawing an existing line again is a no-op.
    #[inline]
    pub fn cover_column(&mut self, col: usize) {
        if !self.columns.put(col) {
            self.num_lines += 1;
        }
    }

    /// Returns `true` if every row is covered.
    #[inline]
    pub fn all_rows_covered(&self) -> bool {
        self.rows.count_ones(..) == self.rows.len()
    }
}

/// A line of the cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Row(usize),
    Column(usize),
}

/// Decides which line covers the uncovered zero at `(row, col)` given the
/// uncovered zero counts of its row and column, or `None` on an undecidable tie.
#[inline]
pub fn choose_line(
    row: usize,
    col: usize,
    zeros_in_row: usize,
    zeros_in_col: usize,
) -> Option<Line> {
    use std::cmp::Ordering;

    match zeros_in_row.cmp(&zeros_in_col) {
        Ordering::Greater => Some(Line::Row(row)),
        Ordering::Less => Some(Line::Column(col)),
        Ordering::Equal if zeros_in_row <= 1 => Some(Line::Row(row)),
        Ordering::Equal => None,
    }
}

#[inline(always)]
fn is_open_zero<T>(
    working: &Matrix<T>,
    tolerance: Tolerance<T>,
    cover: &ZeroCover,
    row: usize,
    col: usize,
) -> bool
where
    T: CostNumeric,
{
    !cover.is_covered(row, col) && tolerance.is_zero(working[(row, col)])
}

fn open_zeros_in_row<T>(
    working: &Matrix<T>,
    tolerance: Tolerance<T>,
    cover: &ZeroCover,
    row: usize,
) -> usize
where
    T: CostNumeric,
{
    if cover.is_row_covered(row) {
        return 0;
    }
    working
        .row(row)
        .iter()
        .enumerate()
        .filter(|&(col, &v)| !cover.is_column_covered(col) && tolerance.is_zero(v))
        .count()
}

fn open_zeros_in_column<T>(
    working: &Matrix<T>,
    tolerance: Tolerance<T>,
    cover: &ZeroCover,
    col: usize,
) -> usize
where
    T: CostNumeric,
{
    if cover.is_column_covered(col) {
        return 0;
    }
    working
        .column(col)
        .enumerate()
        .filter(|&(row, &v)| !cover.is_row_covered(row) && tolerance.is_zero(v))
        .count()
}

fn first_open_zero<T>(
    working: &Matrix<T>,
    tolerance: Tolerance<T>,
    cover: &ZeroCover,
) -> Option<(usize, usize)>
where
    T: CostNumeric,
{
    let size = working.num_rows();
    (0..size)
        .filter(|&row| !cover.is_row_covered(row))
        .find_map(|row| {
            (0..size)
                .find(|&col| is_open_zero(working, tolerance, cover, row, col))
                .map(|col| (row, col))
        })
}

/// Builds the greedy cover described in the module documentation into `cover`
/// and returns its line count.
pub fn greedy_cover<T>(
    working: &Matrix<T>,
    tolerance: Tolerance<T>,
    cover: &mut ZeroCover,
    stats: &mut SolverStatistics,
) -> usize
where
    T: CostNumeric,
{
    debug_assert!(
        working.is_square(),
        "called `greedy_cover` with a non-square {}x{} matrix",
        working.num_rows(),
        working.num_cols()
    );

    cover.clear();
    let size = working.num_rows();
    let mut remaining = working
        .as_slice()
        .iter()
        .filter(|&&v| tolerance.is_zero(v))
        .count();

    while remaining > 0 {
        let Some((start_row, start_col)) = first_open_zero(working, tolerance, cover) else {
            break;
        };

        let mut progressed = false;
        for flat in (start_row * size + start_col)..(size * size) {
            let (row, col) = (flat / size, flat % size);
            if !is_open_zero(working, tolerance, cover, row, col) {
                continue;
            }

            let zeros_in_row = open_zeros_in_row(working, tolerance, cover, row);
            let zeros_in_col = open_zeros_in_column(working, tolerance, cover, col);
            match choose_line(row, col, zeros_in_row, zeros_in_col) {
                Some(Line::Row(r)) => {
                    cover.cover_row(r);
                    remaining -= zeros_in_row;
                }
                Some(Line::Column(c)) => {
                    cover.cover_column(c);
                    remaining -= zeros_in_col;
                }
                None => continue,
            }
            progressed = true;

            if remaining == 0 {
                return cover.num_lines();
            }
        }

        if !progressed {
            let (row, _) = first_open_zero(working, tolerance, cover)
                .unwrap_or((start_row, start_col));
            remaining -= open_zeros_in_row(working, tolerance, cover, row);
            cover.cover_row(row);
            stats.on_forced_row_cover();
        }
    }

    cover.num_lines()
}

/// Computes a minimum zero cover into `cover` and returns its line count.
///
/// Runs `greedy_cover` and falls back to the matching-derived cover if the
/// greedy one is larger than the maximum zero matching.
pub fn minimum_cover<T>(
    working: &Matrix<T>,
    tolerance: Tolerance<T>,
    cover: &mut ZeroCover,
    matching: &mut ZeroMatching,
    stats: &mut SolverStatistics,
) -> usize
where
    T: CostNumeric,
{
    stats.on_cover_pass();

    let lines = greedy_cover(working, tolerance, cover, stats);
    let size = working.num_rows();
    let is_zero = |row: usize, col: usize| tolerance.is_zero(working[(row, col)]);
    let matched = matching.maximum(0..size, is_zero);

    if lines > matched {
        log::debug!(
            "greedy zero cover used {} lines but {} suffice; using the matching cover",
            lines,
            matched
        );
        matching.konig_cover(is_zero, cover);
        stats.on_cover_repair();
    }

    debug_assert_eq!(
        cover.num_lines(),
        matched,
        "called `minimum_cover` and produced a cover that is not minimum"
    );
    cover.num_lines()
}
