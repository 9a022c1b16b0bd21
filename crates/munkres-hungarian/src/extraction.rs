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

//! # Extraction
//!
//! Turns a working matrix whose zeros admit a full cover into a permutation.
//!
//! Every zero starts out as a candidate. Rows and columns with exactly one
//! candidate are committed first, since every full assignment over zeros has
//! to use that cell. When only ties remain, several optimal assignments exist
//! and one candidate is chosen by its *original* cost (lowest first, row-major
//! position breaking equal costs). A candidate is only taken if the remaining
//! candidates still admit a full assignment, which is checked with a bipartite
//! matching; this keeps every committed cell a zero and the result optimal.
//! Committing a cell removes the other candidates of its row and column.
//!
//! A cell with a non-zero reduced cost is only committed if no candidate is
//! left at all, which does not happen for a correctly reduced matrix.

use crate::{cover::ZeroCover, matching::ZeroMatching, stats::SolverStatistics};
use fixedbitset::FixedBitSet;
use munkres_core::num::{cost::CostNumeric, tolerance::Tolerance};
use munkres_model::matrix::Matrix;

/// Candidate cells of a square matrix, stored row-major in a bitset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentMask {
    size: usize,
    cells: FixedBitSet,
}

impl AssignmentMask {
    /// Creates an empty mask for a `size x size` matrix.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: FixedBitSet::with_capacity(size * size),
        }
    }

    #[inline(always)]
    fn flat(&self, row: usize, col: usize) -> usize {
        debug_assert!(
            row < self.size && col < self.size,
            "called `AssignmentMask::flat` with ({}, {}) out of bounds for size {}",
            row,
            col,
            self.size
        );
        row * self.size + col
    }

    /// Returns the side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(self.flat(row, col))
    }

    #[inline]
    pub fn insert(&mut self, row: usize, col: usize) {
        let i = self.flat(row, col);
        self.cells.insert(i);
    }

    /// Marks every zero of `working` as a candidate, clearing everything else.
    pub fn seed_zeros<T>(&mut self, working: &Matrix<T>, tolerance: Tolerance<T>)
    where
        T: CostNumeric,
    {
        self.cells.clear();
        for (i, &v) in working.as_slice().iter().enumerate() {
            if tolerance.is_zero(v) {
                self.cells.insert(i);
            }
        }
    }

    /// Removes all candidates of `row`.
    #[inline]
    pub fn clear_row(&mut self, row: usize) {
        let start = self.flat(row, 0);
        self.cells.set_range(start..start + self.size, false);
    }

    /// Removes all candidates of `col`.
    #[inline]
    pub fn clear_column(&mut self, col: usize) {
        for row in 0..self.size {
            let i = self.flat(row, col);
            self.cells.set(i, false);
        }
    }

    /// Returns the column of the only candidate of `row`, or `None` if the row
    /// has zero or several candidates.
    pub fn single_in_row(&self, row: usize) -> Option<usize> {
        let mut found = None;
        for col in 0..self.size {
            if self.contains(row, col) {
                if found.is_some() {
                    return None;
                }
                found = Some(col);
            }
        }
        found
    }

    /// Returns the row of the only candidate of `col`, or `None` if the column
    /// has zero or several candidates.
    pub fn single_in_column(&self, col: usize) -> Option<usize> {
        let mut found = None;
        for row in 0..self.size {
            if self.contains(row, col) {
                if found.is_some() {
                    return None;
                }
                found = Some(row);
            }
        }
        found
    }

    /// Returns the number of candidates.
    #[inline]
    pub fn count(&self) -> usize {
        self.cells.count_ones(..)
    }

    /// Reads the permutation from a mask with exactly one candidate per row.
    ///
    /// # Panics
    ///
    /// Panics if a row has no candidate.
    pub fn column_for_each_row(&self) -> Vec<usize> {
        (0..self.size)
            .map(|row| {
                (0..self.size)
                    .find(|&col| self.contains(row, col))
                    .unwrap_or_else(|| {
                        panic!(
                            "called `AssignmentMask::column_for_each_row` with row {} unassigned",
                            row
                        )
                    })
            })
            .collect()
    }
}

/// Commits `(row, col)`: clears its row and column candidates, keeps the cell,
/// and marks both lines as done.
#[inline]
fn commit(mask: &mut AssignmentMask, done: &mut ZeroCover, row: usize, col: usize) {
    mask.clear_row(row);
    mask.clear_column(col);
    mask.insert(row, col);
    done.cover_row(row);
    done.cover_column(col);
}

/// Returns `true` if the open candidates other than row `row` and column `col`
/// still admit a full matching.
fn keeps_full_assignment(
    mask: &AssignmentMask,
    done: &ZeroCover,
    matching: &mut ZeroMatching,
    row: usize,
    col: usize,
) -> bool {
    let size = mask.size();
    let open_rows: Vec<usize> = (0..size)
        .filter(|&r| r != row && !done.is_row_covered(r))
        .collect();
    let needed = open_rows.len();

    let matched = matching.maximum(open_rows, |r, c| {
        c != col && !done.is_column_covered(c) && mask.contains(r, c)
    });
    matched == needed
}

/// Picks the cell to commit when no row or column has a unique candidate.
fn break_tie<T>(
    costs: &Matrix<T>,
    mask: &AssignmentMask,
    done: &ZeroCover,
    matching: &mut ZeroMatching,
    stats: &mut SolverStatistics,
) -> Option<(usize, usize)>
where
    T: CostNumeric,
{
    let size = mask.size();
    let open_cells = move || {
        (0..size)
            .filter(move |&r| !done.is_row_covered(r))
            .flat_map(move |r| (0..size).map(move |c| (r, c)))
            .filter(move |&(_, c)| !done.is_column_covered(c))
    };
    let by_cost = |a: &(usize, usize), b: &(usize, usize)| {
        costs[*a]
            .partial_cmp(&costs[*b])
            .unwrap_or(std::cmp::Ordering::Equal)
    };

    let mut candidates: Vec<(usize, usize)> =
        open_cells().filter(|&(r, c)| mask.contains(r, c)).collect();

    if candidates.is_empty() {
        let cell = open_cells().min_by(by_cost)?;
        log::warn!(
            "no zero candidate left during extraction; committing ({}, {}) with reduced cost above zero",
            cell.0,
            cell.1
        );
        stats.on_fallback_commit();
        return Some(cell);
    }

    // Stable sort: equal costs keep their row-major order.
    candidates.sort_by(by_cost);
    let chosen = candidates
        .iter()
        .copied()
        .find(|&(r, c)| keeps_full_assignment(mask, done, matching, r, c))
        .unwrap_or(candidates[0]);

    log::trace!(
        "tie among {} candidates resolved at ({}, {})",
        candidates.len(),
        chosen.0,
        chosen.1
    );
    stats.on_tie_break();
    Some(chosen)
}

/// Extracts a permutation from `working` (padded, fully coverable by zeros)
/// and returns the column chosen for each row.
///
/// `costs` is the padded matrix of original costs used for tie-breaking.
pub fn extract<T>(
    working: &Matrix<T>,
    costs: &Matrix<T>,
    tolerance: Tolerance<T>,
    mask: &mut AssignmentMask,
    done: &mut ZeroCover,
    matching: &mut ZeroMatching,
    stats: &mut SolverStatistics,
) -> Vec<usize>
where
    T: CostNumeric,
{
    let size = working.num_rows();
    debug_assert_eq!(
        working.shape(),
        costs.shape(),
        "called `extract` with working and cost matrices of different shapes"
    );

    mask.seed_zeros(working, tolerance);
    done.clear();

    while !done.all_rows_covered() {
        let mut progressed = false;

        for row in 0..size {
            if done.is_row_covered(row) {
                continue;
            }
            if let Some(col) = mask.single_in_row(row) {
                commit(mask, done, row, col);
                stats.on_unique_commit();
                progressed = true;
            }
        }

        for col in 0..size {
            if done.is_column_covered(col) {
                continue;
            }
            if let Some(row) = mask.single_in_column(col) {
                commit(mask, done, row, col);
                stats.on_unique_commit();
                progressed = true;
            }
        }

        if progressed || done.all_rows_covered() {
            continue;
        }

        match break_tie(costs, mask, done, matching, stats) {
            Some((row, col)) => commit(mask, done, row, col),
            None => break,
        }
    }

    debug_assert_eq!(
        mask.count(),
        size,
        "called `extract` and produced {} assignments for size {}",
        mask.count(),
        size
    );
    mask.column_for_each_row()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scratch {
        mask: AssignmentMask,
        done: ZeroCover,
        matching: ZeroMatching,
        stats: SolverStatistics,
    }

    impl Scratch {
        fn new(size: usize) -> Self {
            Self {
                mask: AssignmentMask::new(size),
                done: ZeroCover::new(size),
                matching: ZeroMatching::new(size),
                stats: SolverStatistics::default(),
            }
        }

        fn run(&mut self, working: &Matrix<i64>, costs: &Matrix<i64>) -> Vec<usize> {
            extract(
                working,
                costs,
                Tolerance::exact(),
                &mut self.mask,
                &mut self.done,
                &mut self.matching,
                &mut self.stats,
            )
        }
    }

    fn matrix(rows: Vec<Vec<i64>>) -> Matrix<i64> {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_mask_row_and_column_queries() {
        let mut mask = AssignmentMask::new(3);
        mask.insert(0, 1);
        mask.insert(1, 1);
        mask.insert(1, 2);

        assert_eq!(mask.single_in_row(0), Some(1));
        assert_eq!(mask.single_in_row(1), None);
        assert_eq!(mask.single_in_row(2), None);
        assert_eq!(mask.single_in_column(2), Some(1));
        assert_eq!(mask.single_in_column(1), None);
        assert_eq!(mask.count(), 3);

        mask.clear_row(1);
        assert_eq!(mask.single_in_column(1), Some(0));
        mask.clear_column(1);
        assert_eq!(mask.count(), 0);
    }

    #[test]
    fn test_seed_zeros() {
        let w = matrix(vec![vec![0, 3], vec![0, 0]]);
        let mut mask = AssignmentMask::new(2);
        mask.seed_zeros(&w, Tolerance::exact());
        assert!(mask.contains(0, 0));
        assert!(!mask.contains(0, 1));
        assert_eq!(mask.count(), 3);
    }

    #[test]
    fn test_unique_candidates_resolve_without_tie_break() {
        let w = matrix(vec![vec![0, 4, 0], vec![5, 0, 2], vec![0, 7, 9]]);
        let mut s = Scratch::new(3);
        assert_eq!(s.run(&w, &w), vec![2, 1, 0]);
        assert_eq!(s.stats.tie_breaks, 0);
        assert_eq!(s.stats.fallback_commits, 0);
    }

    #[test]
    fn test_tie_break_prefers_lower_original_cost() {
        let w = matrix(vec![vec![0, 0], vec![0, 0]]);
        let costs = matrix(vec![vec![5, 3], vec![3, 5]]);
        let mut s = Scratch::new(2);
        assert_eq!(s.run(&w, &costs), vec![1, 0]);
        assert_eq!(s.stats.tie_breaks, 1);
    }

    #[test]
    fn test_tie_break_uses_row_major_order_on_equal_costs() {
        let w = matrix(vec![vec![0, 0], vec![0, 0]]);
        let mut s = Scratch::new(2);
        assert_eq!(s.run(&w, &matrix(vec![vec![1, 1], vec![1, 1]])), vec![0, 1]);
    }

    #[test]
    fn test_tie_break_skips_cells_that_block_a_full_assignment() {
        // Rows 2 and 3 only have zeros in columns 0 and 1, so row 0 must not
        // take either of them even though they are cheapest.
        let w = matrix(vec![
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 9, 9],
            vec![0, 0, 9, 9],
        ]);
        let costs = matrix(vec![
            vec![1, 1, 2, 5],
            vec![5, 5, 5, 5],
            vec![5, 5, 9, 9],
            vec![5, 5, 9, 9],
        ]);
        let mut s = Scratch::new(4);
        assert_eq!(s.run(&w, &costs), vec![2, 3, 0, 1]);
        assert_eq!(s.stats.tie_breaks, 2);
        assert_eq!(s.stats.fallback_commits, 0);
    }

    #[test]
    fn test_fallback_commits_non_zero_cell() {
        // Rows 1 and 2 share their only zero; the matrix is not fully
        // coverable, so one commit has to use a positive cell.
        let w = matrix(vec![vec![0, 4, 4], vec![4, 0, 4], vec![4, 0, 4]]);
        let mut s = Scratch::new(3);
        let cols = s.run(&w, &w);
        let mut sorted = cols.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2]);
        assert_eq!(s.stats.fallback_commits, 1);
    }

    #[test]
    fn test_empty_matrix() {
        let w = matrix(Vec::new());
        let mut s = Scratch::new(0);
        assert!(s.run(&w, &w).is_empty());
    }
}
