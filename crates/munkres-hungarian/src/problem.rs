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

//! # Hungarian Problem
//!
//! `HungarianProblem` owns a cost matrix and the scratch state of one solve.
//! A rectangular `m x n` matrix is padded to a square of side `max(m, n)`
//! whose extra cells hold a dummy cost above every real cost; results are
//! always reported in the original dimensions, with padded partners reported
//! as unassigned.
//!
//! ```text
//! set_cost_matrix ──▶ ReadyToSolve ──solve──▶ Done
//!        ▲                                     │
//!        └─────────────── (replaces) ──────────┘
//! ```
//!
//! A single instance is not reentrant: every solve reuses the same working
//! matrix, cover and masks.

use crate::{
    augment::augment,
    config::HungarianConfig,
    cover::{ZeroCover, minimum_cover},
    error::{BufferKind, DimensionMismatchError, Dimensions, HungarianError, InvalidInputError},
    extraction::{AssignmentMask, extract},
    matching::ZeroMatching,
    reduction::{ReductionOrder, reduce},
    stats::SolverStatistics,
    status::ProblemStatus,
};
use munkres_core::num::{
    cost::{CostNumeric, is_comparable},
    tolerance::Tolerance,
};
use munkres_model::{assignment::Assignment, index::ColumnIndex, matrix::Matrix};

/// Sentinel written by `write_assignment_results` for unmatched rows and columns.
pub const UNASSIGNED: isize = -1;

/// Scratch state of a problem with a cost matrix.
#[derive(Debug, Clone)]
struct SolverWorkspace<T> {
    /// The caller's matrix in its original dimensions.
    original: Matrix<T>,
    /// `original` padded to a square with the dummy cost.
    costs: Matrix<T>,
    working: Matrix<T>,
    cover: ZeroCover,
    mask: AssignmentMask,
    matching: ZeroMatching,
    tolerance: Tolerance<T>,
    order: ReductionOrder,
    /// Column of each padded row, filled by `solve`.
    solution: Vec<usize>,
}

impl<T> SolverWorkspace<T>
where
    T: CostNumeric,
{
    fn new(original: Matrix<T>, config: &HungarianConfig) -> Result<Self, InvalidInputError> {
        validate(&original)?;

        let (num_rows, num_cols) = original.shape();
        let size = num_rows.max(num_cols);
        let costs = if num_rows == num_cols {
            original.clone()
        } else {
            let dummy = dummy_cost(&original, config.dummy_margin())?;
            original.padded(size, size, dummy)
        };
        check_cost_range(&costs)?;

        Ok(Self {
            working: costs.clone(),
            costs,
            original,
            cover: ZeroCover::new(size),
            mask: AssignmentMask::new(size),
            matching: ZeroMatching::new(size),
            tolerance: Tolerance::from_f64(config.tolerance()),
            order: ReductionOrder::for_shape(num_rows, num_cols),
            solution: Vec::with_capacity(size),
        })
    }

    #[inline]
    fn size(&self) -> usize {
        self.costs.num_rows()
    }

    /// Iterates the solved pairs that lie inside the original dimensions.
    fn real_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (num_rows, num_cols) = self.original.shape();
        self.solution
            .iter()
            .copied()
            .enumerate()
            .take(num_rows)
            .filter(move |&(_, col)| col < num_cols)
    }
}

/// Rejects the first entry, in row-major order, that is not a comparable
/// non-negative value.
fn validate<T>(costs: &Matrix<T>) -> Result<(), InvalidInputError>
where
    T: CostNumeric,
{
    for ((row, col), value) in costs.iter_indexed() {
        if !is_comparable(value) {
            return Err(InvalidInputError::NotComparable { row, col });
        }
        if *value < T::zero() {
            return Err(InvalidInputError::NegativeCost { row, col });
        }
    }
    Ok(())
}

/// Returns `max(costs) + margin`, with the margin converted into `T`.
///
/// A margin that truncates to zero in `T` is replaced by one, so the dummy
/// cost always exceeds every real cost.
fn dummy_cost<T>(costs: &Matrix<T>, margin: f64) -> Result<T, InvalidInputError>
where
    T: CostNumeric,
{
    let max = costs.max_element().unwrap_or_else(T::zero);
    let margin = match <T as num_traits::NumCast>::from(margin) {
        Some(m) if m > T::zero() => m,
        Some(_) => T::one(),
        None => return Err(InvalidInputError::DummyCostOverflow),
    };
    if max > T::max_value() - margin {
        return Err(InvalidInputError::DummyCostOverflow);
    }

    // Floating-point addition can absorb the margin entirely.
    let dummy = max + margin;
    if dummy <= max {
        return Err(InvalidInputError::DummyCostOverflow);
    }
    Ok(dummy)
}

/// Rejects padded costs whose working values may leave the range of `T`.
///
/// Augmentation raises cells on covered intersections, but every working value
/// stays at most `size * max(costs)`: the reduced cost of a cell is its cost
/// minus two potentials, and those potentials are bounded below by the cost of
/// matching the remaining `size - 1` rows.
fn check_cost_range<T>(costs: &Matrix<T>) -> Result<(), InvalidInputError>
where
    T: CostNumeric,
{
    let size = costs.num_rows();
    let Some(max) = costs.max_element() else {
        return Ok(());
    };
    if size <= 1 || max <= T::zero() {
        return Ok(());
    }

    let fits =
        <T as num_traits::NumCast>::from(size).is_some_and(|n| max <= T::max_value() / n);
    if fits {
        Ok(())
    } else {
        Err(InvalidInputError::CostRangeOverflow { size })
    }
}

/// A linear assignment problem solved with the Hungarian method.
///
/// # Examples
///
/// ```rust
/// # use munkres_hungarian::problem::HungarianProblem;
/// # use munkres_model::matrix::Matrix;
/// let costs = Matrix::from_rows(vec![vec![4, 1, 3], vec![2, 0, 5]]).unwrap();
/// let mut problem = HungarianProblem::from_cost_matrix(costs).unwrap();
/// problem.solve().unwrap();
///
/// let assignment = problem.assignment().unwrap();
/// assert_eq!(assignment.total_cost(), 3);
/// assert_eq!(assignment.num_assigned(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct HungarianProblem<T> {
    config: HungarianConfig,
    status: ProblemStatus,
    workspace: Option<SolverWorkspace<T>>,
    stats: SolverStatistics,
}

impl<T> Default for HungarianProblem<T>
where
    T: CostNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HungarianProblem<T>
where
    T: CostNumeric,
{
    /// Creates a problem without a cost matrix, using the default configuration.
    #[inline]
    pub fn new() -> Self {
        Self::with_config(HungarianConfig::default())
    }

    /// Creates a problem without a cost matrix.
    #[inline]
    pub fn with_config(config: HungarianConfig) -> Self {
        Self {
            config,
            status: ProblemStatus::NotReady,
            workspace: None,
            stats: SolverStatistics::default(),
        }
    }

    /// Creates a problem ready to solve `costs` with the default configuration.
    pub fn from_cost_matrix(costs: Matrix<T>) -> Result<Self, HungarianError> {
        let mut problem = Self::new();
        problem.set_cost_matrix(costs)?;
        Ok(problem)
    }

    /// Replaces the cost matrix and resets the problem to `ReadyToSolve`.
    ///
    /// # Errors
    ///
    /// Returns `HungarianError::InvalidInput` if an entry is negative or not
    /// comparable, or if the padding cost overflows `T`. The problem is left
    /// unchanged in that case.
    pub fn set_cost_matrix(&mut self, costs: Matrix<T>) -> Result<(), HungarianError> {
        let workspace = SolverWorkspace::new(costs, &self.config)?;

        self.stats = SolverStatistics::new(workspace.size());
        self.workspace = Some(workspace);
        self.status = ProblemStatus::ReadyToSolve;
        Ok(())
    }

    /// Returns the cost matrix in its original dimensions.
    ///
    /// # Errors
    ///
    /// Returns `HungarianError::NotReady` if no cost matrix has been set.
    #[inline]
    pub fn cost_matrix(&self) -> Result<&Matrix<T>, HungarianError> {
        self.workspace
            .as_ref()
            .map(|ws| &ws.original)
            .ok_or(HungarianError::NotReady)
    }

    /// Copies the cost matrix into `out`, which must have the original dimensions.
    ///
    /// # Errors
    ///
    /// Returns `HungarianError::NotReady` if no cost matrix has been set, and
    /// `HungarianError::DimensionMismatch` if `out` has a different shape.
    pub fn copy_cost_matrix_into(&self, out: &mut Matrix<T>) -> Result<(), HungarianError> {
        let original = self.cost_matrix()?;
        check_matrix_shape(BufferKind::CostMatrix, original.shape(), out.shape())?;
        original.copy_block_into(out);
        Ok(())
    }

    /// Solves the problem and returns the statistics of this run.
    ///
    /// Solving again recomputes the same assignment from the stored costs.
    ///
    /// # Errors
    ///
    /// Returns `HungarianError::NotReady` if no cost matrix has been set.
    pub fn solve(&mut self) -> Result<&SolverStatistics, HungarianError> {
        let ws = self.workspace.as_mut().ok_or(HungarianError::NotReady)?;
        let start_time = std::time::Instant::now();
        let size = ws.size();
        let mut stats = SolverStatistics::new(size);

        log::debug!(
            "solving {}x{} assignment problem (padded size {}, {:?})",
            ws.original.num_rows(),
            ws.original.num_cols(),
            size,
            ws.order
        );

        ws.working.clone_from(&ws.costs);
        reduce(&mut ws.working, ws.order, ws.tolerance);

        loop {
            let lines = minimum_cover(
                &ws.working,
                ws.tolerance,
                &mut ws.cover,
                &mut ws.matching,
                &mut stats,
            );
            if lines >= size {
                break;
            }

            // Fewer lines than rows leaves at least one cell uncovered.
            let Some(shift) = augment(&mut ws.working, &ws.cover) else {
                break;
            };
            stats.on_augmentation();
            log::trace!(
                "augmentation {}: {} lines, shifted uncovered cells by {}",
                stats.augmentations,
                lines,
                shift
            );
        }

        ws.solution = extract(
            &ws.working,
            &ws.costs,
            ws.tolerance,
            &mut ws.mask,
            &mut ws.cover,
            &mut ws.matching,
            &mut stats,
        );

        stats.set_total_time(start_time.elapsed());
        log::debug!(
            "solved in {:?} after {} augmentations",
            stats.time_total,
            stats.augmentations
        );

        self.stats = stats;
        self.status = ProblemStatus::Done;
        Ok(&self.stats)
    }

    /// Returns the workspace of a solved problem.
    #[inline]
    fn solved(&self) -> Result<&SolverWorkspace<T>, HungarianError> {
        match (&self.workspace, self.status) {
            (Some(ws), ProblemStatus::Done) => Ok(ws),
            _ => Err(HungarianError::NotSolved),
        }
    }

    /// Writes the 0/1 assignment matrix into `out`, which must have the
    /// original dimensions.
    ///
    /// # Errors
    ///
    /// Returns `HungarianError::NotSolved` before a successful `solve`, and
    /// `HungarianError::DimensionMismatch` if `out` has a different shape.
    pub fn write_assignment_matrix(&self, out: &mut Matrix<u8>) -> Result<(), HungarianError> {
        let ws = self.solved()?;
        check_matrix_shape(BufferKind::AssignmentMatrix, ws.original.shape(), out.shape())?;

        out.fill(0);
        for (row, col) in ws.real_pairs() {
            out[(row, col)] = 1;
        }
        Ok(())
    }

    /// Returns the 0/1 assignment matrix in the original dimensions.
    ///
    /// # Errors
    ///
    /// Returns `HungarianError::NotSolved` before a successful `solve`.
    pub fn assignment_matrix(&self) -> Result<Matrix<u8>, HungarianError> {
        let (num_rows, num_cols) = self.solved()?.original.shape();
        let mut out = Matrix::filled(num_rows, num_cols, 0);
        self.write_assignment_matrix(&mut out)?;
        Ok(out)
    }

    /// Writes the column of each row into `row_indices` and the row of each
    /// column into `column_indices`, using `UNASSIGNED` for unmatched entries.
    ///
    /// # Errors
    ///
    /// Returns `HungarianError::NotSolved` before a successful `solve`, and
    /// `HungarianError::DimensionMismatch` if a slice length differs from the
    /// original number of rows or columns.
    pub fn write_assignment_results(
        &self,
        row_indices: &mut [isize],
        column_indices: &mut [isize],
    ) -> Result<(), HungarianError> {
        let ws = self.solved()?;
        let (num_rows, num_cols) = ws.original.shape();
        check_vector_len(BufferKind::RowIndices, num_rows, row_indices.len())?;
        check_vector_len(BufferKind::ColumnIndices, num_cols, column_indices.len())?;

        row_indices.fill(UNASSIGNED);
        column_indices.fill(UNASSIGNED);
        for (row, col) in ws.real_pairs() {
            row_indices[row] = col as isize;
            column_indices[col] = row as isize;
        }
        Ok(())
    }

    /// Returns the solved assignment in the original dimensions.
    ///
    /// # Errors
    ///
    /// Returns `HungarianError::NotSolved` before a successful `solve`.
    pub fn assignment(&self) -> Result<Assignment<T>, HungarianError> {
        let ws = self.solved()?;
        let mut columns_for_rows = vec![None; ws.original.num_rows()];
        for (row, col) in ws.real_pairs() {
            columns_for_rows[row] = Some(ColumnIndex::new(col));
        }
        Ok(Assignment::new(&ws.original, columns_for_rows))
    }

    #[inline]
    pub fn status(&self) -> ProblemStatus {
        self.status
    }

    #[inline]
    pub fn config(&self) -> &HungarianConfig {
        &self.config
    }

    /// Returns the statistics of the last solve.
    #[inline]
    pub fn statistics(&self) -> &SolverStatistics {
        &self.stats
    }

    /// Returns the padded side length, or `None` if no cost matrix has been set.
    #[inline]
    pub fn matrix_size(&self) -> Option<usize> {
        self.workspace.as_ref().map(SolverWorkspace::size)
    }
}

impl<T> std::fmt::Display for HungarianProblem<T>
where
    T: CostNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.workspace {
            Some(ws) => write!(
                f,
                "HungarianProblem({}x{}, size: {}, status: {})",
                ws.original.num_rows(),
                ws.original.num_cols(),
                ws.size(),
                self.status
            ),
            None => write!(f, "HungarianProblem(status: {})", self.status),
        }
    }
}

#[inline]
fn check_matrix_shape(
    buffer: BufferKind,
    expected: (usize, usize),
    actual: (usize, usize),
) -> Result<(), DimensionMismatchError> {
    if expected == actual {
        return Ok(());
    }
    Err(DimensionMismatchError {
        buffer,
        expected: Dimensions::Matrix {
            rows: expected.0,
            cols: expected.1,
        },
        actual: Dimensions::Matrix {
            rows: actual.0,
            cols: actual.1,
        },
    })
}

#[inline]
fn check_vector_len(
    buffer: BufferKind,
    expected: usize,
    actual: usize,
) -> Result<(), DimensionMismatchError> {
    if expected == actual {
        return Ok(());
    }
    Err(DimensionMismatchError {
        buffer,
        expected: Dimensions::Vector(expected),
        actual: Dimensions::Vector(actual),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HungarianConfigBuilder;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn matrix<T: Clone>(rows: Vec<Vec<T>>) -> Matrix<T> {
        Matrix::from_rows(rows).unwrap()
    }

    fn solved<T: CostNumeric>(costs: Matrix<T>) -> HungarianProblem<T> {
        let mut problem = HungarianProblem::from_cost_matrix(costs).unwrap();
        problem.solve().unwrap();
        problem
    }

    fn results<T: CostNumeric>(problem: &HungarianProblem<T>) -> (Vec<isize>, Vec<isize>) {
        let (num_rows, num_cols) = problem.cost_matrix().unwrap().shape();
        let mut rows = vec![0; num_rows];
        let mut cols = vec![0; num_cols];
        problem.write_assignment_results(&mut rows, &mut cols).unwrap();
        (rows, cols)
    }

    /// Minimum total cost over all one-to-one pairings, by enumeration.
    fn brute_force<T: CostNumeric>(costs: &Matrix<T>) -> T {
        fn go<T: CostNumeric>(
            costs: &Matrix<T>,
            row: usize,
            used: &mut [bool],
            skips_left: usize,
            acc: T,
            best: &mut Option<T>,
        ) {
            if row == costs.num_rows() {
                if best.is_none_or(|b| acc < b) {
                    *best = Some(acc);
                }
                return;
            }
            if skips_left > 0 {
                go(costs, row + 1, used, skips_left - 1, acc, best);
            }
            for col in 0..costs.num_cols() {
                if !used[col] {
                    used[col] = true;
                    go(costs, row + 1, used, skips_left, acc + costs[(row, col)], best);
                    used[col] = false;
                }
            }
        }

        let mut used = vec![false; costs.num_cols()];
        let skips = costs.num_rows().saturating_sub(costs.num_cols());
        let mut best = None;
        go(costs, 0, &mut used, skips, T::zero(), &mut best);
        best.unwrap_or_else(T::zero)
    }

    fn assert_is_partial_permutation(assignment: &Matrix<u8>) {
        let (num_rows, num_cols) = assignment.shape();
        for r in 0..num_rows {
            assert!(assignment.row(r).iter().map(|&v| v as usize).sum::<usize>() <= 1);
        }
        for c in 0..num_cols {
            assert!(assignment.column(c).map(|&v| v as usize).sum::<usize>() <= 1);
        }
        let ones = assignment.as_slice().iter().filter(|&&v| v == 1).count();
        assert_eq!(ones, num_rows.min(num_cols));
    }

    #[test]
    fn test_square_integer_scenario() {
        let problem = solved(matrix(vec![
            vec![40, 60, 15],
            vec![25, 30, 45],
            vec![55, 30, 25],
        ]));

        assert_eq!(problem.status(), ProblemStatus::Done);
        assert_eq!(
            problem.assignment_matrix().unwrap(),
            matrix(vec![vec![0, 0, 1], vec![1, 0, 0], vec![0, 1, 0]])
        );
        assert_eq!(results(&problem), (vec![2, 0, 1], vec![1, 2, 0]));
        assert_eq!(problem.assignment().unwrap().total_cost(), 70);
    }

    #[test]
    fn test_square_float_scenario() {
        let problem = solved(matrix::<f64>(vec![
            vec![4.9, 2.6, 5.2, 7.8],
            vec![8.1, 3.2, 10.1, 8.3],
            vec![12.8, 5.3, 4.5, 5.1],
            vec![6.2, 3.1, 7.9, 14.5],
        ]));

        assert_eq!(
            problem.assignment_matrix().unwrap(),
            matrix(vec![
                vec![0, 0, 1, 0],
                vec![0, 1, 0, 0],
                vec![0, 0, 0, 1],
                vec![1, 0, 0, 0],
            ])
        );
        assert_eq!(results(&problem), (vec![2, 1, 3, 0], vec![3, 1, 0, 2]));
        assert!((problem.assignment().unwrap().total_cost() - 19.7).abs() < 1e-9);
    }

    #[test]
    fn test_tall_rectangular_scenario() {
        let problem = solved(matrix::<f64>(vec![
            vec![18.0, 11.0, 16.9, 22.0],
            vec![14.0, 19.0, 26.0, 18.0],
            vec![21.0, 23.0, 35.0, 29.0],
            vec![42.0, 27.0, 21.0, 17.0],
            vec![16.0, 15.0, 28.0, 25.0],
        ]));

        assert_eq!(problem.matrix_size(), Some(5));
        assert_eq!(
            results(&problem),
            (vec![2, 0, UNASSIGNED, 3, 1], vec![1, 4, 0, 3])
        );

        let assignment_matrix = problem.assignment_matrix().unwrap();
        assert_is_partial_permutation(&assignment_matrix);
        assert_eq!(assignment_matrix.row(2), &[0, 0, 0, 0]);

        let assignment = problem.assignment().unwrap();
        assert_eq!(assignment.num_assigned(), 4);
        assert!((assignment.total_cost() - 62.9).abs() < 1e-9);
    }

    #[test]
    fn test_wide_rectangular_reports_unassigned_columns() {
        let problem = solved(matrix(vec![vec![7, 3, 9, 1], vec![2, 8, 6, 4]]));
        let (rows, cols) = results(&problem);

        assert_eq!(rows, vec![3, 0]);
        assert_eq!(cols, vec![1, UNASSIGNED, UNASSIGNED, 0]);
        assert_eq!(problem.assignment().unwrap().total_cost(), 3);
    }

    #[test]
    fn test_negative_entry_is_rejected_without_mutation() {
        let mut problem = HungarianProblem::new();
        let err = problem
            .set_cost_matrix(matrix(vec![vec![1, 2], vec![3, -4]]))
            .unwrap_err();

        assert_eq!(
            err,
            HungarianError::InvalidInput(InvalidInputError::NegativeCost { row: 1, col: 1 })
        );
        assert_eq!(problem.status(), ProblemStatus::NotReady);
        assert_eq!(problem.cost_matrix(), Err(HungarianError::NotReady));
    }

    #[test]
    fn test_rejected_matrix_keeps_previous_solution() {
        let mut problem = solved(matrix(vec![vec![1, 2], vec![2, 1]]));
        let before = problem.assignment_matrix().unwrap();

        assert!(
            problem
                .set_cost_matrix(matrix(vec![vec![-1, 0], vec![0, 0]]))
                .is_err()
        );
        assert_eq!(problem.status(), ProblemStatus::Done);
        assert_eq!(problem.assignment_matrix().unwrap(), before);
    }

    #[test]
    fn test_nan_is_rejected() {
        let err = HungarianProblem::from_cost_matrix(matrix(vec![vec![1.0, f64::NAN]]))
            .unwrap_err();
        assert_eq!(
            err,
            HungarianError::InvalidInput(InvalidInputError::NotComparable { row: 0, col: 1 })
        );
    }

    #[test]
    fn test_dummy_cost_overflow_is_rejected() {
        let err = HungarianProblem::<u8>::from_cost_matrix(matrix(vec![vec![200, 10]]))
            .unwrap_err();
        assert_eq!(
            err,
            HungarianError::InvalidInput(InvalidInputError::DummyCostOverflow)
        );

        // Square matrices are never padded.
        assert!(HungarianProblem::<u8>::from_cost_matrix(matrix(vec![vec![255]])).is_ok());
    }

    #[test]
    fn test_dummy_cost_absorbed_by_float_rounding_is_rejected() {
        let err = HungarianProblem::from_cost_matrix(matrix(vec![vec![1e300_f64, 0.0]]))
            .unwrap_err();
        assert_eq!(
            err,
            HungarianError::InvalidInput(InvalidInputError::DummyCostOverflow)
        );

        assert!(HungarianProblem::from_cost_matrix(matrix(vec![vec![1e6_f64, 0.0]])).is_ok());
    }

    #[test]
    fn test_costs_that_can_overflow_working_values_are_rejected() {
        let mut problem = HungarianProblem::<u8>::new();
        let err = problem
            .set_cost_matrix(matrix(vec![
                vec![38, 54, 171],
                vec![186, 9, 133],
                vec![90, 200, 12],
            ]))
            .unwrap_err();
        assert_eq!(
            err,
            HungarianError::InvalidInput(InvalidInputError::CostRangeOverflow { size: 3 })
        );
        assert_eq!(problem.status(), ProblemStatus::NotReady);

        // 3 * 85 = 255 still fits.
        problem
            .set_cost_matrix(matrix(vec![
                vec![38, 54, 85],
                vec![85, 9, 33],
                vec![60, 85, 12],
            ]))
            .unwrap();
        problem.solve().unwrap();
        assert_eq!(problem.assignment().unwrap().total_cost(), 38 + 9 + 12);
    }

    #[test]
    fn test_random_u8_instances_never_overflow() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut problem = HungarianProblem::<u8>::new();
        let mut solved_count = 0;

        for _ in 0..2000 {
            let num_rows = rng.random_range(1..=6);
            let num_cols = rng.random_range(1..=6);
            let max = if rng.random_bool(0.5) {
                u8::MAX
            } else {
                u8::MAX / num_rows.max(num_cols) as u8
            };
            let data = (0..num_rows * num_cols)
                .map(|_| rng.random_range(0..=max))
                .collect::<Vec<u8>>();
            let costs = Matrix::from_vec(num_rows, num_cols, data).unwrap();

            match problem.set_cost_matrix(costs.clone()) {
                Ok(()) => {}
                Err(HungarianError::InvalidInput(
                    InvalidInputError::CostRangeOverflow { .. }
                    | InvalidInputError::DummyCostOverflow,
                )) => continue,
                Err(e) => panic!("unexpected error {e} for\n{costs}"),
            }

            problem.solve().unwrap();
            let assignment = problem.assignment().unwrap();
            assert_eq!(assignment.num_assigned(), num_rows.min(num_cols));
            assert_eq!(
                assignment.total_cost(),
                brute_force(&costs),
                "suboptimal assignment for\n{}",
                costs
            );
            solved_count += 1;
        }

        assert!(solved_count > 0);
    }

    #[test]
    fn test_fractional_margin_still_pads_above_max() {
        let config = HungarianConfigBuilder::new().with_dummy_margin(0.5).build();
        let mut problem = HungarianProblem::with_config(config);
        problem
            .set_cost_matrix(matrix(vec![vec![5, 5], vec![5, 5], vec![5, 5]]))
            .unwrap();
        problem.solve().unwrap();

        let assignment = problem.assignment().unwrap();
        assert_eq!(assignment.num_assigned(), 2);
        assert_eq!(assignment.total_cost(), 10);
    }

    #[test]
    fn test_reading_results_before_solve_fails() {
        let mut problem = HungarianProblem::<i32>::new();
        let mut out = Matrix::filled(2, 2, 0);
        assert_eq!(
            problem.write_assignment_matrix(&mut out),
            Err(HungarianError::NotSolved)
        );
        assert_eq!(problem.solve().unwrap_err(), HungarianError::NotReady);

        problem
            .set_cost_matrix(matrix(vec![vec![1, 2], vec![3, 4]]))
            .unwrap();
        assert_eq!(problem.status(), ProblemStatus::ReadyToSolve);
        assert_eq!(
            problem.write_assignment_matrix(&mut out),
            Err(HungarianError::NotSolved)
        );
        assert_eq!(problem.assignment(), Err(HungarianError::NotSolved));
    }

    #[test]
    fn test_output_buffers_must_match_original_dimensions() {
        let problem = solved(matrix(vec![vec![1, 2], vec![3, 4], vec![5, 6]]));

        let mut square = Matrix::filled(3, 3, 0u8);
        let err = problem.write_assignment_matrix(&mut square).unwrap_err();
        assert_eq!(
            err,
            HungarianError::DimensionMismatch(DimensionMismatchError {
                buffer: BufferKind::AssignmentMatrix,
                expected: Dimensions::Matrix { rows: 3, cols: 2 },
                actual: Dimensions::Matrix { rows: 3, cols: 3 },
            })
        );

        let mut rows = vec![0; 3];
        let mut cols = vec![0; 3];
        let err = problem
            .write_assignment_results(&mut rows, &mut cols)
            .unwrap_err();
        assert_eq!(
            err,
            HungarianError::DimensionMismatch(DimensionMismatchError {
                buffer: BufferKind::ColumnIndices,
                expected: Dimensions::Vector(2),
                actual: Dimensions::Vector(3),
            })
        );

        let mut costs = Matrix::filled(2, 3, 0);
        assert!(matches!(
            problem.copy_cost_matrix_into(&mut costs),
            Err(HungarianError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_copy_cost_matrix_returns_unpadded_original() {
        let original = matrix(vec![vec![3, 1, 4], vec![1, 5, 9]]);
        let problem = HungarianProblem::from_cost_matrix(original.clone()).unwrap();

        let mut out = Matrix::filled(2, 3, 0);
        problem.copy_cost_matrix_into(&mut out).unwrap();
        assert_eq!(out, original);
        assert_eq!(problem.matrix_size(), Some(3));

        let empty = HungarianProblem::<i32>::new();
        assert_eq!(
            empty.copy_cost_matrix_into(&mut out),
            Err(HungarianError::NotReady)
        );
    }

    #[test]
    fn test_solve_twice_gives_same_assignment() {
        let mut problem = HungarianProblem::from_cost_matrix(matrix(vec![
            vec![9, 2, 7, 8],
            vec![6, 4, 3, 7],
            vec![5, 8, 1, 8],
            vec![7, 6, 9, 4],
        ]))
        .unwrap();

        problem.solve().unwrap();
        let first = problem.assignment().unwrap();
        problem.solve().unwrap();
        assert_eq!(problem.assignment().unwrap(), first);
        assert_eq!(first.total_cost(), 13);
    }

    #[test]
    fn test_set_cost_matrix_resets_to_ready() {
        let mut problem = solved(matrix(vec![vec![1, 2], vec![2, 1]]));
        problem.set_cost_matrix(matrix(vec![vec![4, 2, 8]])).unwrap();

        assert_eq!(problem.status(), ProblemStatus::ReadyToSolve);
        assert_eq!(problem.statistics().augmentations, 0);
        assert_eq!(problem.assignment_matrix(), Err(HungarianError::NotSolved));

        problem.solve().unwrap();
        assert_eq!(
            problem.assignment_matrix().unwrap(),
            matrix(vec![vec![0, 1, 0]])
        );
    }

    #[test]
    fn test_empty_matrices_solve_to_empty_assignments() {
        let problem = solved(Matrix::<i32>::filled(0, 0, 0));
        assert_eq!(problem.matrix_size(), Some(0));
        assert_eq!(problem.assignment().unwrap().num_assigned(), 0);

        let problem = solved(Matrix::<i32>::filled(0, 3, 0));
        let (rows, cols) = results(&problem);
        assert!(rows.is_empty());
        assert_eq!(cols, vec![UNASSIGNED; 3]);
    }

    #[test]
    fn test_unsigned_costs() {
        let problem = solved(matrix(vec![vec![3u32, 8, 2], vec![7, 1, 9]]));
        assert_eq!(results(&problem).0, vec![2, 1]);
        assert_eq!(problem.assignment().unwrap().total_cost(), 3);
    }

    #[test]
    fn test_all_equal_costs() {
        let problem = solved(Matrix::filled(4, 4, 7));
        assert_is_partial_permutation(&problem.assignment_matrix().unwrap());
        assert_eq!(problem.assignment().unwrap().total_cost(), 28);
    }

    #[test]
    fn test_statistics_are_reported() {
        let mut problem = HungarianProblem::from_cost_matrix(matrix(vec![
            vec![40, 60, 15],
            vec![25, 30, 45],
            vec![55, 30, 25],
        ]))
        .unwrap();
        let stats = problem.solve().unwrap();

        assert_eq!(stats.matrix_size, 3);
        assert!(stats.cover_passes >= 1);
        assert_eq!(stats.cover_passes, stats.augmentations + 1);
        assert_eq!(stats.fallback_commits, 0);
    }

    #[test]
    fn test_display() {
        let problem = HungarianProblem::<i32>::new();
        assert_eq!(problem.to_string(), "HungarianProblem(status: NotReady)");

        let problem = solved(matrix(vec![vec![1, 2, 3]]));
        assert_eq!(
            problem.to_string(),
            "HungarianProblem(1x3, size: 3, status: Done)"
        );
    }

    #[test]
    fn test_random_integer_instances_are_optimal() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut problem = HungarianProblem::new();

        for _ in 0..400 {
            let num_rows = rng.random_range(1..=6);
            let num_cols = rng.random_range(1..=6);
            let max = rng.random_range(1..=30);
            let data = (0..num_rows * num_cols)
                .map(|_| rng.random_range(0..=max))
                .collect::<Vec<i64>>();
            let costs = Matrix::from_vec(num_rows, num_cols, data).unwrap();

            problem.set_cost_matrix(costs.clone()).unwrap();
            let stats = problem.solve().unwrap();
            assert_eq!(stats.fallback_commits, 0, "fallback on\n{}", costs);

            let assignment = problem.assignment().unwrap();
            assert_eq!(assignment.num_assigned(), num_rows.min(num_cols));
            assert_eq!(
                assignment.total_cost(),
                brute_force(&costs),
                "suboptimal assignment for\n{}",
                costs
            );
            assert_is_partial_permutation(&problem.assignment_matrix().unwrap());
        }
    }

    #[test]
    fn test_random_float_instances_are_optimal() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut problem = HungarianProblem::new();

        for _ in 0..300 {
            let num_rows = rng.random_range(1..=6);
            let num_cols = rng.random_range(1..=6);
            let data = (0..num_rows * num_cols)
                .map(|_| rng.random_range(0.0..100.0))
                .collect::<Vec<f64>>();
            let costs = Matrix::from_vec(num_rows, num_cols, data).unwrap();

            problem.set_cost_matrix(costs.clone()).unwrap();
            problem.solve().unwrap();

            let assignment = problem.assignment().unwrap();
            assert_eq!(assignment.num_assigned(), num_rows.min(num_cols));
            assert!(
                (assignment.total_cost() - brute_force(&costs)).abs() < 1e-5,
                "suboptimal assignment for\n{}",
                costs
            );
        }
    }

    #[test]
    fn test_permuting_rows_keeps_optimal_cost() {
        let rows = vec![
            vec![12, 7, 9, 7, 9],
            vec![8, 9, 6, 6, 6],
            vec![7, 17, 12, 14, 9],
            vec![15, 14, 6, 6, 10],
            vec![4, 10, 7, 10, 9],
        ];
        let mut reversed = rows.clone();
        reversed.reverse();

        let a = solved(matrix(rows)).assignment().unwrap().total_cost();
        let b = solved(matrix(reversed)).assignment().unwrap().total_cost();
        assert_eq!(a, b);
        assert_eq!(a, 32);
    }
}
