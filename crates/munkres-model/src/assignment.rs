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

use crate::{
    index::{ColumnIndex, RowIndex},
    matrix::Matrix,
};
use munkres_core::num::cost::CostNumeric;

/// A solved one-to-one pairing between the rows and columns of a cost matrix.
///
/// The assignment is always expressed in the caller's original dimensions.
/// When the cost matrix is rectangular, the surplus rows (or columns) are
/// reported as unassigned (`None`), never as a pairing with padding.
///
/// This struct uses a Structure of Arrays (SoA) layout:
/// `columns_for_rows[r]` is the column assigned to row `r`, and
/// `rows_for_columns[c]` is the inverse mapping, and `costs_for_rows[r]` is
/// the original cost of row `r`'s pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment<T> {
    /// Sum of the original costs over all assigned pairs.
    total_cost: T,
    costs_for_rows: Vec<Option<T>>,
    columns_for_rows: Vec<Option<ColumnIndex>>,
    rows_for_columns: Vec<Option<RowIndex>>,
}

impl<T> Assignment<T>
where
    T: CostNumeric,
{
    /// Builds an assignment from the row-to-column mapping over `costs`.
    ///
    /// The inverse mapping and the total cost are derived from `costs`.
    ///
    /// # Panics
    ///
    /// Panics if `columns_for_rows.len()` differs from the number of rows of
    /// `costs`, if a column is out of bounds, or if a column is used twice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use munkres_model::{assignment::Assignment, index::ColumnIndex, matrix::Matrix};
    /// let costs = Matrix::from_rows(vec![vec![4, 1], vec![2, 8], vec![3, 3]]).unwrap();
    /// let a = Assignment::new(
    ///     &costs,
    ///     vec![Some(ColumnIndex::new(1)), Some(ColumnIndex::new(0)), None],
    /// );
    /// assert_eq!(a.total_cost(), 3);
    /// assert_eq!(a.num_assigned(), 2);
    /// ```
    pub fn new(costs: &Matrix<T>, columns_for_rows: Vec<Option<ColumnIndex>>) -> Self {
        assert_eq!(
            columns_for_rows.len(),
            costs.num_rows(),
            "called `Assignment::new` with inconsistent lengths: columns_for_rows.len() = {}, costs.num_rows() = {}",
            columns_for_rows.len(),
            costs.num_rows()
        );

        let mut rows_for_columns = vec![None; costs.num_cols()];
        let mut costs_for_rows = vec![None; costs.num_rows()];
        let mut total_cost = T::zero();

        for (row, col) in columns_for_rows.iter().enumerate() {
            let Some(col) = col else {
                continue;
            };
            let c = col.get();
            assert!(
                c < costs.num_cols(),
                "called `Assignment::new` with column out of bounds: the len is {} but the index is {}",
                costs.num_cols(),
                c
            );
            assert!(
                rows_for_columns[c].is_none(),
                "called `Assignment::new` with column {} assigned to more than one row",
                c
            );

            rows_for_columns[c] = Some(RowIndex::new(row));
            costs_for_rows[row] = Some(costs[(row, c)]);
            total_cost += costs[(row, c)];
        }

        Self {
            total_cost,
            costs_for_rows,
            columns_for_rows,
            rows_for_columns,
        }
    }

    /// Returns the sum of the original costs over all assigned pairs.
    #[inline]
    pub fn total_cost(&self) -> T {
        self.total_cost
    }
}

impl<T> Assignment<T> {
    /// Returns the number of rows of the original problem.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.columns_for_rows.len()
    }

    /// Returns the number of columns of the original problem.
    #[inline]
    pub fn num_cols(&self) -> usize {
        self.rows_for_columns.len()
    }

    /// Returns the column assigned to `row`, if any.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[inline]
    pub fn column_for_row(&self, row: RowIndex) -> Option<ColumnIndex> {
        self.columns_for_rows[row.get()]
    }

    /// Returns the row assigned to `col`, if any.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    #[inline]
    pub fn row_for_column(&self, col: ColumnIndex) -> Option<RowIndex> {
        self.rows_for_columns[col.get()]
    }

    /// Returns the row-to-column mapping.
    #[inline]
    pub fn columns_for_rows(&self) -> &[Option<ColumnIndex>] {
        &self.columns_for_rows
    }

    /// Returns the column-to-row mapping.
    #[inline]
    pub fn rows_for_columns(&self) -> &[Option<RowIndex>] {
        &self.rows_for_columns
    }

    /// Returns the assigned `(row, column)` pairs in row order.
    pub fn pairs(&self) -> impl Iterator<Item = (RowIndex, ColumnIndex)> + '_ {
        self.columns_for_rows
            .iter()
            .enumerate()
            .filter_map(|(row, col)| col.map(|c| (RowIndex::new(row), c)))
    }

    /// Returns the number of assigned pairs; `min(rows, cols)` for a solved problem.
    #[inline]
    pub fn num_assigned(&self) -> usize {
        self.columns_for_rows.iter().filter(|c| c.is_some()).count()
    }

    /// Returns the 0/1 assignment matrix in original dimensions.
    pub fn to_matrix(&self) -> Matrix<u8> {
        let mut out = Matrix::filled(self.num_rows(), self.num_cols(), 0u8);
        for (row, col) in self.pairs() {
            out[(row.get(), col.get())] = 1;
        }
        out
    }
}

impl<T> std::fmt::Display for Assignment<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Assignment Summary")?;
        writeln!(f, "   Total Cost: {}", self.total_cost)?;
        writeln!(f)?;

        if self.columns_for_rows.is_empty() {
            writeln!(f, "   (No rows)")?;
            return Ok(());
        }

        writeln!(f, "   {:<10} | {:<10} | {:<10}", "Row", "Column", "Cost")?;
        writeln!(f, "   {:-<10}-+-{:-<10}-+-{:-<10}", "", "", "")?;
        let rows = self.columns_for_rows.iter().zip(&self.costs_for_rows);
        for (row, (col, cost)) in rows.enumerate() {
            match (col, cost) {
                (Some(c), Some(cost)) => {
                    writeln!(f, "   {:<10} | {:<10} | {:<10}", row, c.get(), cost)?
                }
                _ => writeln!(f, "   {:<10} | {:<10} | {:<10}", row, "-", "-")?,
            }
        }

        Ok(())
    }
}
