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

//! # Dense Matrices
//!
//! `Matrix<T>` is a minimal row-major grid. It is deliberately not a linear
//! algebra type: it stores values, reports its shape, and hands out rows,
//! columns and cells. Everything an assignment solver reads or writes, from the
//! caller's cost matrix to the 0/1 assignment buffer, is a `Matrix`.
//!
//! Data lives in one flat `Vec<T>` so that a row is a contiguous slice, which
//! is what the row-major scans of the solver want.

use munkres_core::num::cost::max_of;

/// The error type for constructing a `Matrix` from inconsistent data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// The flat data does not contain `rows * cols` elements.
    #[error("expected {expected} elements for a {rows}x{cols} matrix, got {actual}")]
    LengthMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },
    /// A row of a nested input has a different length than the first row.
    #[error("row {row} has {actual} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// `rows * cols` does not fit into `usize`.
    #[error("a {rows}x{cols} matrix exceeds the addressable size")]
    Overflow { rows: usize, cols: usize },
}

/// A dense, row-major matrix.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    num_rows: usize,
    num_cols: usize,
    data: Vec<T>,
}

impl<T> Matrix<T> {
    /// Creates a matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::LengthMismatch` if `data.len() != rows * cols`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use munkres_model::matrix::Matrix;
    /// let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(m[(1, 0)], 4);
    /// assert!(Matrix::from_vec(2, 2, vec![1, 2, 3]).is_err());
    /// ```
    pub fn from_vec(num_rows: usize, num_cols: usize, data: Vec<T>) -> Result<Self, ShapeError> {
        let expected = num_rows
            .checked_mul(num_cols)
            .ok_or(ShapeError::Overflow {
                rows: num_rows,
                cols: num_cols,
            })?;

        if data.len() != expected {
            return Err(ShapeError::LengthMismatch {
                rows: num_rows,
                cols: num_cols,
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            num_rows,
            num_cols,
            data,
        })
    }

    /// Creates a matrix from a list of rows.
    ///
    /// An empty list produces a `0x0` matrix.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::RaggedRow` if the rows differ in length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use munkres_model::matrix::Matrix;
    /// let m = Matrix::from_rows(vec![vec![40, 60, 15], vec![25, 30, 45]]).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert!(Matrix::from_rows(vec![vec![1, 2], vec![3]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ShapeError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);

        let mut data = Vec::with_capacity(num_rows.saturating_mul(num_cols));
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != num_cols {
                return Err(ShapeError::RaggedRow {
                    row,
                    expected: num_cols,
                    actual: values.len(),
                });
            }
            data.extend(values);
        }

        Ok(Self {
            num_rows,
            num_cols,
            data,
        })
    }

    /// Returns the number of rows.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[inline]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    /// Returns `true` if the matrix has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Returns `true` if the matrix has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a reference to the cell at `(row, col)`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.num_rows && col < self.num_cols {
            Some(&self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns row `row` as a contiguous slice.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        assert!(
            row < self.num_rows,
            "called `Matrix::row` with row index out of bounds: the len is {} but the index is {}",
            self.num_rows,
            row
        );

        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Returns row `row` as a mutable contiguous slice.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        assert!(
            row < self.num_rows,
            "called `Matrix::row_mut` with row index out of bounds: the len is {} but the index is {}",
            self.num_rows,
            row
        );

        let start = row * self.num_cols;
        &mut self.data[start..start + self.num_cols]
    }

    /// Returns an iterator over the cells of column `col`, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    #[inline]
    pub fn column(&self, col: usize) -> impl ExactSizeIterator<Item = &T> {
        assert!(
            col < self.num_cols,
            "called `Matrix::column` with column index out of bounds: the len is {} but the index is {}",
            self.num_cols,
            col
        );

        (0..self.num_rows).map(move |row| &self.data[row * self.num_cols + col])
    }

    /// Returns an iterator over rows as slices.
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // `chunks_exact(0)` panics; a matrix without columns has empty rows.
        (0..self.num_rows).map(move |row| {
            let start = row * self.num_cols;
            &self.data[start..start + self.num_cols]
        })
    }

    /// Returns an iterator over `((row, col), &value)` in row-major order.
    #[inline]
    pub fn iter_indexed(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        let cols = self.num_cols;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, v)| ((i / cols, i % cols), v))
    }

    /// Returns the row-major data.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Matrix<T>
where
    T: Clone,
{
    /// Creates a `rows x cols` matrix with every cell set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn filled(num_rows: usize, num_cols: usize, value: T) -> Self {
        let len = num_rows.checked_mul(num_cols).unwrap_or_else(|| {
            panic!(
                "called `Matrix::filled` with a shape that overflows usize: {}x{}",
                num_rows, num_cols
            )
        });

        Self {
            num_rows,
            num_cols,
            data: vec![value; len],
        }
    }

    /// Sets every cell to `value`.
    #[inline]
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Returns a copy of this matrix embedded in the top-left corner of a
    /// larger `rows x cols` matrix whose remaining cells hold `value`.
    ///
    /// # Panics
    ///
    /// Panics if the target shape is smaller than the current shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use munkres_model::matrix::Matrix;
    /// let m = Matrix::from_rows(vec![vec![1, 2, 3]]).unwrap();
    /// let p = m.padded(3, 3, 9);
    /// assert_eq!(p.row(0), &[1, 2, 3]);
    /// assert_eq!(p.row(2), &[9, 9, 9]);
    /// ```
    pub fn padded(&self, num_rows: usize, num_cols: usize, value: T) -> Self {
        assert!(
            num_rows >= self.num_rows && num_cols >= self.num_cols,
            "called `Matrix::padded` with a target shape {}x{} smaller than the current shape {}x{}",
            num_rows,
            num_cols,
            self.num_rows,
            self.num_cols
        );

        let mut out = Self::filled(num_rows, num_cols, value);
        for row in 0..self.num_rows {
            out.row_mut(row)[..self.num_cols].clone_from_slice(self.row(row));
        }
        out
    }

    /// Copies the top-left `rows x cols` block of this matrix into `out`.
    ///
    /// # Panics
    ///
    /// Panics if `out` is larger than this matrix in either dimension.
    pub fn copy_block_into(&self, out: &mut Matrix<T>) {
        assert!(
            out.num_rows <= self.num_rows && out.num_cols <= self.num_cols,
            "called `Matrix::copy_block_into` with a target {}x{} larger than the source {}x{}",
            out.num_rows,
            out.num_cols,
            self.num_rows,
            self.num_cols
        );

        for row in 0..out.num_rows {
            let cols = out.num_cols;
            out.row_mut(row).clone_from_slice(&self.row(row)[..cols]);
        }
    }
}

impl<T> Matrix<T>
where
    T: Copy + PartialOrd,
{
    /// Returns the largest value, or `None` for an empty matrix.
    #[inline]
    pub fn max_element(&self) -> Option<T> {
        max_of(self.data.iter().copied())
    }
}

impl<T> std::ops::Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.num_rows && col < self.num_cols,
            "called `Matrix::index` with ({}, {}) out of bounds for a {}x{} matrix",
            row,
            col,
            self.num_rows,
            self.num_cols
        );

        &self.data[row * self.num_cols + col]
    }
}

impl<T> std::ops::IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < self.num_rows && col < self.num_cols,
            "called `Matrix::index_mut` with ({}, {}) out of bounds for a {}x{} matrix",
            row,
            col,
            self.num_rows,
            self.num_cols
        );

        &mut self.data[row * self.num_cols + col]
    }
}

impl<T> std::fmt::Debug for Matrix<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matrix")
            .field("num_rows", &self.num_rows)
            .field("num_cols", &self.num_cols)
            .field("rows", &self.rows().collect::<Vec<_>>())
            .finish()
    }
}

impl<T> std::fmt::Display for Matrix<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            write!(f, "[")?;
            for (i, value) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
