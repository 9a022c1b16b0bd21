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

//! Error types reported by `HungarianProblem`.
//!
//! Every error is a caller-side precondition violation. Nothing is retried or
//! downgraded to a partial result inside the solver; the offending call fails
//! and leaves the problem untouched.

/// The reason a cost matrix was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInputError {
    /// A cost entry is below zero.
    #[error("cost matrix contains a negative entry at ({row}, {col})")]
    NegativeCost { row: usize, col: usize },
    /// A cost entry cannot be ordered (a floating-point `NaN`).
    #[error("cost matrix contains an entry at ({row}, {col}) that cannot be compared")]
    NotComparable { row: usize, col: usize },
    /// The padding cost `max + dummy_margin` is not representable in the cost type.
    #[error("dummy cost for padding a rectangular matrix overflows the cost type")]
    DummyCostOverflow,
    /// Intermediate values of the solve, bounded by `size * max(costs)`, do not
    /// fit in the cost type.
    #[error("cost matrix values are too large for a {size}x{size} problem in the cost type")]
    CostRangeOverflow { size: usize },
}

/// The caller-provided buffer whose shape was checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferKind {
    CostMatrix,
    AssignmentMatrix,
    RowIndices,
    ColumnIndices,
}

impl std::fmt::Display for BufferKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CostMatrix => write!(f, "cost matrix"),
            Self::AssignmentMatrix => write!(f, "assignment matrix"),
            Self::RowIndices => write!(f, "row indices"),
            Self::ColumnIndices => write!(f, "column indices"),
        }
    }
}

/// The shape of a buffer: a matrix or a flat vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimensions {
    Matrix { rows: usize, cols: usize },
    Vector(usize),
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Matrix { rows, cols } => write!(f, "{}x{}", rows, cols),
            Self::Vector(len) => write!(f, "{}", len),
        }
    }
}

/// Details about a buffer whose shape differs from the original problem.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{buffer} buffer has dimensions {actual}, expected {expected}")]
pub struct DimensionMismatchError {
    pub buffer: BufferKind,
    pub expected: Dimensions,
    pub actual: Dimensions,
}

/// The error type for all fallible `HungarianProblem` operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HungarianError {
    /// The cost matrix was rejected; the problem state is unchanged.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
    /// The operation needs a cost matrix, but none has been set.
    #[error("no cost matrix has been set")]
    NotReady,
    /// The operation needs a solved problem, but `solve` has not completed.
    #[error("the assignment problem has not been solved yet")]
    NotSolved,
    /// A caller-provided buffer does not match the original (unpadded) dimensions.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(#[from] DimensionMismatchError),
}
