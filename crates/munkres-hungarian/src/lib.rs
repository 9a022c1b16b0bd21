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

//! Munkres-Hungarian: the Hungarian method for linear assignment
//!
//! Solves the rectangular linear assignment problem: pair the rows and columns
//! of a non-negative `m x n` cost matrix one-to-one so that the total cost is
//! minimal, leaving `|m - n|` rows or columns unassigned.
//!
//! Core flow
//! - Build a `munkres_model::matrix::Matrix<T>` of costs.
//! - Hand it to `problem::HungarianProblem` (optionally with a
//!   `config::HungarianConfig`).
//! - Call `solve`, then read the assignment as a 0/1 matrix, as index vectors
//!   with `-1` for unmatched entries, or as a typed `Assignment<T>`.
//!
//! Pipeline
//! - Setup: validate, pad to a square with a dummy cost above every real cost.
//! - Reduction: subtract row and column minima.
//! - Zero cover: greedy row/column lines over the zeros, checked against a
//!   maximum zero matching and replaced by its König cover when too large.
//! - Augmentation: shift uncovered values until the cover needs `size` lines.
//! - Extraction: commit unique zeros, then break ties by original cost.
//!
//! Assumptions and guarantees
//! - Every value within the configured tolerance of zero counts as zero in
//!   every stage.
//! - The result is deterministic for a given matrix and configuration.
//! - A problem instance is not reentrant; share it only behind external
//!   synchronization.
//!
//! ```rust
//! use munkres_hungarian::problem::HungarianProblem;
//! use munkres_model::matrix::Matrix;
//!
//! let costs = Matrix::from_rows(vec![
//!     vec![40, 60, 15],
//!     vec![25, 30, 45],
//!     vec![55, 30, 25],
//! ])
//! .unwrap();
//!
//! let mut problem = HungarianProblem::from_cost_matrix(costs).unwrap();
//! problem.solve().unwrap();
//!
//! let mut rows = [0; 3];
//! let mut cols = [0; 3];
//! problem.write_assignment_results(&mut rows, &mut cols).unwrap();
//! assert_eq!(rows, [2, 0, 1]);
//! assert_eq!(cols, [1, 2, 0]);
//! ```
//!
//! Module map
//! - `problem`: the solver facade and its lifecycle.
//! - `config`: tolerance and padding margin.
//! - `error`: error conditions of the public operations.
//! - `status`: the `NotReady -> ReadyToSolve -> Done` lifecycle.
//! - `stats`: counters and timing of a solve.

mod augment;
pub mod config;
mod cover;
pub mod error;
mod extraction;
mod matching;
pub mod problem;
mod reduction;
pub mod stats;
pub mod status;
