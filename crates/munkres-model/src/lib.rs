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

//! # Munkres Model
//!
//! **Data model for the rectangular linear assignment problem.**
//!
//! This crate holds the types that cross the boundary between a caller and the
//! solver: the cost matrix going in and the assignment coming out. It contains
//! no algorithmic code.
//!
//! * **`index`**: strongly-typed `RowIndex` and `ColumnIndex`, so a row can never
//!   be used where a column is expected.
//! * **`matrix`**: `Matrix<T>`, a dense row-major grid used for cost matrices,
//!   caller-provided output buffers and the 0/1 assignment matrix.
//! * **`assignment`**: `Assignment<T>`, the solved pairing in the caller's
//!   original (unpadded) dimensions together with its total cost.

pub mod assignment;
pub mod index;
pub mod matrix;
