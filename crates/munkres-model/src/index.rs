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

//! Row and column indices of a cost matrix.
//!
//! Both sides of an assignment are plain `usize` positions, which makes it
//! easy to swap them by accident when reading `rows_for_columns` or writing an
//! index pair. Tagging each side gives them distinct types; the tags carry no
//! data and only name the side in `Debug` and `Display` output.

use munkres_core::utils::index::{TypedIndex, TypedIndexTag};

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct RowIndexTag;

impl TypedIndexTag for RowIndexTag {
    const NAME: &'static str = "RowIndex";
}

/// A row of the caller's cost matrix (one "worker" of the assignment).
///
/// Always refers to the original, unpadded matrix.
pub type RowIndex = TypedIndex<RowIndexTag>;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ColumnIndexTag;

impl TypedIndexTag for ColumnIndexTag {
    const NAME: &'static str = "ColumnIndex";
}

/// A column of the caller's cost matrix (one "task" of the assignment).
///
/// Always refers to the original, unpadded matrix.
pub type ColumnIndex = TypedIndex<ColumnIndexTag>;
