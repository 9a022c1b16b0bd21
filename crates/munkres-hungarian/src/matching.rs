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

//! Maximum bipartite matching over a square cell grid.
//!
//! Rows and columns of the working matrix form the two sides of a bipartite
//! graph; an edge exists wherever the caller's predicate says so (a zero of the
//! working matrix, or a remaining extraction candidate). Augmenting paths are
//! searched breadth-first from each free row, so the search uses no recursion
//! and its memory is bounded by the scratch buffers kept in this struct.
//!
//! The matching size is the minimum number of lines covering all edges
//! (König's theorem), and `konig_cover` turns a maximum matching into such a
//! cover.

use crate::cover::ZeroCover;
use fixedbitset::FixedBitSet;
use std::collections::VecDeque;

/// Reusable scratch space for maximum bipartite matchings on `size x size` grids.
#[derive(Debug, Clone)]
pub struct ZeroMatching {
    size: usize,
    column_for_row: Vec<Option<usize>>,
    row_for_column: Vec<Option<usize>>,
    /// The row from which a column was reached in the current search.
    parent_row: Vec<usize>,
    visited_rows: FixedBitSet,
    visited_columns: FixedBitSet,
    queue: VecDeque<usize>,
}

impl ZeroMatching {
    /// Creates scratch space for `size x size` grids.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            column_for_row: vec![None; size],
            row_for_column: vec![None; size],
            parent_row: vec![0; size],
            visited_rows: FixedBitSet::with_capacity(size),
            visited_columns: FixedBitSet::with_capacity(size),
            queue: VecDeque::with_capacity(size),
        }
    }

    /// Computes a maximum matching using edges where `is_edge(row, col)` holds,
    /// starting augmenting paths only from `rows`. Returns the matching size.
    ///
    /// Rows outside `rows` are never matched; columns are excluded by letting
    /// `is_edge` return `false` for them.
    pub fn maximum<R, F>(&mut self, rows: R, is_edge: F) -> usize
    where
        R: IntoIterator<Item = usize>,
        F: Fn(usize, usize) -> bool,
    {
        self.column_for_row.fill(None);
        self.row_for_column.fill(None);

        let mut matched = 0;
        for root in rows {
            debug_assert!(
                root < self.size,
                "called `ZeroMatching::maximum` with row index out of bounds: the len is {} but the index is {}",
                self.size,
                root
            );

            if self.augment_from(root, &is_edge) {
                matched += 1;
            }
        }
        matched
    }

    /// Searches an augmenting path from the free row `root` and flips it.
    fn augment_from<F>(&mut self, root: usize, is_edge: &F) -> bool
    where
        F: Fn(usize, usize) -> bool,
    {
        self.visited_columns.clear();
        self.queue.clear();
        self.queue.push_back(root);

        while let Some(row) = self.queue.pop_front() {
            for col in 0..self.size {
                if self.visited_columns.contains(col) || !is_edge(row, col) {
                    continue;
                }
                self.visited_columns.insert(col);
                self.parent_row[col] = row;

                match self.row_for_column[col] {
                    Some(next) => self.queue.push_back(next),
                    None => {
                        self.flip_path(col);
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Flips matched and unmatched edges along the path ending in the free column `col`.
    fn flip_path(&mut self, mut col: usize) {
        loop {
            let row = self.parent_row[col];
            let previous = self.column_for_row[row];
            self.column_for_row[row] = Some(col);
            self.row_for_column[col] = Some(row);
            match previous {
                Some(c) => col = c,
                None => break,
            }
        }
    }

    /// Derives a minimum line cover from the current maximum matching.
    ///
    /// Must be called right after `maximum` with the same `is_edge` and with all
    /// rows as roots. Rows not reachable by an alternating path from a free row
    /// are covered, as are the reachable columns; the line count equals the
    /// matching size.
    pub fn konig_cover<F>(&mut self, is_edge: F, cover: &mut ZeroCover)
    where
        F: Fn(usize, usize) -> bool,
    {
        cover.clear();
        self.visited_rows.clear();
        self.visited_columns.clear();
        self.queue.clear();

        for row in 0..self.size {
            if self.column_for_row[row].is_none() {
                self.visited_rows.insert(row);
                self.queue.push_back(row);
            }
        }

        while let Some(row) = self.queue.pop_front() {
            for col in 0..self.size {
                if self.visited_columns.contains(col) || !is_edge(row, col) {
                    continue;
                }
                self.visited_columns.insert(col);
                if let Some(next) = self.row_for_column[col]
                    && !self.visited_rows.contains(next)
                {
                    self.visited_rows.insert(next);
                    self.queue.push_back(next);
                }
            }
        }

        for row in 0..self.size {
            if !self.visited_rows.contains(row) {
                cover.cover_row(row);
            }
        }
        for col in self.visited_columns.ones() {
            cover.cover_column(col);
        }
    }
}
