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

use std::time::Duration;

/// Counters collected while solving one assignment problem.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolverStatistics {
    /// Side length of the padded working matrix.
    pub matrix_size: usize,
    /// How many times the zero cover was computed.
    pub cover_passes: u64,
    /// How many augmentation steps ran.
    pub augmentations: u64,
    /// Rows covered because every remaining zero was tied.
    pub forced_row_covers: u64,
    /// Greedy covers that were not minimum and got replaced by a matching-derived cover.
    pub cover_repairs: u64,
    /// Extraction commits of a row or column with a single candidate.
    pub unique_commits: u64,
    /// Extraction commits resolved by the original-cost tie-break.
    pub tie_breaks: u64,
    /// Extraction commits that had to use a non-zero cell.
    pub fallback_commits: u64,
    /// Wall-clock time of the whole solve.
    pub time_total: Duration,
}

impl SolverStatistics {
    #[inline]
    pub fn new(matrix_size: usize) -> Self {
        Self {
            matrix_size,
            ..Self::default()
        }
    }

    #[inline]
    pub fn on_cover_pass(&mut self) {
        self.cover_passes = self.cover_passes.saturating_add(1);
    }

    #[inline]
    pub fn on_augmentation(&mut self) {
        self.augmentations = self.augmentations.saturating_add(1);
    }

    #[inline]
    pub fn on_forced_row_cover(&mut self) {
        self.forced_row_covers = self.forced_row_covers.saturating_add(1);
    }

    #[inline]
    pub fn on_cover_repair(&mut self) {
        self.cover_repairs = self.cover_repairs.saturating_add(1);
    }

    #[inline]
    pub fn on_unique_commit(&mut self) {
        self.unique_commits = self.unique_commits.saturating_add(1);
    }

    #[inline]
    pub fn on_tie_break(&mut self) {
        self.tie_breaks = self.tie_breaks.saturating_add(1);
    }

    #[inline]
    pub fn on_fallback_commit(&mut self) {
        self.fallback_commits = self.fallback_commits.saturating_add(1);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for SolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Hungarian Solver Statistics:")?;
        writeln!(f, "  Matrix size:          {}", self.matrix_size)?;
        writeln!(f, "  Cover passes:         {}", self.cover_passes)?;
        writeln!(f, "  Augmentations:        {}", self.augmentations)?;
        writeln!(f, "  Forced row covers:    {}", self.forced_row_covers)?;
        writeln!(f, "  Cover repairs:        {}", self.cover_repairs)?;
        writeln!(f, "  Unique commits:       {}", self.unique_commits)?;
        writeln!(f, "  Tie breaks:           {}", self.tie_breaks)?;
        writeln!(f, "  Fallback commits:     {}", self.fallback_commits)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}
