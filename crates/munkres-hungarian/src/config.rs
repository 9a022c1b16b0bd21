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

//! # Solver Configuration
//!
//! `HungarianConfig` holds the two numeric constants of the method: the zero
//! tolerance and the margin used to build the padding cost for rectangular
//! matrices. Both are stored as `f64` and converted into the cost type when a
//! cost matrix is set, so one configuration serves every cost type.
//!
//! ```rust
//! use munkres_hungarian::config::HungarianConfigBuilder;
//!
//! let config = HungarianConfigBuilder::new()
//!     .with_tolerance(1e-9)
//!     .with_dummy_margin(1_000.0)
//!     .build();
//! assert_eq!(config.tolerance(), 1e-9);
//! assert_eq!(config.dummy_margin(), 1_000.0);
//! ```

use munkres_core::num::tolerance::DEFAULT_EPSILON;

/// The default margin added to the largest cost to form the padding cost.
pub const DEFAULT_DUMMY_MARGIN: f64 = 100.0;

/// Numeric settings of the Hungarian solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HungarianConfig {
    tolerance: f64,
    dummy_margin: f64,
}

impl HungarianConfig {
    /// Returns the epsilon below which a reduced cost counts as zero.
    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the margin added to `max(costs)` for padding rows and columns.
    #[inline]
    pub fn dummy_margin(&self) -> f64 {
        self.dummy_margin
    }
}

impl Default for HungarianConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_EPSILON,
            dummy_margin: DEFAULT_DUMMY_MARGIN,
        }
    }
}

impl std::fmt::Display for HungarianConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "HungarianConfig(tolerance: {:e}, dummy_margin: {})",
            self.tolerance, self.dummy_margin
        )
    }
}

/// Builder for `HungarianConfig`.
#[derive(Debug, Clone, Default)]
pub struct HungarianConfigBuilder {
    config: HungarianConfig,
}

impl HungarianConfigBuilder {
    /// Creates a builder initialized with the defaults
    /// (`tolerance = 1e-6`, `dummy_margin = 100`).
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the zero tolerance.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance` is negative or not finite.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        assert!(
            tolerance.is_finite() && tolerance >= 0.0,
            "called `HungarianConfigBuilder::with_tolerance` with an invalid tolerance: {}",
            tolerance
        );

        self.config.tolerance = tolerance;
        self
    }

    /// Sets the padding margin.
    ///
    /// # Panics
    ///
    /// Panics if `dummy_margin` is not strictly positive and finite.
    pub fn with_dummy_margin(mut self, dummy_margin: f64) -> Self {
        assert!(
            dummy_margin.is_finite() && dummy_margin > 0.0,
            "called `HungarianConfigBuilder::with_dummy_margin` with an invalid margin: {}",
            dummy_margin
        );

        self.config.dummy_margin = dummy_margin;
        self
    }

    /// Finalizes the configuration.
    #[inline]
    pub fn build(self) -> HungarianConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HungarianConfig::default();
        assert_eq!(config.tolerance(), 1e-6);
        assert_eq!(config.dummy_margin(), 100.0);
        assert_eq!(HungarianConfigBuilder::new().build(), config);
    }

    #[test]
    fn test_builder_overrides() {
        let config = HungarianConfigBuilder::new()
            .with_tolerance(0.0)
            .with_dummy_margin(5.0)
            .build();
        assert_eq!(config.tolerance(), 0.0);
        assert_eq!(config.dummy_margin(), 5.0);
    }

    #[test]
    #[should_panic(expected = "called `HungarianConfigBuilder::with_tolerance` with an invalid tolerance")]
    fn test_negative_tolerance_panics() {
        let _ = HungarianConfigBuilder::new().with_tolerance(-1e-3);
    }

    #[test]
    #[should_panic(expected = "called `HungarianConfigBuilder::with_dummy_margin` with an invalid margin")]
    fn test_zero_margin_panics() {
        let _ = HungarianConfigBuilder::new().with_dummy_margin(0.0);
    }

    #[test]
    #[should_panic(expected = "invalid margin")]
    fn test_infinite_margin_panics() {
        let _ = HungarianConfigBuilder::new().with_dummy_margin(f64::INFINITY);
    }

    #[test]
    fn test_display() {
        let s = HungarianConfig::default().to_string();
        assert_eq!(s, "HungarianConfig(tolerance: 1e-6, dummy_margin: 100)");
    }
}
