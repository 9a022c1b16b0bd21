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

//! # Munkres Core
//!
//! Numeric foundations and small utilities shared by the munkres assignment
//! crates. Nothing in here knows about assignment problems; it only provides
//! the vocabulary the model and solver crates are written in.
//!
//! ## Modules
//!
//! - `num`: the `CostNumeric` trait alias that every cost type must satisfy,
//!   together with `Tolerance<T>`, the single "is this value a zero" test used
//!   throughout the solver so that floating-point noise is handled uniformly.
//! - `utils`: phantom-tagged, strongly typed indices (`TypedIndex<T>`) that keep
//!   row and column index spaces apart at compile time.

pub mod num;
pub mod utils;
