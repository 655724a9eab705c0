// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Re-exports the `approx` crate's assertion macros, which handle the
//! floating-point precision issues `assert_eq!` cannot.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};
