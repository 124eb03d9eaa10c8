// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! This module re-exports the `approx` crate's assertion macro, which handles
//! floating-point precision issues that `assert_eq!` cannot.

pub use approx::assert_abs_diff_eq;

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-6;
