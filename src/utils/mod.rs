/////////////////////////////////////////////////////////////////////////////////////////////\
//
// Shared scalar helpers for density evaluation.
//
// Created on: 17 Oct 2026
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! # Utilities
//!
//! Small scalar helpers shared by the array backend and the density primitives.

use num_traits::ToPrimitive;

/// Convert an index or count to `f64`.
#[must_use]
pub fn usize_to_f64(value: usize) -> f64 {
    value.to_f64().unwrap_or(f64::MAX)
}

/// `a * ln(x)`, taken as zero when `a == 0` so that `0 * ln(0)` vanishes.
#[must_use]
pub fn xlogy(a: f64, x: f64) -> f64 {
    if a == 0.0 && !x.is_nan() {
        0.0
    } else {
        a * x.ln()
    }
}

/// Replace NaN with zero and clamp infinities to the largest finite values.
#[must_use]
pub fn nan_to_num(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else if value == f64::INFINITY {
        f64::MAX
    } else if value == f64::NEG_INFINITY {
        f64::MIN
    } else {
        value
    }
}
