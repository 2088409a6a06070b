/////////////////////////////////////////////////////////////////////////////////////////////\
//
// Bounded Beta and truncated Gaussian density primitives.
//
// Created on: 17 Oct 2026
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! # Density primitives
//!
//! Elementwise densities the spin models are assembled from. Both functions
//! return zero outside their support rather than failing.

use std::cmp::Ordering;

use statrs::function::erf::erf;
use statrs::function::gamma::ln_gamma;
use thiserror::Error;

use crate::backend::NumericArray;
use crate::utils::{nan_to_num, xlogy};

/// Errors for invalid primitive parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DistributionError {
    #[error("beta shape parameters must be non-negative (alpha = {alpha}, beta = {beta})")]
    NegativeShape { alpha: f64, beta: f64 },
    #[error("gaussian width must be strictly positive, got {sigma}")]
    NonPositiveSigma { sigma: f64 },
    #[error("truncation bounds must satisfy low < high (low = {low}, high = {high})")]
    InvalidBounds { low: f64, high: f64 },
}

fn ln_beta(a: f64, b: f64) -> f64 {
    ln_gamma(a) + ln_gamma(b) - ln_gamma(a + b)
}

/// Beta density rescaled to the support `[0, scale]`.
///
/// Evaluated in log space. A NaN density becomes `0` and an infinite one the
/// largest finite float, which keeps sums over samples usable when a shape
/// parameter is zero or below one at the support edges.
///
/// # Errors
///
/// Returns `DistributionError::NegativeShape` if `alpha` or `beta` is negative.
pub fn beta_dist<A: NumericArray>(
    xx: &A,
    alpha: f64,
    beta: f64,
    scale: f64,
) -> Result<A, DistributionError> {
    if alpha < 0.0 || beta < 0.0 {
        return Err(DistributionError::NegativeShape { alpha, beta });
    }
    let ln_norm = (alpha + beta - 1.0).mul_add(scale.ln(), ln_beta(alpha, beta));
    Ok(xx.map(|x| {
        if !(0.0..=scale).contains(&x) {
            return 0.0;
        }
        let ln_prob = xlogy(alpha - 1.0, x) + xlogy(beta - 1.0, scale - x) - ln_norm;
        nan_to_num(ln_prob.exp())
    }))
}

/// Gaussian density with mean `mu` and width `sigma`, truncated to `[low, high]`.
///
/// # Errors
///
/// Returns `DistributionError::NonPositiveSigma` if `sigma` is not strictly
/// positive and `DistributionError::InvalidBounds` unless `low < high`.
pub fn truncnorm<A: NumericArray>(
    xx: &A,
    mu: f64,
    sigma: f64,
    low: f64,
    high: f64,
) -> Result<A, DistributionError> {
    if sigma.partial_cmp(&0.0) != Some(Ordering::Greater) {
        return Err(DistributionError::NonPositiveSigma { sigma });
    }
    if low.partial_cmp(&high) != Some(Ordering::Less) {
        return Err(DistributionError::InvalidBounds { low, high });
    }
    let scaled = std::f64::consts::SQRT_2 * sigma;
    let mass = erf((high - mu) / scaled) + erf((mu - low) / scaled);
    let norm = (2.0 / std::f64::consts::PI).sqrt() / sigma / mass;
    Ok(xx.map(|x| {
        if (low..=high).contains(&x) {
            norm * (-(x - mu).powi(2) / (2.0 * sigma * sigma)).exp()
        } else {
            0.0
        }
    }))
}
