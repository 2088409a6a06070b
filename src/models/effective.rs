//! Truncated Gaussian models for the effective spins `chi_eff` on `[-1, 1]`
//! and `chi_p` on `[0, 1]`.

use crate::backend::NumericArray;
use crate::distributions::truncnorm;
use crate::input::{SpinDataset, SpinParameter};
use crate::models::SpinError;

pub const CHI_EFF_BOUNDS: (f64, f64) = (-1.0, 1.0);
pub const CHI_P_BOUNDS: (f64, f64) = (0.0, 1.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChiEffParams {
    pub mu_chi_eff: f64,
    pub sigma_chi_eff: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChiPParams {
    pub mu_chi_p: f64,
    pub sigma_chi_p: f64,
}

/// # Errors
///
/// Returns `SpinError` if `chi_eff` is missing or `sigma_chi_eff <= 0`.
pub fn gaussian_chi_eff<A: NumericArray>(
    dataset: &SpinDataset<A>,
    params: ChiEffParams,
) -> Result<A, SpinError> {
    let (low, high) = CHI_EFF_BOUNDS;
    Ok(truncnorm(
        dataset.get(SpinParameter::ChiEff)?,
        params.mu_chi_eff,
        params.sigma_chi_eff,
        low,
        high,
    )?)
}

/// # Errors
///
/// Returns `SpinError` if `chi_p` is missing or `sigma_chi_p <= 0`.
pub fn gaussian_chi_p<A: NumericArray>(
    dataset: &SpinDataset<A>,
    params: ChiPParams,
) -> Result<A, SpinError> {
    let (low, high) = CHI_P_BOUNDS;
    Ok(truncnorm(
        dataset.get(SpinParameter::ChiP)?,
        params.mu_chi_p,
        params.sigma_chi_p,
        low,
        high,
    )?)
}
