/////////////////////////////////////////////////////////////////////////////////////////////\
//
// Beta-distributed spin magnitudes.
//
// Created on: 17 Oct 2026
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! # Spin magnitudes
//!
//! Independent Beta distributions for `a_1` and `a_2`, each on `[0, amax]`
//! (Wysocki et al. 2018, arXiv:1805.06442, Eq. 10), and the specialization
//! where both bodies share one distribution.

use crate::backend::NumericArray;
use crate::distributions::beta_dist;
use crate::input::{SpinDataset, SpinParameter};
use crate::models::SpinError;
use crate::models::density::Density;

/// Hyper-parameters of the independent magnitude model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndependentMagnitudeParams {
    /// Beta `alpha` for the more massive body.
    pub alpha_chi_1: f64,
    /// Beta `alpha` for the less massive body.
    pub alpha_chi_2: f64,
    /// Beta `beta` for the more massive body.
    pub beta_chi_1: f64,
    /// Beta `beta` for the less massive body.
    pub beta_chi_2: f64,
    /// Maximum spin of the more massive body.
    pub amax_1: f64,
    /// Maximum spin of the less massive body.
    pub amax_2: f64,
}

impl IndependentMagnitudeParams {
    /// True if any Beta shape parameter is negative.
    #[must_use]
    pub fn has_negative_shape(&self) -> bool {
        self.alpha_chi_1 < 0.0
            || self.beta_chi_1 < 0.0
            || self.alpha_chi_2 < 0.0
            || self.beta_chi_2 < 0.0
    }
}

/// Hyper-parameters shared by both bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IidMagnitudeParams {
    pub amax: f64,
    pub alpha_chi: f64,
    pub beta_chi: f64,
}

impl Default for IidMagnitudeParams {
    fn default() -> Self {
        Self {
            amax: 1.0,
            alpha_chi: 1.0,
            beta_chi: 1.0,
        }
    }
}

impl From<IidMagnitudeParams> for IndependentMagnitudeParams {
    fn from(params: IidMagnitudeParams) -> Self {
        Self {
            alpha_chi_1: params.alpha_chi,
            alpha_chi_2: params.alpha_chi,
            beta_chi_1: params.beta_chi,
            beta_chi_2: params.beta_chi,
            amax_1: params.amax,
            amax_2: params.amax,
        }
    }
}

/// Product of independent Beta densities for `a_1` and `a_2`.
///
/// Returns [`Density::Zero`] without reading the dataset when any shape
/// parameter is negative.
///
/// # Errors
///
/// Returns `SpinError` if `a_1` or `a_2` is missing or their shapes differ.
pub fn independent_spin_magnitude_beta<A: NumericArray>(
    dataset: &SpinDataset<A>,
    params: IndependentMagnitudeParams,
) -> Result<Density<A>, SpinError> {
    if params.has_negative_shape() {
        log::trace!("negative beta shape in {params:?}; magnitude density is zero");
        return Ok(Density::Zero);
    }
    let prior_1 = beta_dist(
        dataset.get(SpinParameter::A1)?,
        params.alpha_chi_1,
        params.beta_chi_1,
        params.amax_1,
    )?;
    let prior_2 = beta_dist(
        dataset.get(SpinParameter::A2)?,
        params.alpha_chi_2,
        params.beta_chi_2,
        params.amax_2,
    )?;
    Ok(Density::Values(prior_1.zip_map(&prior_2, |p1, p2| p1 * p2)?))
}

/// Identically distributed Beta magnitudes for both bodies.
///
/// # Errors
///
/// Returns `SpinError` if `a_1` or `a_2` is missing or their shapes differ.
pub fn iid_spin_magnitude_beta<A: NumericArray>(
    dataset: &SpinDataset<A>,
    params: IidMagnitudeParams,
) -> Result<Density<A>, SpinError> {
    independent_spin_magnitude_beta(dataset, params.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params(alpha_chi_1: f64, beta_chi_2: f64) -> IndependentMagnitudeParams {
        IndependentMagnitudeParams {
            alpha_chi_1,
            alpha_chi_2: 2.0,
            beta_chi_1: 3.0,
            beta_chi_2,
            amax_1: 1.0,
            amax_2: 0.8,
        }
    }

    #[test]
    fn negative_shape_short_circuits_without_data() {
        let empty = SpinDataset::new();
        let density = independent_spin_magnitude_beta(&empty, params(-0.5, 2.0))
            .expect("zero density needs no columns");
        assert!(density.is_zero());

        let density = independent_spin_magnitude_beta(&empty, params(2.0, -1.0))
            .expect("zero density needs no columns");
        assert!(density.is_zero());
    }

    #[test]
    fn product_of_scaled_beta_densities() {
        let dataset = SpinDataset::new()
            .with_values(SpinParameter::A1, &[0.25, 0.5])
            .with_values(SpinParameter::A2, &[0.4, 0.7]);
        let density = independent_spin_magnitude_beta(&dataset, params(2.0, 1.0))
            .expect("valid dataset");

        // Beta(2, 3) on [0, 1] and Beta(2, 1) on [0, 0.8].
        let beta_23 = |x: f64| 12.0 * x * (1.0 - x).powi(2);
        let beta_21_scaled = |x: f64| 2.0 * (x / 0.8) / 0.8;
        for (i, (a_1, a_2)) in [(0.25, 0.4), (0.5, 0.7)].into_iter().enumerate() {
            assert_relative_eq!(
                density.value_at(i, 0),
                beta_23(a_1) * beta_21_scaled(a_2),
                epsilon = 1e-10
            );
        }
    }

    #[test]
    fn magnitude_above_amax_has_zero_density() {
        let dataset = SpinDataset::new()
            .with_values(SpinParameter::A1, &[0.5])
            .with_values(SpinParameter::A2, &[0.9]);
        let density = independent_spin_magnitude_beta(&dataset, params(2.0, 1.0))
            .expect("valid dataset");
        assert_relative_eq!(density.value_at(0, 0), 0.0);
    }

    #[test]
    fn iid_defaults_are_flat() {
        let dataset = SpinDataset::new()
            .with_values(SpinParameter::A1, &[0.1, 0.6])
            .with_values(SpinParameter::A2, &[0.95, 0.3]);
        let density = iid_spin_magnitude_beta(&dataset, IidMagnitudeParams::default())
            .expect("valid dataset");
        assert_relative_eq!(density.value_at(0, 0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(density.value_at(1, 0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn missing_column_is_reported() {
        let dataset = SpinDataset::new().with_values(SpinParameter::A1, &[0.5]);
        let err = iid_spin_magnitude_beta(&dataset, IidMagnitudeParams::default())
            .expect_err("a_2 is missing");
        assert!(matches!(err, SpinError::Dataset(_)));
    }
}
