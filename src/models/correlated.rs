/////////////////////////////////////////////////////////////////////////////////////////////\
//
// Correlated Gaussian model for chi_eff and chi_p with grid normalization.
//
// Created on: 17 Oct 2026
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! # Correlated `chi_eff` / `chi_p`
//!
//! Joint density for the effective spins. With zero `spin_covariance` it is
//! the product of the truncated Gaussian marginals. Otherwise a bivariate
//! Gaussian-like form is normalized numerically over a fixed grid on
//! `[-1, 1] x [0, 1]`, built once per model.
//!
//! # Examples
//!
//! ```
//! use spin_population_priors::{
//!     ChiEffChiPParams, GaussianChiEffChiP, SpinDataset, SpinParameter,
//! };
//!
//! let model = GaussianChiEffChiP::new();
//! let dataset = SpinDataset::new()
//!     .with_values(SpinParameter::ChiEff, &[0.05, -0.1])
//!     .with_values(SpinParameter::ChiP, &[0.3, 0.6]);
//! let params = ChiEffChiPParams {
//!     mu_chi_eff: 0.06,
//!     sigma_chi_eff: 0.12,
//!     mu_chi_p: 0.2,
//!     sigma_chi_p: 0.2,
//!     spin_covariance: 0.5,
//! };
//!
//! let prob = model.evaluate(&dataset, params).expect("valid dataset");
//! assert!(prob[(0, 0)] > prob[(1, 0)]);
//! ```

use faer::Mat;
use thiserror::Error;

use crate::backend::{ArrayError, Axis, NumericArray};
use crate::input::{SpinDataset, SpinParameter};
use crate::models::SpinError;
use crate::models::effective::{
    CHI_EFF_BOUNDS, CHI_P_BOUNDS, ChiEffParams, ChiPParams, gaussian_chi_eff, gaussian_chi_p,
};

/// Errors for invalid grid options.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("{axis} axis needs at least two grid points, got {points}")]
    TooFewPoints { axis: SpinParameter, points: usize },
}

/// Resolution of the normalization grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChiEffChiPGridOptions {
    /// Points along `chi_eff` over `[-1, 1]`.
    pub chi_eff_points: usize,
    /// Points along `chi_p` over `[0, 1]`.
    pub chi_p_points: usize,
}

impl Default for ChiEffChiPGridOptions {
    fn default() -> Self {
        Self {
            chi_eff_points: 100,
            chi_p_points: 50,
        }
    }
}

impl ChiEffChiPGridOptions {
    /// # Errors
    ///
    /// Returns `GridError::TooFewPoints` if either axis has fewer than two points.
    pub const fn validate(self) -> Result<(), GridError> {
        if self.chi_eff_points < 2 {
            return Err(GridError::TooFewPoints {
                axis: SpinParameter::ChiEff,
                points: self.chi_eff_points,
            });
        }
        if self.chi_p_points < 2 {
            return Err(GridError::TooFewPoints {
                axis: SpinParameter::ChiP,
                points: self.chi_p_points,
            });
        }
        Ok(())
    }
}

/// Hyper-parameters of the correlated model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChiEffChiPParams {
    pub mu_chi_eff: f64,
    pub sigma_chi_eff: f64,
    pub mu_chi_p: f64,
    pub sigma_chi_p: f64,
    /// Expected in `[0, 1)`. Not checked: `1` makes the form singular and
    /// values outside the range give meaningless densities.
    pub spin_covariance: f64,
}

impl ChiEffChiPParams {
    #[must_use]
    pub const fn chi_eff(&self) -> ChiEffParams {
        ChiEffParams {
            mu_chi_eff: self.mu_chi_eff,
            sigma_chi_eff: self.sigma_chi_eff,
        }
    }

    #[must_use]
    pub const fn chi_p(&self) -> ChiPParams {
        ChiPParams {
            mu_chi_p: self.mu_chi_p,
            sigma_chi_p: self.sigma_chi_p,
        }
    }
}

/// Correlated Gaussian model for `chi_eff` and `chi_p`.
///
/// Holds the normalization grid, which is never modified after construction,
/// so one instance can be shared across threads for the length of a run.
#[derive(Debug, Clone)]
pub struct GaussianChiEffChiP<A = Mat<f64>> {
    options: ChiEffChiPGridOptions,
    chi_eff: A,
    chi_p: A,
    chi_eff_grid: A,
    chi_p_grid: A,
}

impl GaussianChiEffChiP {
    /// Model with the default `100 x 50` grid, backed by `faer` matrices.
    #[must_use]
    pub fn new() -> Self {
        Self::build(ChiEffChiPGridOptions::default())
    }
}

impl<A: NumericArray> Default for GaussianChiEffChiP<A> {
    fn default() -> Self {
        Self::build(ChiEffChiPGridOptions::default())
    }
}

impl<A: NumericArray> GaussianChiEffChiP<A> {
    /// Model with a custom grid resolution.
    ///
    /// # Errors
    ///
    /// Returns `GridError` if the options are invalid.
    pub fn with_options(options: ChiEffChiPGridOptions) -> Result<Self, GridError> {
        options.validate()?;
        Ok(Self::build(options))
    }

    fn build(options: ChiEffChiPGridOptions) -> Self {
        let chi_eff = A::linspace(CHI_EFF_BOUNDS.0, CHI_EFF_BOUNDS.1, options.chi_eff_points);
        let chi_p = A::linspace(CHI_P_BOUNDS.0, CHI_P_BOUNDS.1, options.chi_p_points);
        let (chi_eff_grid, chi_p_grid) = A::meshgrid(&chi_eff, &chi_p);
        log::debug!(
            "built chi_eff/chi_p normalization grid with shape {:?}",
            chi_eff_grid.shape()
        );
        Self {
            options,
            chi_eff,
            chi_p,
            chi_eff_grid,
            chi_p_grid,
        }
    }

    #[must_use]
    pub const fn options(&self) -> ChiEffChiPGridOptions {
        self.options
    }

    /// `chi_eff` grid axis.
    #[must_use]
    pub const fn chi_eff(&self) -> &A {
        &self.chi_eff
    }

    /// `chi_p` grid axis.
    #[must_use]
    pub const fn chi_p(&self) -> &A {
        &self.chi_p
    }

    /// `chi_eff` coordinates of every grid point (`chi_p_points x chi_eff_points`).
    #[must_use]
    pub const fn chi_eff_grid(&self) -> &A {
        &self.chi_eff_grid
    }

    /// `chi_p` coordinates of every grid point (`chi_p_points x chi_eff_points`).
    #[must_use]
    pub const fn chi_p_grid(&self) -> &A {
        &self.chi_p_grid
    }

    /// Density of the dataset's `chi_eff`/`chi_p` pairs.
    ///
    /// Zero covariance evaluates the product of the truncated marginals.
    /// Any other value evaluates the bivariate form divided by its integral
    /// over the grid; `spin_covariance == 1` yields non-finite values.
    ///
    /// # Errors
    ///
    /// Returns `SpinError` if `chi_eff` or `chi_p` is missing, their shapes
    /// differ, or (for zero covariance) a width is not strictly positive.
    pub fn evaluate(
        &self,
        dataset: &SpinDataset<A>,
        params: ChiEffChiPParams,
    ) -> Result<A, SpinError> {
        if params.spin_covariance == 0.0 {
            let prob_chi_eff = gaussian_chi_eff(dataset, params.chi_eff())?;
            let prob_chi_p = gaussian_chi_p(dataset, params.chi_p())?;
            return Ok(prob_chi_eff.zip_map(&prob_chi_p, |p_eff, p_p| p_eff * p_p)?);
        }
        let prob = two_d_probability(
            dataset.get(SpinParameter::ChiEff)?,
            dataset.get(SpinParameter::ChiP)?,
            params,
        )?;
        let normalization = self.normalization(params)?;
        if !normalization.is_finite() || normalization == 0.0 {
            log::warn!(
                "chi_eff/chi_p normalization is {normalization} for spin_covariance = {}",
                params.spin_covariance
            );
        }
        Ok(prob.map(|p| p / normalization))
    }

    /// Integral of the unnormalized form over the grid, `chi_p` first.
    fn normalization(&self, params: ChiEffChiPParams) -> Result<f64, ArrayError> {
        let prob = two_d_probability(&self.chi_eff_grid, &self.chi_p_grid, params)?;
        let over_chi_p = prob.trapz(&self.chi_p, Axis::Rows)?;
        let total = over_chi_p.trapz(&self.chi_eff, Axis::Columns)?;
        Ok(total.at(0, 0))
    }
}

/// Unnormalized bivariate form shared by the data and the normalization grid.
fn two_d_probability<A: NumericArray>(
    chi_eff: &A,
    chi_p: &A,
    params: ChiEffChiPParams,
) -> Result<A, ArrayError> {
    let ChiEffChiPParams {
        mu_chi_eff,
        sigma_chi_eff,
        mu_chi_p,
        sigma_chi_p,
        spin_covariance,
    } = params;
    let determinant = sigma_chi_eff.powi(2) * sigma_chi_p.powi(2) * (1.0 - spin_covariance);
    chi_eff.zip_map(chi_p, |x_eff, x_p| {
        let chi_eff_residual = (mu_chi_eff - x_eff) * sigma_chi_eff;
        let chi_p_residual = (mu_chi_p - x_p) * sigma_chi_p;
        let exponent = (2.0 * chi_eff_residual * chi_p_residual).mul_add(
            -spin_covariance,
            chi_eff_residual.powi(2) + chi_p_residual.powi(2),
        );
        (-exponent / 2.0 / determinant).exp()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params(spin_covariance: f64) -> ChiEffChiPParams {
        ChiEffChiPParams {
            mu_chi_eff: 0.1,
            sigma_chi_eff: 0.3,
            mu_chi_p: 0.25,
            sigma_chi_p: 0.2,
            spin_covariance,
        }
    }

    fn samples() -> SpinDataset {
        SpinDataset::new()
            .with_values(SpinParameter::ChiEff, &[-0.5, 0.0, 0.1, 0.6])
            .with_values(SpinParameter::ChiP, &[0.9, 0.1, 0.25, 0.4])
    }

    #[test]
    fn default_grid_has_documented_shape() {
        let model = GaussianChiEffChiP::new();
        assert_eq!(model.chi_eff().shape(), (100, 1));
        assert_eq!(model.chi_p().shape(), (50, 1));
        assert_eq!(model.chi_eff_grid().shape(), (50, 100));
        assert_eq!(model.chi_p_grid().shape(), (50, 100));
        assert_relative_eq!(model.chi_eff().at(0, 0), -1.0);
        assert_relative_eq!(model.chi_eff().at(99, 0), 1.0);
        assert_relative_eq!(model.chi_p().at(49, 0), 1.0);
        assert_relative_eq!(model.chi_p_grid().at(49, 0), 1.0);
        assert_relative_eq!(model.chi_eff_grid().at(0, 99), 1.0);
    }

    #[test]
    fn zero_covariance_is_product_of_marginals() {
        let model = GaussianChiEffChiP::new();
        let data = samples();
        let prob = model.evaluate(&data, params(0.0)).expect("valid dataset");
        let chi_eff = gaussian_chi_eff(&data, params(0.0).chi_eff()).expect("valid");
        let chi_p = gaussian_chi_p(&data, params(0.0).chi_p()).expect("valid");
        for i in 0..4 {
            assert_relative_eq!(
                prob.at(i, 0),
                chi_eff.at(i, 0) * chi_p.at(i, 0),
                max_relative = 1e-14
            );
        }
    }

    #[test]
    fn correlated_density_is_normalized_on_grid() {
        let model = GaussianChiEffChiP::new();
        let grid = SpinDataset::new()
            .with_array(SpinParameter::ChiEff, model.chi_eff_grid().clone())
            .with_array(SpinParameter::ChiP, model.chi_p_grid().clone());
        let prob = model.evaluate(&grid, params(0.4)).expect("grid dataset");
        let total = prob
            .trapz(model.chi_p(), Axis::Rows)
            .and_then(|inner| inner.trapz(model.chi_eff(), Axis::Columns))
            .expect("grid lengths match");
        assert_relative_eq!(total.at(0, 0), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn bivariate_form_peaks_at_the_mean() {
        let dataset = SpinDataset::new()
            .with_values(SpinParameter::ChiEff, &[0.1])
            .with_values(SpinParameter::ChiP, &[0.25]);
        let raw = two_d_probability(
            dataset.get(SpinParameter::ChiEff).expect("present"),
            dataset.get(SpinParameter::ChiP).expect("present"),
            params(0.3),
        )
        .expect("same shape");
        assert_relative_eq!(raw.at(0, 0), 1.0);
    }

    #[test]
    fn unit_covariance_propagates_non_finite_values() {
        let model = GaussianChiEffChiP::new();
        let prob = model.evaluate(&samples(), params(1.0)).expect("no validation");
        assert!(!prob.all_finite());
    }

    #[test]
    fn custom_grid_resolution_is_respected() {
        let options = ChiEffChiPGridOptions {
            chi_eff_points: 21,
            chi_p_points: 11,
        };
        let model = GaussianChiEffChiP::<Mat<f64>>::with_options(options).expect("valid grid");
        assert_eq!(model.options(), options);
        assert_eq!(model.chi_eff_grid().shape(), (11, 21));
    }

    #[test]
    fn degenerate_grid_is_rejected() {
        let options = ChiEffChiPGridOptions {
            chi_eff_points: 100,
            chi_p_points: 1,
        };
        let err = GaussianChiEffChiP::<Mat<f64>>::with_options(options)
            .expect_err("single chi_p point");
        assert_eq!(
            err,
            GridError::TooFewPoints {
                axis: SpinParameter::ChiP,
                points: 1
            }
        );
    }

    #[test]
    fn mismatched_columns_are_reported() {
        let model = GaussianChiEffChiP::new();
        let dataset = SpinDataset::new()
            .with_values(SpinParameter::ChiEff, &[0.1, 0.2])
            .with_values(SpinParameter::ChiP, &[0.3]);
        let err = model
            .evaluate(&dataset, params(0.5))
            .expect_err("lengths differ");
        assert!(matches!(err, SpinError::Array(ArrayError::ShapeMismatch { .. })));
    }
}
