//! # Spin orientations
//!
//! Mixture of an isotropic component and a component preferentially aligned
//! with the orbital angular momentum (Talbot & Thrane 2017,
//! arXiv:1704.08370, Eq. 4).

use crate::backend::NumericArray;
use crate::distributions::truncnorm;
use crate::input::{SpinDataset, SpinParameter};
use crate::models::SpinError;

/// Isotropic density on `[-1, 1] x [-1, 1]`.
const ISOTROPIC_DENSITY: f64 = 0.25;

/// Hyper-parameters of the independent orientation model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndependentOrientationParams {
    /// Fraction of binaries in the aligned component, in `[0, 1]`.
    pub xi_spin: f64,
    /// Width of the aligned component for the more massive body.
    pub sigma_1: f64,
    /// Width of the aligned component for the less massive body.
    pub sigma_2: f64,
}

/// Hyper-parameters shared by both bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IidOrientationParams {
    pub xi_spin: f64,
    pub sigma_spin: f64,
}

impl From<IidOrientationParams> for IndependentOrientationParams {
    fn from(params: IidOrientationParams) -> Self {
        Self {
            xi_spin: params.xi_spin,
            sigma_1: params.sigma_spin,
            sigma_2: params.sigma_spin,
        }
    }
}

/// `(1 - xi) / 4 + xi * N(cos_tilt_1; 1, sigma_1) * N(cos_tilt_2; 1, sigma_2)`,
/// with both Gaussians truncated to `[-1, 1]`.
///
/// `xi_spin` is not range checked.
///
/// # Errors
///
/// Returns `SpinError` if a tilt column is missing, the columns differ in
/// shape, or a width is not strictly positive.
pub fn independent_spin_orientation_gaussian_isotropic<A: NumericArray>(
    dataset: &SpinDataset<A>,
    params: IndependentOrientationParams,
) -> Result<A, SpinError> {
    let aligned_1 = truncnorm(
        dataset.get(SpinParameter::CosTilt1)?,
        1.0,
        params.sigma_1,
        -1.0,
        1.0,
    )?;
    let aligned_2 = truncnorm(
        dataset.get(SpinParameter::CosTilt2)?,
        1.0,
        params.sigma_2,
        -1.0,
        1.0,
    )?;
    let isotropic = (1.0 - params.xi_spin) * ISOTROPIC_DENSITY;
    Ok(aligned_1.zip_map(&aligned_2, |p1, p2| {
        params.xi_spin.mul_add(p1 * p2, isotropic)
    })?)
}

/// Identically distributed orientations for both bodies.
///
/// # Errors
///
/// Returns `SpinError` under the same conditions as
/// [`independent_spin_orientation_gaussian_isotropic`].
pub fn iid_spin_orientation_gaussian_isotropic<A: NumericArray>(
    dataset: &SpinDataset<A>,
    params: IidOrientationParams,
) -> Result<A, SpinError> {
    independent_spin_orientation_gaussian_isotropic(dataset, params.into())
}
