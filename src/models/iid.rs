//! Independently and identically distributed spins: the product of the IID
//! orientation and IID magnitude models.

use crate::backend::NumericArray;
use crate::input::SpinDataset;
use crate::models::SpinError;
use crate::models::density::Density;
use crate::models::magnitude::{IidMagnitudeParams, iid_spin_magnitude_beta};
use crate::models::orientation::{IidOrientationParams, iid_spin_orientation_gaussian_isotropic};

/// Hyper-parameters of the IID spin model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IidSpinParams {
    pub xi_spin: f64,
    pub sigma_spin: f64,
    pub amax: f64,
    pub alpha_chi: f64,
    pub beta_chi: f64,
}

impl IidSpinParams {
    #[must_use]
    pub const fn orientation(&self) -> IidOrientationParams {
        IidOrientationParams {
            xi_spin: self.xi_spin,
            sigma_spin: self.sigma_spin,
        }
    }

    #[must_use]
    pub const fn magnitude(&self) -> IidMagnitudeParams {
        IidMagnitudeParams {
            amax: self.amax,
            alpha_chi: self.alpha_chi,
            beta_chi: self.beta_chi,
        }
    }
}

/// Joint density of spin magnitudes and tilts for both bodies.
///
/// # Errors
///
/// Returns `SpinError` if a required column is missing, columns differ in
/// shape, or `sigma_spin` is not strictly positive.
pub fn iid_spin<A: NumericArray>(
    dataset: &SpinDataset<A>,
    params: IidSpinParams,
) -> Result<Density<A>, SpinError> {
    let orientation = iid_spin_orientation_gaussian_isotropic(dataset, params.orientation())?;
    let magnitude = iid_spin_magnitude_beta(dataset, params.magnitude())?;
    Ok(Density::Values(orientation).multiply(magnitude)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::SpinParameter;
    use approx::assert_relative_eq;

    fn dataset() -> SpinDataset {
        SpinDataset::new()
            .with_values(SpinParameter::A1, &[0.5, 0.05, 0.7])
            .with_values(SpinParameter::A2, &[0.3, 0.9, 0.2])
            .with_values(SpinParameter::CosTilt1, &[1.0, -0.4, 0.1])
            .with_values(SpinParameter::CosTilt2, &[1.0, 0.8, -0.9])
    }

    #[test]
    fn aligned_flat_spins_match_hand_computed_value() {
        let params = IidSpinParams {
            xi_spin: 1.0,
            sigma_spin: 1.0,
            amax: 1.0,
            alpha_chi: 1.0,
            beta_chi: 1.0,
        };
        let prior = iid_spin(&dataset(), params).expect("valid dataset");
        let aligned_peak = (2.0 / std::f64::consts::PI).sqrt()
            / statrs::function::erf::erf(std::f64::consts::SQRT_2);
        assert_relative_eq!(prior.value_at(0, 0), aligned_peak * aligned_peak, epsilon = 1e-12);
        assert_relative_eq!(prior.value_at(0, 0), 0.698_760_742_531_023_9, max_relative = 1e-10);
    }

    #[test]
    fn negative_shape_zeroes_the_joint_density() {
        let params = IidSpinParams {
            xi_spin: 0.5,
            sigma_spin: 0.5,
            amax: 1.0,
            alpha_chi: -1.0,
            beta_chi: 2.0,
        };
        let prior = iid_spin(&dataset(), params).expect("valid dataset");
        assert!(prior.is_zero());
    }

    #[test]
    fn product_matches_components() {
        let params = IidSpinParams {
            xi_spin: 0.3,
            sigma_spin: 0.8,
            amax: 0.95,
            alpha_chi: 2.5,
            beta_chi: 4.0,
        };
        let data = dataset();
        let prior = iid_spin(&data, params).expect("valid dataset");
        let orientation =
            iid_spin_orientation_gaussian_isotropic(&data, params.orientation()).expect("valid");
        let magnitude = iid_spin_magnitude_beta(&data, params.magnitude()).expect("valid");
        for i in 0..3 {
            assert_relative_eq!(
                prior.value_at(i, 0),
                orientation.at(i, 0) * magnitude.value_at(i, 0),
                max_relative = 1e-14
            );
        }
    }
}
