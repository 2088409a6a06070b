#![forbid(unsafe_code)]

//! # `spin_population_priors`
//!
//! Population models for the spins of compact-object binaries. Each model
//! evaluates a density over a batch of per-event spin observations for one
//! point in hyper-parameter space:
//!
//! - Beta-distributed spin magnitudes, independent or identical across bodies.
//! - Isotropic/aligned mixtures for the spin tilts.
//! - Truncated Gaussians for `chi_eff` and `chi_p`, and a correlated variant
//!   normalized numerically over a fixed grid.
//!
//! Models are generic over the [`NumericArray`] backend and default to
//! `faer::Mat<f64>`. They neither fit nor sample; an outer inference loop
//! supplies datasets and hyper-parameters.

pub mod backend;
pub mod distributions;
pub mod input;
pub mod models;
pub mod utils;

pub use backend::{ArrayError, Axis, NumericArray};
pub use distributions::{DistributionError, beta_dist, truncnorm};
pub use input::{DatasetError, SpinDataset, SpinParameter};
pub use models::SpinError;
pub use models::correlated::{
    ChiEffChiPGridOptions, ChiEffChiPParams, GaussianChiEffChiP, GridError,
};
pub use models::density::Density;
pub use models::effective::{ChiEffParams, ChiPParams, gaussian_chi_eff, gaussian_chi_p};
pub use models::iid::{IidSpinParams, iid_spin};
pub use models::magnitude::{
    IidMagnitudeParams, IndependentMagnitudeParams, iid_spin_magnitude_beta,
    independent_spin_magnitude_beta,
};
pub use models::orientation::{
    IidOrientationParams, IndependentOrientationParams,
    iid_spin_orientation_gaussian_isotropic, independent_spin_orientation_gaussian_isotropic,
};
