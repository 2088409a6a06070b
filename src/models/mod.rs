//! # Models
//!
//! Population models for black-hole spins: Beta-distributed magnitudes,
//! isotropic/aligned tilt mixtures, their IID product, and Gaussian models for
//! the effective spins `chi_eff` and `chi_p`, optionally correlated.

use thiserror::Error;

use crate::backend::ArrayError;
use crate::distributions::DistributionError;
use crate::input::DatasetError;

pub mod correlated;
pub mod density;
pub mod effective;
pub mod iid;
pub mod magnitude;
pub mod orientation;

/// Errors returned when a model is called with malformed inputs.
///
/// Invalid points in hyper-parameter space are not errors: they evaluate to a
/// zero density (negative Beta shapes) or to non-finite values (degenerate
/// spin covariance).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpinError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Array(#[from] ArrayError),
    #[error(transparent)]
    Distribution(#[from] DistributionError),
}
