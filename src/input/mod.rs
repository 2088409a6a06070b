//! # Spin datasets
//!
//! A read-only container mapping spin observables to equally shaped arrays,
//! one entry per sample or grid point.
//!
//! # Examples
//!
//! ```
//! use spin_population_priors::{SpinDataset, SpinParameter};
//!
//! let dataset = SpinDataset::new()
//!     .with_values(SpinParameter::A1, &[0.5, 0.1])
//!     .with_values(SpinParameter::A2, &[0.3, 0.9]);
//!
//! assert!(dataset.validate().is_ok());
//! assert!(dataset.get(SpinParameter::ChiEff).is_err());
//! ```

use std::collections::HashMap;
use std::fmt;

use faer::Mat;
use thiserror::Error;

use crate::backend::NumericArray;

/// Spin observables a population model can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpinParameter {
    /// Spin magnitude of the more massive body.
    A1,
    /// Spin magnitude of the less massive body.
    A2,
    /// Cosine tilt of the more massive body.
    CosTilt1,
    /// Cosine tilt of the less massive body.
    CosTilt2,
    /// Effective aligned spin.
    ChiEff,
    /// Effective precessing spin.
    ChiP,
}

impl SpinParameter {
    pub const ALL: [Self; 6] = [
        Self::A1,
        Self::A2,
        Self::CosTilt1,
        Self::CosTilt2,
        Self::ChiEff,
        Self::ChiP,
    ];

    /// Conventional dataset key, e.g. `cos_tilt_1`.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::A1 => "a_1",
            Self::A2 => "a_2",
            Self::CosTilt1 => "cos_tilt_1",
            Self::CosTilt2 => "cos_tilt_2",
            Self::ChiEff => "chi_eff",
            Self::ChiP => "chi_p",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|parameter| parameter.key() == key)
    }
}

impl fmt::Display for SpinParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Errors returned when reading or validating a dataset.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DatasetError {
    #[error("dataset has no `{0}` column")]
    MissingParameter(SpinParameter),
    #[error("unknown spin parameter key `{0}`")]
    UnknownKey(String),
    #[error("`{parameter}` has shape {found:?}, expected {expected:?}")]
    ShapeMismatch {
        parameter: SpinParameter,
        expected: (usize, usize),
        found: (usize, usize),
    },
}

/// Spin observables keyed by [`SpinParameter`].
///
/// Models only ever borrow a dataset; nothing in the crate mutates one.
#[derive(Debug, Clone)]
pub struct SpinDataset<A = Mat<f64>> {
    columns: HashMap<SpinParameter, A>,
}

impl SpinDataset {
    /// Empty dataset backed by `faer` matrices.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<A> Default for SpinDataset<A> {
    fn default() -> Self {
        Self {
            columns: HashMap::new(),
        }
    }
}

impl<A: NumericArray> SpinDataset<A> {
    /// Add `values` as a column vector for `parameter`.
    #[must_use]
    pub fn with_values(self, parameter: SpinParameter, values: &[f64]) -> Self {
        self.with_array(parameter, A::from_column(values))
    }

    #[must_use]
    pub fn with_array(mut self, parameter: SpinParameter, values: A) -> Self {
        self.insert(parameter, values);
        self
    }

    /// Insert or replace a column, returning the previous one.
    pub fn insert(&mut self, parameter: SpinParameter, values: A) -> Option<A> {
        self.columns.insert(parameter, values)
    }

    /// Insert a column by its string key.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::UnknownKey` if `key` names no spin parameter.
    pub fn insert_named(&mut self, key: &str, values: A) -> Result<Option<A>, DatasetError> {
        let parameter =
            SpinParameter::from_key(key).ok_or_else(|| DatasetError::UnknownKey(key.to_owned()))?;
        Ok(self.insert(parameter, values))
    }

    /// # Errors
    ///
    /// Returns `DatasetError::MissingParameter` if the column is absent.
    pub fn get(&self, parameter: SpinParameter) -> Result<&A, DatasetError> {
        self.columns
            .get(&parameter)
            .ok_or(DatasetError::MissingParameter(parameter))
    }

    #[must_use]
    pub fn contains(&self, parameter: SpinParameter) -> bool {
        self.columns.contains_key(&parameter)
    }

    /// Parameters present, in declaration order.
    #[must_use]
    pub fn parameters(&self) -> Vec<SpinParameter> {
        SpinParameter::ALL
            .into_iter()
            .filter(|parameter| self.contains(*parameter))
            .collect()
    }

    /// Shape shared by every column, or `None` for an empty dataset.
    #[must_use]
    pub fn shape(&self) -> Option<(usize, usize)> {
        self.parameters()
            .first()
            .and_then(|parameter| self.columns.get(parameter))
            .map(NumericArray::shape)
    }

    /// Check that every column has the same shape.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::ShapeMismatch` naming the first column that
    /// disagrees with the first present parameter.
    pub fn validate(&self) -> Result<(), DatasetError> {
        let Some(expected) = self.shape() else {
            return Ok(());
        };
        for parameter in self.parameters() {
            let found = self.get(parameter)?.shape();
            if found != expected {
                return Err(DatasetError::ShapeMismatch {
                    parameter,
                    expected,
                    found,
                });
            }
        }
        Ok(())
    }
}
