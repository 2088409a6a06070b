//! Density values returned by the spin models.

use crate::backend::{ArrayError, NumericArray};

/// Output of a population model.
///
/// `Zero` stands for an identically vanishing density that broadcasts against
/// any dataset; it is what models return for hyper-parameters outside the
/// population's support, without touching the dataset.
#[derive(Debug, Clone)]
pub enum Density<A> {
    Zero,
    Values(A),
}

impl<A: NumericArray> Density<A> {
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        matches!(self, Self::Zero)
    }

    /// Density at `(row, col)`; always `0` for `Zero`.
    #[must_use]
    pub fn value_at(&self, row: usize, col: usize) -> f64 {
        match self {
            Self::Zero => 0.0,
            Self::Values(values) => values.at(row, col),
        }
    }

    /// Elementwise product; `Zero` absorbs anything.
    ///
    /// # Errors
    ///
    /// Returns `ArrayError::ShapeMismatch` if both sides hold arrays of
    /// different shapes.
    pub fn multiply(self, other: Self) -> Result<Self, ArrayError> {
        match (self, other) {
            (Self::Values(lhs), Self::Values(rhs)) => {
                Ok(Self::Values(lhs.zip_map(&rhs, |l, r| l * r)?))
            }
            _ => Ok(Self::Zero),
        }
    }

    /// Materialize the density, broadcasting `Zero` to the shape of `like`.
    #[must_use]
    pub fn into_array(self, like: &A) -> A {
        match self {
            Self::Zero => {
                let (nrows, ncols) = like.shape();
                A::full(nrows, ncols, 0.0)
            }
            Self::Values(values) => values,
        }
    }
}

impl<A> From<A> for Density<A> {
    fn from(values: A) -> Self {
        Self::Values(values)
    }
}
