//! # Array backend
//!
//! The numeric-array capability the density models are written against:
//! construction, elementwise maps, grids, and trapezoidal integration.
//! Models are generic over [`NumericArray`]; the crate ships an implementation
//! for `faer::Mat<f64>`, which is the default everywhere.

use std::fmt;

use faer::Mat;
use thiserror::Error;

use crate::utils::usize_to_f64;

/// Errors raised by array operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ArrayError {
    #[error("array shapes {left:?} and {right:?} do not match")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    #[error("abscissa length ({abscissa_len}) must equal the integrated axis length ({axis_len})")]
    AxisLengthMismatch { axis_len: usize, abscissa_len: usize },
}

/// Axis collapsed by a reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Reduce over rows, leaving a `1 x ncols` array.
    Rows,
    /// Reduce over columns, leaving an `nrows x 1` array.
    Columns,
}

/// Two-dimensional `f64` array operations used by the spin models.
///
/// One-dimensional sequences are column vectors (`n x 1`). Methods that read a
/// sequence (`meshgrid`, the abscissa of `trapz`) flatten their input in
/// row-major order, so row vectors work as well.
pub trait NumericArray: Clone + fmt::Debug + Send + Sync + Sized {
    /// `(nrows, ncols)`.
    fn shape(&self) -> (usize, usize);

    /// Array of the given shape filled with `value`.
    fn full(nrows: usize, ncols: usize, value: f64) -> Self;

    /// Column vector holding `values`.
    fn from_column(values: &[f64]) -> Self;

    /// Element at `(row, col)`.
    fn at(&self, row: usize, col: usize) -> f64;

    /// Apply `f` to every element.
    #[must_use]
    fn map(&self, f: impl Fn(f64) -> f64) -> Self;

    /// Combine two equally shaped arrays elementwise.
    ///
    /// # Errors
    ///
    /// Returns `ArrayError::ShapeMismatch` if the shapes differ.
    fn zip_map(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Result<Self, ArrayError>;

    /// `num` evenly spaced values over `[start, stop]`, endpoints included.
    fn linspace(start: f64, stop: f64, num: usize) -> Self;

    /// Coordinate matrices for the grid spanned by `x` and `y`.
    ///
    /// Both outputs have shape `len(y) x len(x)`; the first varies along
    /// columns, the second along rows.
    fn meshgrid(x: &Self, y: &Self) -> (Self, Self);

    /// Trapezoidal integral of `self` along `axis`, sampled at `x`.
    ///
    /// # Errors
    ///
    /// Returns `ArrayError::AxisLengthMismatch` if `x` does not have one value
    /// per element of the integrated axis.
    fn trapz(&self, x: &Self, axis: Axis) -> Result<Self, ArrayError>;

    /// Elements in row-major order.
    fn to_vec(&self) -> Vec<f64> {
        let (nrows, ncols) = self.shape();
        let mut values = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                values.push(self.at(i, j));
            }
        }
        values
    }

    fn all_finite(&self) -> bool {
        self.to_vec().iter().all(|value| value.is_finite())
    }
}

impl NumericArray for Mat<f64> {
    fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    fn full(nrows: usize, ncols: usize, value: f64) -> Self {
        Self::from_fn(nrows, ncols, |_, _| value)
    }

    fn from_column(values: &[f64]) -> Self {
        Self::from_fn(values.len(), 1, |i, _| values[i])
    }

    fn at(&self, row: usize, col: usize) -> f64 {
        self[(row, col)]
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::from_fn(self.nrows(), self.ncols(), |i, j| f(self[(i, j)]))
    }

    fn zip_map(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Result<Self, ArrayError> {
        if self.shape() != other.shape() {
            return Err(ArrayError::ShapeMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(Self::from_fn(self.nrows(), self.ncols(), |i, j| {
            f(self[(i, j)], other[(i, j)])
        }))
    }

    fn linspace(start: f64, stop: f64, num: usize) -> Self {
        if num == 1 {
            return Self::from_fn(1, 1, |_, _| start);
        }
        let step = (stop - start) / usize_to_f64(num.saturating_sub(1));
        Self::from_fn(num, 1, |i, _| {
            if i + 1 == num {
                stop
            } else {
                usize_to_f64(i).mul_add(step, start)
            }
        })
    }

    fn meshgrid(x: &Self, y: &Self) -> (Self, Self) {
        let xs = x.to_vec();
        let ys = y.to_vec();
        let x_grid = Self::from_fn(ys.len(), xs.len(), |_, j| xs[j]);
        let y_grid = Self::from_fn(ys.len(), xs.len(), |i, _| ys[i]);
        (x_grid, y_grid)
    }

    fn trapz(&self, x: &Self, axis: Axis) -> Result<Self, ArrayError> {
        let xs = x.to_vec();
        let axis_len = match axis {
            Axis::Rows => self.nrows(),
            Axis::Columns => self.ncols(),
        };
        if xs.len() != axis_len {
            return Err(ArrayError::AxisLengthMismatch {
                axis_len,
                abscissa_len: xs.len(),
            });
        }
        let integrate = |sample: &dyn Fn(usize) -> f64| {
            xs.windows(2)
                .enumerate()
                .map(|(k, pair)| 0.5 * (pair[1] - pair[0]) * (sample(k) + sample(k + 1)))
                .sum::<f64>()
        };
        let integral = match axis {
            Axis::Rows => Self::from_fn(1, self.ncols(), |_, j| integrate(&|k| self[(k, j)])),
            Axis::Columns => Self::from_fn(self.nrows(), 1, |i, _| integrate(&|k| self[(i, k)])),
        };
        Ok(integral)
    }
}
