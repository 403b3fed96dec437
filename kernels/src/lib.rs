//! Kernel functions producing Gram matrices for kernelized classifiers.
//! Samples are the rows of the input matrices.

#[macro_use]
extern crate log;

use common::{ensure_len, Result};
use nalgebra::DMatrix;

mod gaussian;
mod polynomial;

pub use gaussian::{gaussian_kernel, GaussianKernel};
pub use polynomial::{polynomial_kernel, PolynomialKernel};

/// Default degree of the polynomial kernel
pub const DEFAULT_DEGREE: u32 = 2;

/// Default bandwidth of the gaussian kernel
pub const DEFAULT_SIGMA: f64 = 1.0;

/// Generic way of evaluating a kernel between two sets of samples
pub trait Kernel: Clone {
    /// Compute the Gram matrix `K[i, j] = k(x1_i, x2_j)`
    ///
    /// # Parameters
    /// x1: n1 samples with d features each
    /// x2: n2 samples with the same d features
    ///
    /// # Returns
    /// The n1 x n2 Gram matrix
    fn gram(&self, x1: &DMatrix<f64>, x2: &DMatrix<f64>) -> Result<DMatrix<f64>>;
}

/// Whether `k` is square and equal to its transpose.
/// Holds for any Gram matrix computed from a sample set with itself.
pub fn is_symmetric(k: &DMatrix<f64>) -> bool {
    k.is_square() && *k == k.transpose()
}

fn ensure_same_features(x1: &DMatrix<f64>, x2: &DMatrix<f64>) -> Result<()> {
    ensure_len("features of x2", x2.ncols(), x1.ncols())
}
