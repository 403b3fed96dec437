use common::{Error, Result};
use nalgebra::DMatrix;

use crate::{ensure_same_features, Kernel, DEFAULT_SIGMA};

/// The gaussian (RBF) kernel `exp(-||x1 - x2||^2 / (2 sigma^2))`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianKernel {
    /// Bandwidth, must be finite and positive
    pub sigma: f64,
}

impl Default for GaussianKernel {
    fn default() -> Self {
        Self {
            sigma: DEFAULT_SIGMA,
        }
    }
}

impl Kernel for GaussianKernel {
    #[inline(always)]
    fn gram(&self, x1: &DMatrix<f64>, x2: &DMatrix<f64>) -> Result<DMatrix<f64>> {
        gaussian_kernel(x1, x2, self.sigma)
    }
}

/// Compute the gaussian Gram matrix between the rows of `x1` and `x2`.
/// Filled row by row: each row of `x1` against all rows of `x2`.
pub fn gaussian_kernel(x1: &DMatrix<f64>, x2: &DMatrix<f64>, sigma: f64) -> Result<DMatrix<f64>> {
    if !(sigma.is_finite() && sigma > 0.0) {
        return Err(Error::InvalidArgument {
            name: "sigma",
            reason: "must be finite and positive",
        });
    }
    ensure_same_features(x1, x2)?;

    let denom = 2.0 * sigma * sigma;
    let mut gram: DMatrix<f64> = DMatrix::zeros(x1.nrows(), x2.nrows());
    for (mut out, row) in gram.row_iter_mut().zip(x1.row_iter()) {
        for (k, other) in out.iter_mut().zip(x2.row_iter()) {
            *k = (-(&other - &row).norm_squared() / denom).exp();
        }
    }
    trace!("gaussian gram matrix of shape {:?}", gram.shape());

    Ok(gram)
}
