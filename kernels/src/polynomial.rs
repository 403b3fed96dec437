use common::{Error, Result};
use nalgebra::DMatrix;

use crate::{ensure_same_features, Kernel, DEFAULT_DEGREE};

/// The polynomial kernel `(x1 . x2 + 1)^degree`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolynomialKernel {
    /// Exponent applied to the shifted inner product
    pub degree: u32,
}

impl Default for PolynomialKernel {
    fn default() -> Self {
        Self {
            degree: DEFAULT_DEGREE,
        }
    }
}

impl Kernel for PolynomialKernel {
    #[inline(always)]
    fn gram(&self, x1: &DMatrix<f64>, x2: &DMatrix<f64>) -> Result<DMatrix<f64>> {
        polynomial_kernel(x1, x2, self.degree)
    }
}

/// Compute the polynomial Gram matrix between the rows of `x1` and `x2`.
/// Fails if `degree` does not fit into an `i32` exponent.
pub fn polynomial_kernel(
    x1: &DMatrix<f64>,
    x2: &DMatrix<f64>,
    degree: u32,
) -> Result<DMatrix<f64>> {
    let exponent = i32::try_from(degree).map_err(|_| Error::InvalidArgument {
        name: "degree",
        reason: "must not exceed i32::MAX",
    })?;
    ensure_same_features(x1, x2)?;

    let gram = (x1 * x2.transpose()).map(|k| (k + 1.0).powi(exponent));
    trace!("polynomial gram matrix of shape {:?}", gram.shape());

    Ok(gram)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> DMatrix<f64> {
        DMatrix::from_row_slice(3, 2, &[1.0, 2.0, 3.0, 4.0, 0.0, -1.0])
    }

    #[test]
    fn linear_degree_is_shifted_inner_product() {
        let x = samples();
        let k = polynomial_kernel(&x, &x, 1).unwrap();

        let goal = DMatrix::from_row_slice(
            3,
            3,
            &[6.0, 12.0, -1.0, 12.0, 26.0, -3.0, -1.0, -3.0, 2.0],
        );
        assert_eq!(k, goal);
        assert_eq!(k, &x * x.transpose() + DMatrix::from_element(3, 3, 1.0));
    }

    #[test]
    fn default_degree_squares() {
        let x = samples();
        let k = PolynomialKernel::default().gram(&x, &x).unwrap();

        let goal = DMatrix::from_row_slice(
            3,
            3,
            &[36.0, 144.0, 1.0, 144.0, 676.0, 9.0, 1.0, 9.0, 4.0],
        );
        assert_eq!(k, goal);
    }

    #[test]
    fn rectangular() {
        let x1 = samples();
        let x2 = DMatrix::from_row_slice(1, 2, &[1.0, 1.0]);
        let k = polynomial_kernel(&x1, &x2, 3).unwrap();

        assert_eq!(k, DMatrix::from_row_slice(3, 1, &[64.0, 512.0, 0.0]));
    }

    #[test]
    fn zero_degree_is_all_ones() {
        let x = samples();
        assert_eq!(polynomial_kernel(&x, &x, 0).unwrap(), DMatrix::from_element(3, 3, 1.0));
    }

    #[test]
    fn feature_mismatch() {
        let x1 = samples();
        let x2 = DMatrix::from_row_slice(1, 3, &[1.0, 1.0, 1.0]);

        let err = polynomial_kernel(&x1, &x2, 2).unwrap_err();
        assert_eq!(err, Error::ShapeMismatch { what: "features of x2", got: 3, expected: 2 });
    }

    #[test]
    fn degree_beyond_i32_is_rejected() {
        let x = samples();

        let err = polynomial_kernel(&x, &x, 3_000_000_000).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { name: "degree", .. }));

        let kernel = PolynomialKernel { degree: u32::MAX };
        assert!(kernel.gram(&x, &x).is_err());
        assert!(polynomial_kernel(&x, &x, i32::MAX as u32).is_ok());
    }
}
