use common::Result;
use nalgebra::{DMatrix, DVector};

use crate::{check_shapes, logistic};

/// Probabilities are clamped into `[PROB_EPSILON, 1 - PROB_EPSILON]`
/// before taking their logarithm
pub const PROB_EPSILON: f64 = 1e-15;

/// Compute the cross entropy cost of `theta` over the data set.
/// The sum is not normalized by the number of samples.
///
/// # Arguments:
/// x: design matrix with one sample per row
/// y: labels in {0, 1}, one per row of `x`
/// theta: parameter vector, one entry per column of `x`
pub fn cost_function(x: &DMatrix<f64>, y: &DVector<f64>, theta: &DVector<f64>) -> Result<f64> {
    check_shapes(x, y, theta)?;

    let p = logistic(&(x * theta)).map(|p| p.clamp(PROB_EPSILON, 1.0 - PROB_EPSILON));

    Ok(y
        .iter()
        .zip(p.iter())
        .map(|(y, p)| -y * p.ln() - (1.0 - y) * (1.0 - p).ln())
        .sum())
}

/// Gradient of [`cost_function`] with respect to `theta`, i.e. `X^T (logistic(X theta) - y)`
pub fn gradient(x: &DMatrix<f64>, y: &DVector<f64>, theta: &DVector<f64>) -> Result<DVector<f64>> {
    check_shapes(x, y, theta)?;

    let errors = logistic(&(x * theta)) - y;

    Ok(x.tr_mul(&errors))
}
