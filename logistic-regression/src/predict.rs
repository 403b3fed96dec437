use common::{ensure_len, Result};
use nalgebra::{DMatrix, DVector};

use crate::logistic;

/// Probability of the positive class for every row of `x`
pub fn predict_proba(x: &DMatrix<f64>, theta: &DVector<f64>) -> Result<DVector<f64>> {
    ensure_len("theta", theta.len(), x.ncols())?;

    Ok(logistic(&(x * theta)))
}

/// Hard 0/1 labels, positive where the probability reaches `threshold`
pub fn predict(x: &DMatrix<f64>, theta: &DVector<f64>, threshold: f64) -> Result<DVector<f64>> {
    Ok(predict_proba(x, theta)?.map(|p| if p >= threshold { 1.0 } else { 0.0 }))
}
