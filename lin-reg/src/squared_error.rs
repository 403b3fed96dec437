use common::{ensure_len, Result};
use nalgebra::DVector;

/// Residuals `theta0 + theta1 * x_i - y_i` together with `x` as a vector
fn residuals(
    x: &[f64],
    y: &[f64],
    theta0: f64,
    theta1: f64,
) -> Result<(DVector<f64>, DVector<f64>)> {
    ensure_len("y", y.len(), x.len())?;

    let x = DVector::from_column_slice(x);
    let y = DVector::from_column_slice(y);
    let residuals = x.map(|xi| theta0 + theta1 * xi) - y;

    Ok((residuals, x))
}

/// Compute the squared error cost `0.5 * sum((theta0 + theta1 * x_i - y_i)^2)`.
/// The sum is not normalized by the number of samples.
///
/// # Arguments:
/// x: the x values
/// y: the y values, same length as `x`
/// theta0: intercept parameter
/// theta1: slope parameter
pub fn cost_function(x: &[f64], y: &[f64], theta0: f64, theta1: f64) -> Result<f64> {
    let (r, _) = residuals(x, y, theta0, theta1)?;

    Ok(0.5 * r.norm_squared())
}

/// Compute the partial derivatives of [`cost_function`] with respect to
/// `theta0` and `theta1`
///
/// # Returns:
/// the tuple `(d_theta0, d_theta1)`
pub fn gradient(x: &[f64], y: &[f64], theta0: f64, theta1: f64) -> Result<(f64, f64)> {
    let (r, x) = residuals(x, y, theta0, theta1)?;

    Ok((r.sum(), r.dot(&x)))
}
