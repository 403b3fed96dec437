use common::{GradientDescentParams, Result};
use nalgebra::{DMatrix, DVector};

use crate::{check_shapes, cost_function, gradient};

/// Fit a logistic regression model by batch gradient descent.
/// Every iteration moves the whole parameter vector against the gradient and
/// records the cost of the updated parameters. Runs exactly
/// `params.iterations` times, without any convergence check.
///
/// # Arguments:
/// x: design matrix with one sample per row
/// y: labels in {0, 1}
/// theta: initial parameter vector, left untouched
/// params: learning rate and number of iterations
///
/// # Returns:
/// the learned parameters and the cost history, one entry per iteration
pub fn gradient_descent(
    x: &DMatrix<f64>,
    y: &DVector<f64>,
    theta: &DVector<f64>,
    params: &GradientDescentParams,
) -> Result<(DVector<f64>, Vec<f64>)> {
    params.validate()?;
    check_shapes(x, y, theta)?;

    let mut theta = theta.clone();
    let mut cost_history = Vec::with_capacity(params.iterations);
    for i in 0..params.iterations {
        let grad = gradient(x, y, &theta)?;
        theta.axpy(-params.learning_rate, &grad, 1.0);

        let cost = cost_function(x, y, &theta)?;
        trace!("iteration {}: cost: {}", i, cost);
        cost_history.push(cost);
    }
    debug!(
        "fitted theta: {:?} after {} iterations, final cost: {:?}",
        theta.as_slice(),
        params.iterations,
        cost_history.last()
    );

    Ok((theta, cost_history))
}
