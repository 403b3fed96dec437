use common::{GradientDescentParams, Result};

use crate::{cost_function, gradient};

/// Fit `theta0` and `theta1` by batch gradient descent on the squared error cost
///
/// # Arguments:
/// x, y: the samples
/// theta0, theta1: the initial parameters
/// params: learning rate and number of iterations
///
/// # Returns:
/// the fitted `(theta0, theta1)` and the cost after each update
pub fn gradient_descent(
    x: &[f64],
    y: &[f64],
    theta0: f64,
    theta1: f64,
    params: &GradientDescentParams,
) -> Result<((f64, f64), Vec<f64>)> {
    params.validate()?;

    let (mut theta0, mut theta1) = (theta0, theta1);
    let mut cost_history = Vec::with_capacity(params.iterations);
    for i in 0..params.iterations {
        let (d0, d1) = gradient(x, y, theta0, theta1)?;
        theta0 -= params.learning_rate * d0;
        theta1 -= params.learning_rate * d1;

        let cost = cost_function(x, y, theta0, theta1)?;
        trace!("iteration {}: theta: ({}, {}), cost: {}", i, theta0, theta1, cost);
        cost_history.push(cost);
    }
    debug!(
        "fitted theta: ({}, {}) after {} iterations, final cost: {:?}",
        theta0,
        theta1,
        params.iterations,
        cost_history.last()
    );

    Ok(((theta0, theta1), cost_history))
}
