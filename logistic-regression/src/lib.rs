//! Logistic regression fitted by batch gradient descent on the
//! (unnormalized) cross-entropy cost

#[macro_use]
extern crate log;

use common::{ensure_len, Result};
use nalgebra::{DMatrix, DVector};

mod activation;
mod cross_entropy;
mod gradient_descent;
mod predict;

pub use activation::{logistic, logistic_scalar};
pub use cross_entropy::{cost_function, gradient, PROB_EPSILON};
pub use gradient_descent::gradient_descent;
pub use predict::{predict, predict_proba};

/// Make sure the design matrix, labels and parameters agree in their dimensions
fn check_shapes(x: &DMatrix<f64>, y: &DVector<f64>, theta: &DVector<f64>) -> Result<()> {
    ensure_len("labels", y.len(), x.nrows())?;
    ensure_len("theta", theta.len(), x.ncols())
}
