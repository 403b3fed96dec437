//! Squared error cost and its gradient for univariate linear regression,
//! where the hypothesis is `theta0 + theta1 * x`.

#[macro_use]
extern crate log;

mod gradient_descent;
mod squared_error;

pub use gradient_descent::gradient_descent;
pub use squared_error::{cost_function, gradient};
