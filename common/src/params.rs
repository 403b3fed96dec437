use crate::{Error, Result};

/// The parameters of a batch gradient descent run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientDescentParams {
    /// Step size applied to the gradient in every update
    pub learning_rate: f64,
    /// Exact number of updates to perform. There is no convergence check,
    /// so a poorly chosen learning rate simply yields an increasing cost.
    pub iterations: usize,
}

impl GradientDescentParams {
    /// Create new parameters
    pub fn new(learning_rate: f64, iterations: usize) -> Self {
        Self {
            learning_rate,
            iterations,
        }
    }

    /// Check that the learning rate is usable
    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() {
            return Err(Error::InvalidArgument {
                name: "learning_rate",
                reason: "must be finite",
            });
        }
        Ok(())
    }
}
