/// The errors that can occur when evaluating a cost, gradient or kernel
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Two inputs disagree in their dimensionality
    #[error("shape mismatch for {what}: got {got}, expected {expected}")]
    ShapeMismatch {
        /// What was being compared, e.g. "labels" or "theta"
        what: &'static str,
        /// The observed length
        got: usize,
        /// The length implied by the other inputs
        expected: usize,
    },
    /// A numeric argument lies outside of its valid domain
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument
        name: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },
}

/// Convenience alias used throughout the workspace
pub type Result<T> = std::result::Result<T, Error>;

/// Fail with [`Error::ShapeMismatch`] if `got` differs from `expected`
#[inline(always)]
pub fn ensure_len(what: &'static str, got: usize, expected: usize) -> Result<()> {
    if got != expected {
        return Err(Error::ShapeMismatch { what, got, expected });
    }
    Ok(())
}
