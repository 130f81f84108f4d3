use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("Square root of negative number is not defined")]
    NegativeInput { value: f64 },
}

/// Non-negative square root.
///
/// Negative input is a domain violation. NaN is not negative and comes back
/// as NaN, the same as `f64::sqrt`.
pub fn root(value: f64) -> Result<f64, DomainError> {
    if value < 0.0 {
        debug!(value, "root: rejected negative input");
        return Err(DomainError::NegativeInput { value });
    }
    Ok(value.sqrt())
}
