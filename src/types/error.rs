//! Error types for the equilibrium spread library.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result type alias for equilibrium spread operations.
pub type CGResult<T> = std::result::Result<T, CGError>;

/// Main error type for the equilibrium spread library.
///
/// This enum represents all possible errors that can occur while solving for
/// an equilibrium quote. It uses tagged serialization for clear error
/// identification in serialized formats.
#[derive(Error, Debug, Clone, PartialEq)]
#[repr(u8)]
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "details"))]
pub enum CGError {
    /// Invalid model parameter.
    ///
    /// This error occurs when a distribution or market parameter is outside
    /// its domain, such as a non-positive standard deviation or rate, an
    /// informed-trading probability outside [0, 1], or a non-finite input.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String) = 0,

    /// Numerical error (overflow, NaN, infinity, etc.).
    ///
    /// This error occurs when a calculation produces a non-finite value,
    /// such as an unstable profit evaluation or a result that cannot be
    /// represented as a Decimal price.
    #[error("numerical error: {0}")]
    NumericalError(String) = 1,

    /// Root finder failed to converge.
    ///
    /// This error occurs when the root finder exhausts its iteration budget
    /// without meeting its tolerance, or when the profit function goes flat
    /// and no further progress is possible — typically the sign that no
    /// equilibrium exists for the supplied parameters.
    #[error("convergence failure: {0}")]
    ConvergenceFailure(String) = 2,

    /// Invalid equilibrium quote.
    ///
    /// This error occurs when the solver converges to a root that does not
    /// form a valid quote, such as a materially negative spread.
    #[error("invalid quote: {0}")]
    InvalidQuote(String) = 3,
}

impl CGError {
    /// Returns true if this error is related to parameter validation.
    #[must_use]
    pub fn is_parameter_error(&self) -> bool {
        matches!(self, Self::InvalidParameter(_))
    }

    /// Returns true if this error is related to numerical issues.
    #[must_use]
    pub fn is_numerical_error(&self) -> bool {
        matches!(self, Self::NumericalError(_))
    }

    /// Returns true if this error is a convergence failure.
    #[must_use]
    pub fn is_convergence_failure(&self) -> bool {
        matches!(self, Self::ConvergenceFailure(_))
    }

    /// Returns true if this error is related to quote validity.
    #[must_use]
    pub fn is_quote_error(&self) -> bool {
        matches!(self, Self::InvalidQuote(_))
    }

    /// Returns the error message as a string slice.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidParameter(msg)
            | Self::NumericalError(msg)
            | Self::ConvergenceFailure(msg)
            | Self::InvalidQuote(msg) => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CGError::InvalidParameter("std_dev must be positive".to_string());
        assert_eq!(err.to_string(), "invalid parameter: std_dev must be positive");

        let err = CGError::ConvergenceFailure("max iterations reached".to_string());
        assert_eq!(err.to_string(), "convergence failure: max iterations reached");
    }

    #[test]
    fn test_error_predicates() {
        let err = CGError::InvalidParameter("x".to_string());
        assert!(err.is_parameter_error());
        assert!(!err.is_numerical_error());
        assert!(!err.is_convergence_failure());
        assert!(!err.is_quote_error());

        let err = CGError::NumericalError("x".to_string());
        assert!(err.is_numerical_error());

        let err = CGError::ConvergenceFailure("x".to_string());
        assert!(err.is_convergence_failure());

        let err = CGError::InvalidQuote("x".to_string());
        assert!(err.is_quote_error());
    }

    #[test]
    fn test_error_message() {
        let err = CGError::NumericalError("profit is NaN".to_string());
        assert_eq!(err.message(), "profit is NaN");
    }
}
