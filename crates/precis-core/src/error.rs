//! Error types for the Precis library.
//!
//! A single error type is shared by the decimal primitives, the argument
//! guards and the root kernel, so callers can propagate any failure with `?`.

use thiserror::Error;

use crate::types::BigDecimal;

/// A specialized Result type for Precis operations.
pub type PrecisResult<T> = Result<T, PrecisError>;

/// The main error type for Precis operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrecisError {
    /// An argument violated a documented precondition.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Caller-visible description of the violated precondition.
        message: String,
    },

    /// Decimal division by zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// A string could not be parsed as a decimal.
    #[error("Cannot parse '{input}' as a decimal: {reason}")]
    ParseError {
        /// The rejected input.
        input: String,
        /// Why the input was rejected.
        reason: String,
    },

    /// Iterative computation did not settle within its iteration budget.
    #[error("Convergence failed after {iterations} iterations (delta: {delta})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Absolute difference between the last two guesses.
        delta: BigDecimal,
    },
}

impl PrecisError {
    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse_error(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ParseError {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates a convergence failure error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, delta: BigDecimal) -> Self {
        Self::ConvergenceFailed { iterations, delta }
    }

    /// Returns the caller-visible message of an invalid argument error.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::InvalidArgument { message } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PrecisError::invalid_argument("x has to be equal or greater than 4");
        assert_eq!(
            err.to_string(),
            "Invalid argument: x has to be equal or greater than 4"
        );
        assert_eq!(err.message(), Some("x has to be equal or greater than 4"));
    }

    #[test]
    fn test_convergence_error() {
        let err = PrecisError::convergence_failed(100, BigDecimal::new(1.into(), 29));
        assert!(err.to_string().contains("100 iterations"));
        assert!(err.message().is_none());
    }

    #[test]
    fn test_parse_error() {
        let err = PrecisError::parse_error("1.2.3", "multiple decimal points");
        assert!(err.to_string().contains("'1.2.3'"));
    }
}
