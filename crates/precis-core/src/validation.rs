//! Argument guards.
//!
//! Guards fail fast with [`PrecisError::InvalidArgument`] so callers can
//! reject bad inputs with `?` before any computation starts.

use std::fmt::Display;

use crate::constants::MIN_VALUE;
use crate::error::{PrecisError, PrecisResult};
use crate::types::BigDecimal;

/// Ensures `right` is greater than or equal to `left`.
///
/// The operands may be different numeric types: any `R` that can be
/// compared with `L` through `PartialOrd<L>` works, e.g. a [`BigDecimal`]
/// against an `i64` bound. Pairs that cannot be ordered fail the check.
///
/// The error message names the `label` and the offending `right` value:
/// `"<label> has to be equal or greater than <right>"`.
///
/// # Example
///
/// ```rust
/// use precis_core::validation::check_argument_greater_than_or_equal;
///
/// assert!(check_argument_greater_than_or_equal("x", &5, &5).is_ok());
///
/// let err = check_argument_greater_than_or_equal("x", &5, &4).unwrap_err();
/// assert_eq!(err.message(), Some("x has to be equal or greater than 4"));
/// ```
///
/// # Errors
///
/// Returns `PrecisError::InvalidArgument` if `right < left`.
pub fn check_argument_greater_than_or_equal<L, R>(
    label: &str,
    left: &L,
    right: &R,
) -> PrecisResult<()>
where
    L: ?Sized,
    R: PartialOrd<L> + Display + ?Sized,
{
    if right >= left {
        Ok(())
    } else {
        Err(PrecisError::invalid_argument(format!(
            "{label} has to be equal or greater than {right}"
        )))
    }
}

/// Ensures `value` is at least [`MIN_VALUE`] (`0.01`).
///
/// # Errors
///
/// Returns `PrecisError::InvalidArgument` if `value < 0.01`.
pub fn check_minimum_value(label: &str, value: &BigDecimal) -> PrecisResult<()> {
    check_argument_greater_than_or_equal(label, &*MIN_VALUE, value)
}
