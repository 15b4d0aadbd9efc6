//! Shared precision, rounding and presentation constants.
//!
//! Internal computations run at [`MATH_CONTEXT`] (30 significant digits,
//! half-even). Callers round the high-precision results down to
//! [`CURRENCY_SCALE`] or [`PERCENTAGE_SCALE`] at their own boundary:
//!
//! ```rust
//! use precis_core::constants::{CURRENCY_SCALE, ROUNDING_MODE};
//! use precis_core::types::BigDecimal;
//!
//! let raw: BigDecimal = "1.41421356237309504880168872421".parse().unwrap();
//! assert_eq!(raw.with_scale_round(CURRENCY_SCALE, ROUNDING_MODE).to_string(), "1.41");
//! ```

use num_bigint::BigInt;
use once_cell::sync::Lazy;

use crate::types::{BigDecimal, MathContext, RoundingMode};

/// Significant digits kept by every rounded step of internal computations.
pub const WORKING_PRECISION: u32 = 30;

/// Rounding rule for internal computations and presentation rounding.
pub const ROUNDING_MODE: RoundingMode = RoundingMode::HalfEven;

/// Working-precision context: 30 significant digits, half-even.
pub const MATH_CONTEXT: MathContext = MathContext::new(WORKING_PRECISION, ROUNDING_MODE);

/// Fractional digits of currency amounts.
pub const CURRENCY_SCALE: i64 = 2;

/// Fractional digits of percentages.
pub const PERCENTAGE_SCALE: i64 = 5;

// Presentation rounding must never be finer than the working precision.
const _: () = assert!(WORKING_PRECISION as i64 > CURRENCY_SCALE);
const _: () = assert!(WORKING_PRECISION as i64 > PERCENTAGE_SCALE);

/// Unit in the last place: `0.1 × 10^-30`, i.e. `1E-31`.
///
/// Convergence tolerance of iterative computations at the working precision.
pub static ULP: Lazy<BigDecimal> = Lazy::new(|| {
    BigDecimal::new(BigInt::from(1u8), 1).move_point_left(i64::from(WORKING_PRECISION))
});

/// Smallest accepted monetary value, `0.01`.
pub static MIN_VALUE: Lazy<BigDecimal> = Lazy::new(|| BigDecimal::new(BigInt::from(1u8), 2));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_working_context() {
        assert_eq!(MATH_CONTEXT.precision(), 30);
        assert_eq!(MATH_CONTEXT.rounding(), RoundingMode::HalfEven);
    }

    #[test]
    fn test_ulp_value() {
        let expected: BigDecimal = "1e-31".parse().unwrap();
        assert_eq!(*ULP, expected);
        assert_eq!(ULP.scale(), 31);
    }

    #[test]
    fn test_min_value() {
        assert_eq!(MIN_VALUE.to_string(), "0.01");
    }

    #[test]
    fn test_presentation_scales() {
        let raw: BigDecimal = "12.3456789".parse().unwrap();
        assert_eq!(
            raw.with_scale_round(CURRENCY_SCALE, ROUNDING_MODE).to_string(),
            "12.35"
        );
        assert_eq!(
            raw.with_scale_round(PERCENTAGE_SCALE, ROUNDING_MODE).to_string(),
            "12.34568"
        );
    }
}
