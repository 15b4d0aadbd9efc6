//! Precision contexts for rounded decimal arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{BigDecimal, RoundingMode};

/// A significant-digit budget paired with a rounding rule.
///
/// Every rounded operation on [`BigDecimal`] takes a context, so the digit
/// growth of an iterative computation stays bounded. A precision of `0`
/// means unlimited: rounding is a no-op and context division is rejected.
///
/// # Example
///
/// ```rust
/// use precis_core::types::{BigDecimal, MathContext, RoundingMode};
///
/// let mc = MathContext::new(3, RoundingMode::HalfEven);
/// let x: BigDecimal = "2.345".parse().unwrap();
/// assert_eq!(x.round(&mc).to_string(), "2.34");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MathContext {
    precision: u32,
    rounding: RoundingMode,
}

impl MathContext {
    /// A context that never rounds.
    pub const UNLIMITED: Self = Self::new(0, RoundingMode::HalfUp);

    /// Creates a new context.
    #[must_use]
    pub const fn new(precision: u32, rounding: RoundingMode) -> Self {
        Self {
            precision,
            rounding,
        }
    }

    /// Number of significant digits kept by rounded operations.
    #[must_use]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    /// Rounding rule applied to discarded digits.
    #[must_use]
    pub const fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Returns true if this context never rounds.
    #[must_use]
    pub const fn is_unlimited(&self) -> bool {
        self.precision == 0
    }

    /// Unit in the last place of `x` at this precision.
    ///
    /// For `x = 1.5` at 30 digits this is `1E-29`. Zero is treated as having
    /// its leading digit in the units position. Unlimited contexts report the
    /// unit of the last digit `x` actually carries.
    #[must_use]
    pub fn ulp(&self, x: &BigDecimal) -> BigDecimal {
        if self.is_unlimited() {
            return BigDecimal::new(1.into(), x.scale());
        }
        let exponent = x.adjusted_exponent() - (i64::from(self.precision) - 1);
        BigDecimal::new(1.into(), -exponent)
    }
}

impl fmt::Display for MathContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "precision={} roundingMode={}",
            self.precision, self.rounding
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_accessors() {
        let mc = MathContext::new(30, RoundingMode::HalfEven);
        assert_eq!(mc.precision(), 30);
        assert_eq!(mc.rounding(), RoundingMode::HalfEven);
        assert!(!mc.is_unlimited());
        assert!(MathContext::UNLIMITED.is_unlimited());
        assert_eq!(mc.to_string(), "precision=30 roundingMode=HALF_EVEN");
    }

    #[test]
    fn test_ulp_tracks_magnitude() {
        let mc = MathContext::new(30, RoundingMode::HalfEven);
        assert_eq!(mc.ulp(&dec("1.5")), dec("1e-29"));
        assert_eq!(mc.ulp(&dec("0.5")), dec("1e-30"));
        assert_eq!(mc.ulp(&dec("123.000")), dec("1e-27"));
        assert_eq!(mc.ulp(&dec("0.0001")), dec("1e-33"));
    }

    #[test]
    fn test_ulp_unlimited() {
        assert_eq!(MathContext::UNLIMITED.ulp(&dec("1.25")), dec("0.01"));
    }

    #[test]
    fn test_serde_round_trip() {
        let mc = MathContext::new(30, RoundingMode::HalfEven);
        let json = serde_json::to_string(&mc).unwrap();
        assert_eq!(json, r#"{"precision":30,"rounding":"half_even"}"#);
        let parsed: MathContext = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, mc);
    }
}
