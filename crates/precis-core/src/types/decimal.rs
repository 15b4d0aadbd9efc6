//! Arbitrary-precision decimal values.

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use super::{MathContext, RoundingMode};
use crate::error::{PrecisError, PrecisResult};

/// Largest scale a `rust_decimal::Decimal` can carry.
const RUST_DECIMAL_MAX_SCALE: i64 = 28;

/// Largest scale magnitude accepted when parsing.
///
/// Strings whose scale falls outside `-MAX_PARSE_SCALE..=MAX_PARSE_SCALE`
/// (e.g. `1e-200000` or `1e200000`) are rejected with
/// [`PrecisError::ParseError`], so text and serde input cannot request
/// unbounded digit expansion.
pub const MAX_PARSE_SCALE: i64 = 100_000;

/// An exact base-10 number: `unscaled × 10^-scale`.
///
/// Values are immutable; every operation returns a new value. Addition,
/// subtraction, multiplication and integer powers are exact. Division and
/// the `*_round` operations take an explicit scale or [`MathContext`] so digit
/// growth stays under the caller's control.
///
/// Equality and ordering are numeric, so `2.0 == 2.00`. The representation
/// (unscaled value and scale) is still observable through [`unscaled`] and
/// [`scale`].
///
/// [`unscaled`]: BigDecimal::unscaled
/// [`scale`]: BigDecimal::scale
///
/// # Example
///
/// ```rust
/// use precis_core::types::{BigDecimal, MathContext, RoundingMode};
///
/// let a: BigDecimal = "1".parse().unwrap();
/// let b: BigDecimal = "3".parse().unwrap();
/// let mc = MathContext::new(5, RoundingMode::HalfEven);
///
/// assert_eq!(a.div_round(&b, &mc).unwrap().to_string(), "0.33333");
/// ```
#[derive(Debug, Clone)]
pub struct BigDecimal {
    unscaled: BigInt,
    scale: i64,
}

impl BigDecimal {
    /// Creates a decimal equal to `unscaled × 10^-scale`.
    #[must_use]
    pub fn new(unscaled: BigInt, scale: i64) -> Self {
        Self { unscaled, scale }
    }

    /// Zero with scale 0.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(BigInt::zero(), 0)
    }

    /// One with scale 0.
    #[must_use]
    pub fn one() -> Self {
        Self::new(BigInt::from(1u8), 0)
    }

    /// The unscaled integer value.
    #[must_use]
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// Number of digits after the decimal point (negative for multiples of
    /// powers of ten).
    #[must_use]
    pub fn scale(&self) -> i64 {
        self.scale
    }

    /// Number of digits in the unscaled value (1 for zero).
    #[must_use]
    pub fn precision(&self) -> u64 {
        count_digits(&self.unscaled)
    }

    /// Power of ten of the leading significant digit.
    ///
    /// `123.45` has adjusted exponent 2, `0.00120` has -3.
    #[must_use]
    pub fn adjusted_exponent(&self) -> i64 {
        self.precision() as i64 - 1 - self.scale
    }

    /// Returns -1, 0 or 1 according to the sign of the value.
    #[must_use]
    pub fn signum(&self) -> i32 {
        match self.unscaled.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    /// Returns true if the value is zero, whatever its scale.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    /// Returns true if the value is strictly below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.signum() < 0
    }

    /// Returns true if the value is strictly above zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.signum() > 0
    }

    /// Absolute value, keeping the scale.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::new(self.unscaled.abs(), self.scale)
    }

    /// Exact integer power. `x.pow(0)` is one.
    #[must_use]
    pub fn pow(&self, exponent: u32) -> Self {
        Self::new(
            num_traits::pow(self.unscaled.clone(), exponent as usize),
            self.scale * i64::from(exponent),
        )
    }

    /// Integer power rounded to the given context.
    #[must_use]
    pub fn pow_round(&self, exponent: u32, mc: &MathContext) -> Self {
        self.pow(exponent).round(mc)
    }

    /// Moves the decimal point `places` digits to the left (divides by `10^places`).
    #[must_use]
    pub fn move_point_left(&self, places: i64) -> Self {
        Self::new(self.unscaled.clone(), self.scale + places)
    }

    /// Moves the decimal point `places` digits to the right (multiplies by `10^places`).
    #[must_use]
    pub fn move_point_right(&self, places: i64) -> Self {
        Self::new(self.unscaled.clone(), self.scale - places)
    }

    /// Rescales to exactly `new_scale` fractional digits, rounding discarded
    /// digits with `mode`.
    ///
    /// This is how callers bring a high-precision result down to a
    /// presentation scale such as currency (2) or percentage (5).
    #[must_use]
    pub fn with_scale_round(&self, new_scale: i64, mode: RoundingMode) -> Self {
        match new_scale.cmp(&self.scale) {
            Ordering::Equal => self.clone(),
            Ordering::Greater => Self::new(
                &self.unscaled * ten_to_the(new_scale - self.scale),
                new_scale,
            ),
            Ordering::Less => {
                let (rounded, _) =
                    mode.divide(&self.unscaled, &ten_to_the(self.scale - new_scale));
                Self::new(rounded, new_scale)
            }
        }
    }

    /// Rounds to the significant-digit budget of `mc`.
    #[must_use]
    pub fn round(&self, mc: &MathContext) -> Self {
        if mc.is_unlimited() {
            return self.clone();
        }
        let precision = u64::from(mc.precision());
        let digits = self.precision();
        if digits <= precision {
            return self.clone();
        }

        let dropped = (digits - precision) as i64;
        let rounded = self.with_scale_round(self.scale - dropped, mc.rounding());
        // 9.995 -> 10.00 gains a digit; the extra digit is a trailing zero.
        if rounded.precision() > precision {
            rounded.with_scale_round(rounded.scale - 1, mc.rounding())
        } else {
            rounded
        }
    }

    /// Adds and rounds the sum to the significant-digit budget of `mc`.
    ///
    /// Gives the same result as `(self + other).round(mc)`. An operand lying
    /// wholly below the last digit the sum can keep only breaks ties, so it
    /// is replaced by a one-digit value of the same sign just under that
    /// position and the operands are never aligned across the full gap.
    #[must_use]
    pub fn add_round(&self, other: &Self, mc: &MathContext) -> Self {
        if mc.is_unlimited() || self.is_zero() || other.is_zero() {
            return (self + other).round(mc);
        }
        let (large, small) = if self.adjusted_exponent() >= other.adjusted_exponent() {
            (self, other)
        } else {
            (other, self)
        };

        // Scale of the last digit kept when the sum has `large`'s magnitude.
        let kept_scale = large.scale - large.precision() as i64 + i64::from(mc.precision());
        let small_leading_scale = -small.adjusted_exponent();
        if small_leading_scale > large.scale + 2 && small_leading_scale > kept_scale + 2 {
            let stand_in = Self::new(BigInt::from(small.signum()), large.scale.max(kept_scale) + 3);
            return (large + &stand_in).round(mc);
        }
        (large + small).round(mc)
    }

    /// Divides and rounds the quotient to exactly `scale` fractional digits.
    ///
    /// # Errors
    ///
    /// Returns `PrecisError::DivisionByZero` if `divisor` is zero.
    pub fn div_scale(
        &self,
        divisor: &Self,
        scale: i64,
        mode: RoundingMode,
    ) -> PrecisResult<Self> {
        let (quotient, _) = self.quotient_at_scale(divisor, scale, mode)?;
        Ok(Self::new(quotient, scale))
    }

    /// Divides and rounds the quotient to the significant-digit budget of `mc`.
    ///
    /// The exact rational quotient is rounded once. Quotients that are exact
    /// drop trailing zeros down to the preferred scale
    /// `self.scale() - divisor.scale()`, so `4 / 2` yields `2` rather than
    /// thirty digits of zeros.
    ///
    /// # Errors
    ///
    /// Returns `PrecisError::DivisionByZero` if `divisor` is zero and
    /// `PrecisError::InvalidArgument` for an unlimited context.
    pub fn div_round(&self, divisor: &Self, mc: &MathContext) -> PrecisResult<Self> {
        if divisor.is_zero() {
            return Err(PrecisError::DivisionByZero);
        }
        if mc.is_unlimited() {
            return Err(PrecisError::invalid_argument(
                "division requires a bounded precision",
            ));
        }

        let preferred_scale = self.scale - divisor.scale;
        if self.is_zero() {
            return Ok(Self::new(BigInt::zero(), preferred_scale));
        }

        // Pick a scale giving `precision` or `precision + 1` quotient digits,
        // then settle on exactly `precision` before the single rounding.
        let precision = i64::from(mc.precision());
        let estimate = self.adjusted_exponent() - divisor.adjusted_exponent();
        let mut scale = precision - estimate;
        let (truncated, _) = self.quotient_at_scale(divisor, scale, RoundingMode::Down)?;
        if count_digits(&truncated) as i64 > precision {
            scale -= 1;
        }

        let (quotient, exact) = self.quotient_at_scale(divisor, scale, mc.rounding())?;
        let mut result = Self::new(quotient, scale);
        if result.precision() as i64 > precision {
            result = result.with_scale_round(scale - 1, mc.rounding());
        }
        if exact {
            result = result.strip_trailing_zeros_to(preferred_scale);
        }
        Ok(result)
    }

    /// Removes trailing zeros from the unscaled value. Zero becomes `0` with
    /// scale 0.
    #[must_use]
    pub fn strip_trailing_zeros(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        self.strip_trailing_zeros_to(i64::MIN)
    }

    fn strip_trailing_zeros_to(&self, preferred_scale: i64) -> Self {
        let ten = BigInt::from(10u8);
        let mut unscaled = self.unscaled.clone();
        let mut scale = self.scale;
        while scale > preferred_scale && !unscaled.is_zero() {
            let (quotient, remainder) = unscaled.div_rem(&ten);
            if !remainder.is_zero() {
                break;
            }
            unscaled = quotient;
            scale -= 1;
        }
        Self::new(unscaled, scale)
    }

    /// Rounded integer quotient of `self / divisor` expressed at `scale`,
    /// plus whether it was exact.
    fn quotient_at_scale(
        &self,
        divisor: &Self,
        scale: i64,
        mode: RoundingMode,
    ) -> PrecisResult<(BigInt, bool)> {
        if divisor.is_zero() {
            return Err(PrecisError::DivisionByZero);
        }
        // self / divisor = (u1 / u2) * 10^(s2 - s1), so at `scale` the
        // unscaled quotient is u1 * 10^(scale + s2 - s1) / u2.
        let shift = scale + divisor.scale - self.scale;
        let (numerator, denominator) = if shift >= 0 {
            (&self.unscaled * ten_to_the(shift), divisor.unscaled.clone())
        } else {
            (self.unscaled.clone(), &divisor.unscaled * ten_to_the(-shift))
        };
        Ok(mode.divide(&numerator, &denominator))
    }

    /// Brings both operands to the larger of their scales.
    fn align(&self, other: &Self) -> (BigInt, BigInt, i64) {
        match self.scale.cmp(&other.scale) {
            Ordering::Equal => (self.unscaled.clone(), other.unscaled.clone(), self.scale),
            Ordering::Greater => (
                self.unscaled.clone(),
                &other.unscaled * ten_to_the(self.scale - other.scale),
                self.scale,
            ),
            Ordering::Less => (
                &self.unscaled * ten_to_the(other.scale - self.scale),
                other.unscaled.clone(),
                other.scale,
            ),
        }
    }
}

/// `10^exponent` for a non-negative exponent.
fn ten_to_the(exponent: i64) -> BigInt {
    num_traits::pow(BigInt::from(10u8), exponent.max(0) as usize)
}

fn count_digits(value: &BigInt) -> u64 {
    if value.is_zero() {
        return 1;
    }
    // 2^(bits-1) <= |value| < 2^bits pins the digit count to two candidates.
    let magnitude = value.magnitude();
    let estimate = ((magnitude.bits() - 1) as f64 * std::f64::consts::LOG10_2) as u64;
    let lower = num_traits::pow(BigUint::from(10u8), estimate as usize);
    if magnitude < &lower {
        estimate
    } else if magnitude < &(&lower * BigUint::from(10u8)) {
        estimate + 1
    } else {
        estimate + 2
    }
}

impl Default for BigDecimal {
    fn default() -> Self {
        Self::zero()
    }
}

// ---------------------------------------------------------------------------
// Equality and ordering
// ---------------------------------------------------------------------------

impl PartialEq for BigDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigDecimal {}

impl PartialOrd for BigDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let (sign, other_sign) = (self.signum(), other.signum());
        if sign != other_sign {
            return sign.cmp(&other_sign);
        }
        if sign == 0 {
            return Ordering::Equal;
        }

        let by_magnitude = self.adjusted_exponent().cmp(&other.adjusted_exponent());
        if by_magnitude != Ordering::Equal {
            return if sign > 0 {
                by_magnitude
            } else {
                by_magnitude.reverse()
            };
        }

        let (left, right, _) = self.align(other);
        left.cmp(&right)
    }
}

impl Hash for BigDecimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = self.strip_trailing_zeros();
        normalized.unscaled.hash(state);
        normalized.scale.hash(state);
    }
}

/// Comparisons against other numeric types, in both directions.
macro_rules! impl_cross_compare {
    ($($t:ty),*) => {
        $(
            impl PartialEq<$t> for BigDecimal {
                fn eq(&self, other: &$t) -> bool {
                    *self == BigDecimal::from(*other)
                }
            }

            impl PartialEq<BigDecimal> for $t {
                fn eq(&self, other: &BigDecimal) -> bool {
                    BigDecimal::from(*self) == *other
                }
            }

            impl PartialOrd<$t> for BigDecimal {
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    Some(self.cmp(&BigDecimal::from(*other)))
                }
            }

            impl PartialOrd<BigDecimal> for $t {
                fn partial_cmp(&self, other: &BigDecimal) -> Option<Ordering> {
                    Some(BigDecimal::from(*self).cmp(other))
                }
            }
        )*
    };
}

impl_cross_compare!(i32, i64, u32, u64, Decimal);

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

impl Add<&BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    fn add(self, rhs: &BigDecimal) -> BigDecimal {
        let (left, right, scale) = self.align(rhs);
        BigDecimal::new(left + right, scale)
    }
}

impl Sub<&BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    fn sub(self, rhs: &BigDecimal) -> BigDecimal {
        let (left, right, scale) = self.align(rhs);
        BigDecimal::new(left - right, scale)
    }
}

impl Mul<&BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    fn mul(self, rhs: &BigDecimal) -> BigDecimal {
        BigDecimal::new(&self.unscaled * &rhs.unscaled, self.scale + rhs.scale)
    }
}

/// Forwards owned operand combinations to the by-reference implementation.
macro_rules! forward_binop {
    ($($trait:ident, $method:ident);*) => {
        $(
            impl $trait<BigDecimal> for BigDecimal {
                type Output = BigDecimal;

                fn $method(self, rhs: BigDecimal) -> BigDecimal {
                    (&self).$method(&rhs)
                }
            }

            impl $trait<&BigDecimal> for BigDecimal {
                type Output = BigDecimal;

                fn $method(self, rhs: &BigDecimal) -> BigDecimal {
                    (&self).$method(rhs)
                }
            }

            impl $trait<BigDecimal> for &BigDecimal {
                type Output = BigDecimal;

                fn $method(self, rhs: BigDecimal) -> BigDecimal {
                    self.$method(&rhs)
                }
            }
        )*
    };
}

forward_binop!(Add, add; Sub, sub; Mul, mul);

impl Neg for BigDecimal {
    type Output = BigDecimal;

    fn neg(self) -> BigDecimal {
        BigDecimal::new(-self.unscaled, self.scale)
    }
}

impl Neg for &BigDecimal {
    type Output = BigDecimal;

    fn neg(self) -> BigDecimal {
        BigDecimal::new(-&self.unscaled, self.scale)
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigDecimal {
                fn from(value: $t) -> Self {
                    Self::new(BigInt::from(value), 0)
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, u32, u64);

impl From<BigInt> for BigDecimal {
    fn from(value: BigInt) -> Self {
        Self::new(value, 0)
    }
}

impl From<Decimal> for BigDecimal {
    fn from(value: Decimal) -> Self {
        Self::new(BigInt::from(value.mantissa()), i64::from(value.scale()))
    }
}

impl TryFrom<&BigDecimal> for Decimal {
    type Error = PrecisError;

    /// Converts to a 96-bit `rust_decimal::Decimal`, rounding half-even to as
    /// many fractional digits (at most 28) as the mantissa allows.
    fn try_from(value: &BigDecimal) -> PrecisResult<Self> {
        let mut scale = value.scale.clamp(0, RUST_DECIMAL_MAX_SCALE);
        loop {
            let candidate = value.with_scale_round(scale, RoundingMode::HalfEven);
            if let Some(mantissa) = candidate.unscaled.to_i128() {
                if let Ok(converted) = Decimal::try_from_i128_with_scale(mantissa, scale as u32) {
                    return Ok(converted);
                }
            }
            if scale == 0 {
                return Err(PrecisError::invalid_argument(format!(
                    "{value} is out of range for a 96-bit decimal"
                )));
            }
            scale -= 1;
        }
    }
}

impl TryFrom<BigDecimal> for Decimal {
    type Error = PrecisError;

    fn try_from(value: BigDecimal) -> PrecisResult<Self> {
        Decimal::try_from(&value)
    }
}

impl FromStr for BigDecimal {
    type Err = PrecisError;

    /// Parses `[+-]digits[.digits][(e|E)[+-]digits]`.
    fn from_str(s: &str) -> PrecisResult<Self> {
        let input = s.trim();
        if input.is_empty() {
            return Err(PrecisError::parse_error(s, "empty input"));
        }

        let (mantissa, exponent) = match input.find(|c: char| c == 'e' || c == 'E') {
            Some(index) => {
                let exponent = input[index + 1..]
                    .parse::<i64>()
                    .map_err(|e| PrecisError::parse_error(s, format!("bad exponent: {e}")))?;
                (&input[..index], exponent)
            }
            None => (input, 0),
        };

        let (negative, body) = match mantissa.as_bytes().first() {
            Some(b'-') => (true, &mantissa[1..]),
            Some(b'+') => (false, &mantissa[1..]),
            _ => (false, mantissa),
        };

        let (integer_part, fraction_part) = body.split_once('.').unwrap_or((body, ""));
        if integer_part.is_empty() && fraction_part.is_empty() {
            return Err(PrecisError::parse_error(s, "no digits"));
        }
        if !integer_part
            .bytes()
            .chain(fraction_part.bytes())
            .all(|b| b.is_ascii_digit())
        {
            return Err(PrecisError::parse_error(s, "invalid digit"));
        }

        let digits = format!("{integer_part}{fraction_part}");
        let magnitude: BigInt = digits
            .parse()
            .map_err(|e| PrecisError::parse_error(s, format!("{e}")))?;
        let unscaled = if negative { -magnitude } else { magnitude };

        let scale = i64::try_from(fraction_part.len())
            .ok()
            .and_then(|digits| digits.checked_sub(exponent))
            .filter(|scale| (-MAX_PARSE_SCALE..=MAX_PARSE_SCALE).contains(scale))
            .ok_or_else(|| {
                PrecisError::parse_error(
                    s,
                    format!("scale outside -{MAX_PARSE_SCALE}..={MAX_PARSE_SCALE}"),
                )
            })?;

        Ok(Self::new(unscaled, scale))
    }
}

impl fmt::Display for BigDecimal {
    /// Plain notation, never scientific: `1E+3` prints as `1000`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.unscaled.magnitude().to_str_radix(10);
        let sign = if self.is_negative() { "-" } else { "" };

        if self.scale <= 0 {
            if self.is_zero() {
                return write!(f, "0");
            }
            let zeros = "0".repeat((-self.scale) as usize);
            return write!(f, "{sign}{digits}{zeros}");
        }

        let scale = self.scale as usize;
        if digits.len() > scale {
            let (integer, fraction) = digits.split_at(digits.len() - scale);
            write!(f, "{sign}{integer}.{fraction}")
        } else {
            let zeros = "0".repeat(scale - digits.len());
            write!(f, "{sign}0.{zeros}{digits}")
        }
    }
}

impl Serialize for BigDecimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BigDecimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
