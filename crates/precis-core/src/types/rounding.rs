//! Rounding rules for discarded decimal digits.

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// How a value is rounded when digits are discarded.
///
/// The variants follow the usual decimal arithmetic vocabulary: `Up`/`Down`
/// are relative to zero, `Ceiling`/`Floor` relative to positive infinity, and
/// the `Half*` rules only differ on exact ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Away from zero.
    Up,
    /// Towards zero (truncation).
    Down,
    /// Towards positive infinity.
    Ceiling,
    /// Towards negative infinity.
    Floor,
    /// Nearest neighbour, ties away from zero.
    HalfUp,
    /// Nearest neighbour, ties towards zero.
    HalfDown,
    /// Nearest neighbour, ties to the even neighbour (banker's rounding).
    #[default]
    HalfEven,
}

impl RoundingMode {
    /// Divides `numerator` by `denominator` and rounds the quotient to an
    /// integer under this mode.
    ///
    /// Returns the rounded quotient and whether the division was exact.
    /// `denominator` must be non-zero; callers check before dividing.
    pub(crate) fn divide(self, numerator: &BigInt, denominator: &BigInt) -> (BigInt, bool) {
        let (quotient, remainder) = numerator.div_rem(denominator);
        if remainder.is_zero() {
            return (quotient, true);
        }

        let positive = (numerator.sign() == Sign::Minus) == (denominator.sign() == Sign::Minus);
        if self.rounds_away(positive, &quotient, &remainder, denominator) {
            let step = if positive { 1 } else { -1 };
            (quotient + step, false)
        } else {
            (quotient, false)
        }
    }

    fn rounds_away(
        self,
        positive: bool,
        quotient: &BigInt,
        remainder: &BigInt,
        denominator: &BigInt,
    ) -> bool {
        match self {
            Self::Up => true,
            Self::Down => false,
            Self::Ceiling => positive,
            Self::Floor => !positive,
            Self::HalfUp | Self::HalfDown | Self::HalfEven => {
                let doubled = remainder.abs() * 2u8;
                match doubled.cmp(&denominator.abs()) {
                    Ordering::Greater => true,
                    Ordering::Less => false,
                    Ordering::Equal => match self {
                        Self::HalfUp => true,
                        Self::HalfDown => false,
                        _ => quotient.is_odd(),
                    },
                }
            }
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Ceiling => "CEILING",
            Self::Floor => "FLOOR",
            Self::HalfUp => "HALF_UP",
            Self::HalfDown => "HALF_DOWN",
            Self::HalfEven => "HALF_EVEN",
        };
        write!(f, "{name}")
    }
}
