//! Property-based tests for decimal arithmetic invariants.
//!
//! These tests verify properties that should hold for any input:
//! - Rounding to a scale agrees with `rust_decimal` for every mode it shares
//! - Ordering agrees with `rust_decimal`
//! - Rounded addition equals the exact sum rounded once
//! - Rounded division stays within one ulp of the exact quotient

use precis_core::prelude::*;
use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

// =============================================================================
// GENERATORS
// =============================================================================

/// Signed values with up to eight fractional digits, representable in both
/// decimal types.
fn mantissa_and_scale() -> impl Strategy<Value = (i64, u32)> {
    (-10_000_000_000_000i64..10_000_000_000_000, 0u32..=8)
}

fn both((mantissa, scale): (i64, u32)) -> (BigDecimal, Decimal) {
    (
        BigDecimal::new(mantissa.into(), i64::from(scale)),
        Decimal::new(mantissa, scale),
    )
}

fn rounding_pair() -> impl Strategy<Value = (RoundingMode, RoundingStrategy)> {
    prop_oneof![
        Just((RoundingMode::HalfEven, RoundingStrategy::MidpointNearestEven)),
        Just((RoundingMode::HalfUp, RoundingStrategy::MidpointAwayFromZero)),
        Just((RoundingMode::HalfDown, RoundingStrategy::MidpointTowardZero)),
        Just((RoundingMode::Up, RoundingStrategy::AwayFromZero)),
        Just((RoundingMode::Down, RoundingStrategy::ToZero)),
        Just((RoundingMode::Ceiling, RoundingStrategy::ToPositiveInfinity)),
        Just((RoundingMode::Floor, RoundingStrategy::ToNegativeInfinity)),
    ]
}

fn context() -> impl Strategy<Value = MathContext> {
    (1u32..=34, rounding_pair()).prop_map(|(precision, (mode, _))| MathContext::new(precision, mode))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_scale_rounding_agrees_with_rust_decimal(
        value in mantissa_and_scale(),
        new_scale in 0u32..=8,
        (mode, strategy) in rounding_pair(),
    ) {
        let (big, fixed) = both(value);
        let rounded = big.with_scale_round(i64::from(new_scale), mode);
        let expected = fixed.round_dp_with_strategy(new_scale, strategy);
        prop_assert_eq!(rounded, expected);
    }

    #[test]
    fn prop_ordering_agrees_with_rust_decimal(a in mantissa_and_scale(), b in mantissa_and_scale()) {
        let (big_a, fixed_a) = both(a);
        let (big_b, fixed_b) = both(b);
        prop_assert_eq!(big_a.cmp(&big_b), fixed_a.cmp(&fixed_b));
    }

    #[test]
    fn prop_add_round_rounds_once(
        a in mantissa_and_scale(),
        b in mantissa_and_scale(),
        shift in -60i64..60,
        mc in context(),
    ) {
        let (a, _) = both(a);
        let (b, _) = both(b);
        let b = b.move_point_left(shift);
        prop_assert_eq!(a.add_round(&b, &mc), (&a + &b).round(&mc));
    }

    #[test]
    fn prop_div_round_within_one_ulp(a in mantissa_and_scale(), b in mantissa_and_scale()) {
        prop_assume!(b.0 != 0);
        let (a, _) = both(a);
        let (b, _) = both(b);
        let quotient = a.div_round(&b, &MATH_CONTEXT).unwrap();
        prop_assert!(quotient.precision() <= u64::from(WORKING_PRECISION));

        // |q*b - a| <= ulp(q) * |b|
        let error = (&quotient * &b - &a).abs();
        let bound = MATH_CONTEXT.ulp(&quotient) * b.abs();
        prop_assert!(error <= bound);
    }

    #[test]
    fn prop_display_parses_back(value in mantissa_and_scale(), shift in -40i64..40) {
        let (big, _) = both(value);
        let big = big.move_point_left(shift);
        let parsed: BigDecimal = big.to_string().parse().unwrap();
        prop_assert_eq!(&parsed, &big);
        prop_assert_eq!(parsed.scale(), big.scale().max(0));
    }
}
