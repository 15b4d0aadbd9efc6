//! Property-based tests for root kernel invariants.
//!
//! These tests verify properties that should hold for any input:
//! - The root raised back to `n` stays within rounding distance of `a`
//! - Results are deterministic to the last digit and scale
//! - Roots are monotone in `a`
//! - Both seed strategies agree

use precis_core::prelude::*;
use precis_math::prelude::*;
use proptest::prelude::*;

// =============================================================================
// GENERATORS
// =============================================================================

/// Positive decimals from `0.0001` to `999_999.9999` with up to four
/// fractional digits.
fn positive_decimal() -> impl Strategy<Value = BigDecimal> {
    (1i64..10_000_000_000).prop_map(|unscaled| BigDecimal::new(unscaled.into(), 4))
}

/// Small degrees plus the compounding periods used in practice.
fn degree() -> impl Strategy<Value = u32> {
    prop_oneof![
        3 => 1u32..=8,
        1 => prop_oneof![Just(12u32), Just(52), Just(252), Just(365)],
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_root_power_recovers_input(a in positive_decimal(), n in degree()) {
        let result = nth_root_with_config(n, &a, &RootConfig::default()).unwrap();
        let bound = BigDecimal::from(n)
            * result.root.pow(n - 1)
            * MATH_CONTEXT.ulp(&result.root);
        prop_assert!(result.residual.abs() <= bound);
        prop_assert!(result.root.precision() <= u64::from(WORKING_PRECISION));
    }

    #[test]
    fn prop_deterministic(a in positive_decimal(), n in degree()) {
        let first = nth_root(n, &a).unwrap();
        let second = nth_root(n, &a).unwrap();
        prop_assert_eq!(first.unscaled(), second.unscaled());
        prop_assert_eq!(first.scale(), second.scale());
    }

    #[test]
    fn prop_monotone_in_input(a in positive_decimal(), b in positive_decimal(), n in degree()) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(nth_root(n, &low).unwrap() <= nth_root(n, &high).unwrap());
    }

    #[test]
    fn prop_seed_strategies_agree(a in positive_decimal(), n in degree()) {
        let magnitude = RootConfig::default().with_seed(SeedStrategy::Magnitude);
        let quotient = nth_root(n, &a).unwrap();
        let seeded = nth_root_with_config(n, &a, &magnitude).unwrap().root;
        prop_assert_eq!(quotient, seeded);
    }

    #[test]
    fn prop_negative_input_rejected(a in positive_decimal(), n in degree()) {
        let negative = -a;
        let is_invalid = matches!(
            nth_root(n, &negative),
            Err(PrecisError::InvalidArgument { .. })
        );
        prop_assert!(is_invalid);
    }

    #[test]
    fn prop_guard_accepts_exactly_at_or_above_bound(value in positive_decimal(), bound in positive_decimal()) {
        let outcome = check_argument_greater_than_or_equal("value", &bound, &value);
        prop_assert_eq!(outcome.is_ok(), value >= bound);
    }
}

#[test]
fn test_zero_for_every_degree() {
    for n in 1..=16 {
        let result = nth_root_with_config(n, &BigDecimal::zero(), &RootConfig::default()).unwrap();
        assert!(result.root.is_zero());
        assert_eq!(result.iterations, 0);
    }
}
