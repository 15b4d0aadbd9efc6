//! The facade exposes the full kernel through one import.

use precis::prelude::*;

#[test]
fn test_prelude_covers_kernel() {
    let a: BigDecimal = "2".parse().unwrap();
    let root = nth_root(2, &a).unwrap();
    assert_eq!(root, a.sqrt().unwrap());
    assert_eq!(
        root.with_scale_round(PERCENTAGE_SCALE, ROUNDING_MODE).to_string(),
        "1.41421"
    );
    assert_eq!(*ULP, "1e-31".parse::<BigDecimal>().unwrap());
    assert_eq!(MATH_CONTEXT.precision(), WORKING_PRECISION);
}

#[test]
fn test_errors_surface_through_facade() {
    let err = check_argument_greater_than_or_equal("x", &5, &4).unwrap_err();
    assert!(matches!(err, precis::PrecisError::InvalidArgument { .. }));

    let negative: BigDecimal = "-1".parse().unwrap();
    assert!(precis::nth_root(3, &negative).is_err());
}
