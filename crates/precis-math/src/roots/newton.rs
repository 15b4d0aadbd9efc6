//! Newton-Raphson n-th root over exact decimals.

use std::cmp::Ordering;

use log::{debug, trace, warn};
use precis_core::{BigDecimal, MathContext, PrecisError, PrecisResult, RoundingMode};

use super::{RootConfig, RootResult, SeedStrategy};

/// Returns the principal n-th root of `a` at the working precision.
///
/// Uses the default [`RootConfig`]: 30 significant digits, half-even
/// rounding, `1E-31` tolerance. The result is correctly rounded; callers
/// round it down to a presentation scale themselves.
///
/// # Example
///
/// ```rust
/// use precis_math::roots::nth_root;
/// use precis_core::BigDecimal;
///
/// let two: BigDecimal = "2".parse().unwrap();
/// let root = nth_root(2, &two).unwrap();
/// assert_eq!(root.to_string(), "1.41421356237309504880168872421");
/// ```
///
/// # Errors
///
/// Returns `PrecisError::InvalidArgument` if `a` is negative or `n` is zero.
pub fn nth_root(n: u32, a: &BigDecimal) -> PrecisResult<BigDecimal> {
    nth_root_with_config(n, a, &RootConfig::default()).map(|result| result.root)
}

/// Returns the principal n-th root of `a` with iteration statistics.
///
/// Iterates `x' = ((n-1)·x + a / x^(n-1)) / n`, rounding the power and every
/// division at `config.context`, until successive guesses differ by at most
/// the tolerance. The tolerance is `config.tolerance`, tightened to a tenth of
/// the working ulp for roots below `0.1` so small inputs keep their
/// significant digits. A guess that bounces between two adjacent values also
/// counts as converged, as does a step that stops descending once the
/// guesses have started falling towards the root.
///
/// Newton's method overshoots far above the root when the guess starts below
/// it, then crawls back down by a factor `(n-1)/n` per step. Guesses are
/// therefore capped at an upper bound of the root (the smaller of
/// `1 + (a-1)/n` for `a >= 1` and the magnitude seed), which keeps the step
/// count near `2.3·n` even for high degrees.
///
/// The settled guess is finally bracketed between two working-precision
/// neighbours and rounded with the context's rounding rule, so the result is
/// correctly rounded.
///
/// # Errors
///
/// - `PrecisError::InvalidArgument` if `a` is negative, `n` is zero or the
///   context has unlimited precision.
/// - `PrecisError::ConvergenceFailed` if `config.max_iterations` is exhausted.
pub fn nth_root_with_config(
    n: u32,
    a: &BigDecimal,
    config: &RootConfig,
) -> PrecisResult<RootResult> {
    if a.is_negative() {
        return Err(PrecisError::invalid_argument(
            "nth root can only be calculated for positive numbers",
        ));
    }
    if n == 0 {
        return Err(PrecisError::invalid_argument(
            "nth root degree has to be equal or greater than 1",
        ));
    }
    if a.is_zero() {
        return Ok(RootResult {
            root: BigDecimal::zero(),
            iterations: 0,
            residual: BigDecimal::zero(),
        });
    }

    let mc = config.context;
    let sum_mc = MathContext::new(mc.precision() + SUM_GUARD_DIGITS, mc.rounding());
    let degree = BigDecimal::from(n);
    let degree_less_one = BigDecimal::from(n - 1);
    let ceiling = upper_bound(n, a, &mc)?;

    let mut previous = a.clone();
    let mut guess = seed(n, a, &degree, config)?;
    let mut iterations = 0u32;
    let mut descending = false;

    loop {
        let delta = (&guess - &previous).abs();
        if delta <= tolerance(&guess, config) {
            debug!("nth root (n={}) converged after {} iterations", n, iterations);
            break;
        }
        if iterations >= config.max_iterations {
            warn!(
                "nth root (n={}) of {} gave up after {} iterations, delta {}",
                n, a, iterations, delta
            );
            return Err(PrecisError::convergence_failed(iterations, delta));
        }

        trace!("nth root guess: {}, previous: {}", guess, previous);
        let power = guess.pow_round(n - 1, &mc);
        let quotient = a.div_round(&power, &mc)?;
        let mut next = (&degree_less_one * &guess)
            .add_round(&quotient, &sum_mc)
            .div_round(&degree, &mc)?;
        if next > ceiling {
            trace!("nth root step {} capped at {}", next, ceiling);
            next = ceiling.clone();
        }
        iterations += 1;

        if next == previous && (&next - &guess).abs() <= mc.ulp(&guess) {
            debug!(
                "nth root (n={}) settled on a two-cycle after {} iterations",
                n, iterations
            );
            break;
        }
        // From above the root Newton only descends, so a step that does not
        // means rounding noise has taken over.
        if descending && next >= guess {
            debug!(
                "nth root (n={}) stopped descending after {} iterations",
                n, iterations
            );
            break;
        }
        descending |= next < guess;
        previous = std::mem::replace(&mut guess, next);
    }

    let root = correctly_rounded(n, a, &guess, &mc);
    let residual = root.pow(n) - a;
    Ok(RootResult {
        root,
        iterations,
        residual,
    })
}

/// Extra digits the Newton sum keeps before the division by `n`.
const SUM_GUARD_DIGITS: u32 = 10;

/// First guess for the iteration.
fn seed(
    n: u32,
    a: &BigDecimal,
    degree: &BigDecimal,
    config: &RootConfig,
) -> PrecisResult<BigDecimal> {
    match config.seed {
        SeedStrategy::Quotient => a.div_round(degree, &config.context),
        SeedStrategy::Magnitude => Ok(magnitude_bound(n, a)),
    }
}

/// `10^ceil((e+1)/n)` where `e` is the adjusted exponent of `a`.
///
/// `a < 10^(e+1)`, so this power of ten is at or above the root.
fn magnitude_bound(n: u32, a: &BigDecimal) -> BigDecimal {
    let exponent = ceil_div(a.adjusted_exponent() + 1, i64::from(n));
    BigDecimal::one().move_point_right(exponent)
}

/// A value at or above the root with at most `mc`'s precision.
fn upper_bound(n: u32, a: &BigDecimal, mc: &MathContext) -> PrecisResult<BigDecimal> {
    let magnitude = magnitude_bound(n, a);
    if *a < 1 {
        return Ok(magnitude);
    }
    // Bernoulli: (1 + (a-1)/n)^n >= 1 + (a-1) = a.
    let round_up = MathContext::new(mc.precision(), RoundingMode::Ceiling);
    let excess = (a - BigDecimal::one()).div_round(&BigDecimal::from(n), &round_up)?;
    let bernoulli = excess.add_round(&BigDecimal::one(), &round_up);
    Ok(bernoulli.min(magnitude))
}

fn ceil_div(numerator: i64, denominator: i64) -> i64 {
    -(-numerator).div_euclid(denominator)
}

/// Convergence threshold for a guess.
fn tolerance(guess: &BigDecimal, config: &RootConfig) -> BigDecimal {
    let relative = config.context.ulp(guess).move_point_left(1);
    if relative < config.tolerance {
        relative
    } else {
        config.tolerance.clone()
    }
}

/// Largest value with `mc`'s precision strictly below a positive `x`.
///
/// Below a power of ten the spacing shrinks, so `1.00` at three digits steps
/// down to `0.999` rather than `0.99`.
fn next_down(x: &BigDecimal, mc: &MathContext) -> BigDecimal {
    let ulp = mc.ulp(x);
    let below = x - &ulp;
    if below.is_zero() || below.adjusted_exponent() < x.adjusted_exponent() {
        x - ulp.move_point_left(1)
    } else {
        below
    }
}

/// Rounds the n-th root of `a` at `mc`, given a guess a few ulps from it.
///
/// Finds `low` with `low^n <= a < (low + ulp)^n`. An exact root is returned
/// as is. Otherwise the root lies strictly between the two neighbours, and
/// comparing `a` with the n-th power of their exact midpoint tells which half
/// it is in. A value in that same half (or the midpoint itself on a tie) is
/// then rounded with `mc`'s rule.
fn correctly_rounded(n: u32, a: &BigDecimal, guess: &BigDecimal, mc: &MathContext) -> BigDecimal {
    let mut low = guess.round(mc);
    while low.pow(n) > *a {
        low = next_down(&low, mc);
    }
    let mut ulp = mc.ulp(&low);
    while (&low + &ulp).pow(n) <= *a {
        low = (&low + &ulp).round(mc);
        ulp = mc.ulp(&low);
    }
    if low.pow(n) == *a {
        return low;
    }

    let fraction = |units: u32, places: i64| {
        BigDecimal::from(units).move_point_left(ulp.scale() + places)
    };
    let midpoint = &low + &fraction(5, 1);
    let inside = match midpoint.pow(n).cmp(a) {
        Ordering::Greater => &low + &fraction(25, 2),
        Ordering::Equal => midpoint,
        Ordering::Less => &low + &fraction(75, 2),
    };
    inside.round(mc)
}
