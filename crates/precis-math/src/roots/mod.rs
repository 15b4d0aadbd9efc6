//! Correctly rounded n-th roots.
//!
//! The kernel runs Newton-Raphson over [`BigDecimal`] with every division and
//! power rounded to a [`MathContext`] (30 significant digits, half-even by
//! default). Results are correctly rounded at that precision; presentation
//! rounding to currency or percentage scale is left to the caller.
//!
//! - [`nth_root`]: the root at the working precision
//! - [`nth_root_with_config`]: the root plus iteration statistics
//! - [`DecimalRoots`]: method-call form for [`BigDecimal`] and `rust_decimal::Decimal`
//!
//! # Example: annualised growth
//!
//! ```rust
//! use precis_math::roots::nth_root;
//! use precis_core::prelude::*;
//!
//! // Ten-year growth factor of 1.50 as a yearly rate.
//! let growth: BigDecimal = "1.50".parse().unwrap();
//! let yearly = nth_root(10, &growth).unwrap() - BigDecimal::one();
//! let rate = yearly.move_point_right(2).with_scale_round(PERCENTAGE_SCALE, ROUNDING_MODE);
//! assert_eq!(rate.to_string(), "4.13797");
//! ```

mod newton;

pub use newton::{nth_root, nth_root_with_config};

use precis_core::constants::{MATH_CONTEXT, ULP};
use precis_core::{BigDecimal, MathContext, PrecisResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default maximum Newton iterations before giving up.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100_000;

/// How the first Newton guess is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedStrategy {
    /// `a / n`.
    #[default]
    Quotient,
    /// The smallest power of ten known to lie at or above the root.
    ///
    /// The iteration then descends from the first step instead of first
    /// overshooting from below.
    Magnitude,
}

/// Configuration for the n-th root kernel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootConfig {
    /// Precision and rounding of every division and power.
    pub context: MathContext,
    /// Largest step between successive guesses accepted as converged.
    pub tolerance: BigDecimal,
    /// Maximum number of iterations.
    pub max_iterations: u32,
    /// First-guess strategy.
    pub seed: SeedStrategy,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            context: MATH_CONTEXT,
            tolerance: ULP.clone(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: SeedStrategy::default(),
        }
    }
}

impl RootConfig {
    /// Sets the working context.
    #[must_use]
    pub fn with_context(mut self, context: MathContext) -> Self {
        self.context = context;
        self
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: BigDecimal) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the seed strategy.
    #[must_use]
    pub fn with_seed(mut self, seed: SeedStrategy) -> Self {
        self.seed = seed;
        self
    }
}

/// Result of an n-th root computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootResult {
    /// The root, correctly rounded at the working context.
    pub root: BigDecimal,
    /// Number of Newton steps taken.
    pub iterations: u32,
    /// `root^n - a`, computed exactly.
    pub residual: BigDecimal,
}

/// N-th roots as methods on decimal types.
///
/// ```rust
/// use precis_math::roots::DecimalRoots;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(dec!(2).sqrt().unwrap(), dec!(1.4142135623730950488016887242));
/// ```
pub trait DecimalRoots: Sized {
    /// Principal n-th root at the working precision.
    fn nth_root(&self, n: u32) -> PrecisResult<Self>;

    /// Square root.
    fn sqrt(&self) -> PrecisResult<Self> {
        self.nth_root(2)
    }
}

impl DecimalRoots for BigDecimal {
    fn nth_root(&self, n: u32) -> PrecisResult<Self> {
        nth_root(n, self)
    }
}

impl DecimalRoots for Decimal {
    /// Computes at 30 significant digits and rounds half-even to as many
    /// fractional digits as a 96-bit decimal holds.
    fn nth_root(&self, n: u32) -> PrecisResult<Self> {
        let root = nth_root(n, &BigDecimal::from(*self))?;
        Decimal::try_from(&root)
    }
}
