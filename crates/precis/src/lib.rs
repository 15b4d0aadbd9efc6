//! # Precis
//!
//! Arbitrary-precision decimal math kernel.
//!
//! This facade re-exports the public API of:
//!
//! - [`precis_core`]: decimal type, rounding, precision context, constants
//!   and argument guards
//! - [`precis_math`]: correctly rounded n-th roots
//!
//! ## Example
//!
//! ```rust
//! use precis::prelude::*;
//!
//! let principal: BigDecimal = "1000.00".parse().unwrap();
//! check_minimum_value("principal", &principal).unwrap();
//!
//! // Monthly factor of a 5% yearly rate.
//! let yearly: BigDecimal = "1.05".parse().unwrap();
//! let monthly = nth_root(12, &yearly).unwrap();
//! assert_eq!(monthly.to_string(), "1.00407412378364830160541960267");
//!
//! let first_month = (&principal * &monthly).with_scale_round(CURRENCY_SCALE, ROUNDING_MODE);
//! assert_eq!(first_month.to_string(), "1004.07");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use precis_core;
pub use precis_math;

pub use precis_core::{BigDecimal, MathContext, PrecisError, PrecisResult, RoundingMode};
pub use precis_math::roots::{nth_root, nth_root_with_config, DecimalRoots};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use precis_core::prelude::*;
    pub use precis_math::prelude::*;
}
