//! # Precis Core
//!
//! Decimal types, precision contexts, constants and argument guards for the
//! Precis decimal math kernel.
//!
//! This crate provides the foundational building blocks used by `precis-math`:
//!
//! - **Types**: [`BigDecimal`], [`RoundingMode`], [`MathContext`]
//! - **Constants**: working precision, ULP tolerance, presentation scales
//! - **Validation**: fail-fast argument guards
//!
//! ## Design Philosophy
//!
//! - **Exact by default**: addition, subtraction and multiplication never round
//! - **Explicit rounding**: every rounded operation names its scale or context
//! - **No I/O**: pure values and functions only
//!
//! ## Example
//!
//! ```rust
//! use precis_core::prelude::*;
//!
//! let price: BigDecimal = "98.505".parse().unwrap();
//! check_minimum_value("price", &price).unwrap();
//!
//! let shown = price.with_scale_round(CURRENCY_SCALE, ROUNDING_MODE);
//! assert_eq!(shown.to_string(), "98.50");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod constants;
pub mod error;
pub mod types;
pub mod validation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::constants::{
        CURRENCY_SCALE, MATH_CONTEXT, MIN_VALUE, PERCENTAGE_SCALE, ROUNDING_MODE, ULP,
        WORKING_PRECISION,
    };
    pub use crate::error::{PrecisError, PrecisResult};
    pub use crate::types::{BigDecimal, MathContext, RoundingMode};
    pub use crate::validation::{check_argument_greater_than_or_equal, check_minimum_value};
}

// Re-export commonly used types at crate root
pub use error::{PrecisError, PrecisResult};
pub use types::{BigDecimal, MathContext, RoundingMode};
