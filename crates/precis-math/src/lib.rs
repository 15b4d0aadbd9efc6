//! # Precis Math
//!
//! Numerical kernels for the Precis decimal math kernel.
//!
//! This crate provides:
//!
//! - **Roots**: correctly rounded n-th roots by Newton-Raphson over
//!   arbitrary-precision decimals
//!
//! ## Design Philosophy
//!
//! - **Deterministic**: identical inputs give identical digits and scale
//! - **Bounded**: every iteration has a cap and reports its statistics
//! - **Decimal throughout**: no binary floating point in any computation
//!
//! ## Logging
//!
//! The kernel logs through the `log` facade: every Newton step at `trace`,
//! convergence at `debug` and an exhausted iteration cap at `warn`. Install
//! any `log` backend to see them.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::uninlined_format_args)]

pub mod roots;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::roots::{
        nth_root, nth_root_with_config, DecimalRoots, RootConfig, RootResult, SeedStrategy,
        DEFAULT_MAX_ITERATIONS,
    };
}
