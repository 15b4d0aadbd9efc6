//! Decimal value types for the Precis library.
//!
//! - [`BigDecimal`]: exact base-10 value with an explicit scale
//! - [`RoundingMode`]: rule applied to discarded digits
//! - [`MathContext`]: significant-digit budget plus rounding rule

mod context;
mod decimal;
mod rounding;

pub use context::MathContext;
pub use decimal::BigDecimal;
pub use rounding::RoundingMode;
