//! # Mathematical Functions
//!
//! Integer tick and liquidity math, plus float price conversions for display.

pub mod big_int;
pub mod liquidity_math;
pub mod price;
pub mod tick_math;

// Re-export commonly used functions
pub use big_int::*;
pub use liquidity_math::*;
pub use price::*;
pub use tick_math::*;
