//! # Zap Core - Position Math
//!
//! Pure math behind the zap, migration and position widgets of a
//! concentrated-liquidity DEX front end. It provides:
//!
//! - Tick and Q64.96 sqrt price conversions matching on-chain values
//! - Token amounts held by a position at the current price
//! - Expected amounts when a price-triggered exit fires
//! - Gridline and label helpers for price range charts
//!
//! ## Feature Flags
//!
//! - `client`: Enables serde serialization for off-chain use

// Re-export all modules
pub mod axis;
pub mod constants;
pub mod errors;
pub mod exit;
pub mod math;
pub mod types;

// Re-export commonly used items
pub use axis::{calculate_price_axis_ticks, format_axis_price, get_edge_intensity, PriceAxisTicks};
pub use constants::*;
pub use errors::{CoreResult, ZapCoreError};
pub use exit::{calculate_expected_amounts, merge_price_conditions};
pub use math::big_int::U256;
pub use math::liquidity_math::get_position_amounts;
pub use math::tick_math::{get_sqrt_ratio_at_tick, get_tick_at_sqrt_ratio};
pub use types::*;
