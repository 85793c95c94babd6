//! # Protocol Constants
//!
//! Fixed-point scales and tick bounds of the concentrated-liquidity protocol,
//! plus the default knobs of the display helpers.

use crate::math::big_int::U256;

// ============================================================================
// Mathematical Constants
// ============================================================================

/// Number of fractional bits in a Q64.96 sqrt price
pub const RESOLUTION: usize = 96;

/// Q96 fixed-point scale factor: 2^96
pub const Q96: u128 = 1u128 << RESOLUTION;

/// 2^96 as a float, for display conversions
pub const Q96_F64: f64 = 79_228_162_514_264_337_593_543_950_336.0;

/// Basis points denominator (10,000 = 100%)
pub const BPS_DENOMINATOR: u32 = 10_000;

// ============================================================================
// Tick Bounds
// ============================================================================

/// Minimum tick, log base 1.0001 of 2^-128
pub const MIN_TICK: i32 = -887_272;

/// Maximum tick, log base 1.0001 of 2^128
pub const MAX_TICK: i32 = 887_272;

/// Smallest valid tick spacing
pub const MIN_TICK_SPACING: i32 = 1;

/// Sqrt ratio at MIN_TICK (inclusive lower bound)
pub const MIN_SQRT_RATIO: U256 = U256([4_295_128_739, 0, 0, 0]);

/// Sqrt ratio at MAX_TICK (exclusive upper bound for tick lookups)
pub const MAX_SQRT_RATIO: U256 = U256([0x5d95_1d52_6398_8d26, 0xefd1_fc6a_5064_8849, 0xfffd_8963, 0]);

/// Price ratio between two adjacent ticks
pub const TICK_BASE: f64 = 1.0001;

// ============================================================================
// Estimate Thresholds
// ============================================================================

/// Denominators below this are treated as unusable when backing out liquidity
pub const MIN_USABLE_DENOMINATOR: f64 = 1e-6;

// ============================================================================
// Display Defaults
// ============================================================================

/// Default number of gridlines requested from the axis tick generator
pub const DEFAULT_AXIS_TICK_COUNT: usize = 6;

/// Decimal places every axis tick is rounded to before the range check
pub const AXIS_TICK_DECIMALS: i32 = 10;

/// Default width (in slider percent) of the zoom-acceleration band
pub const DEFAULT_EDGE_THRESHOLD: f64 = 10.0;

/// Full scale of the range slider
pub const SLIDER_MAX: f64 = 100.0;

/// Smallest positive value the axis formatter shows as a number
pub const AXIS_PRICE_FLOOR: f64 = 0.000_001;

/// Values at or above this are shown as the cap string
pub const AXIS_PRICE_CAP: f64 = 1e18;
