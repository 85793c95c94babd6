//! # Display Prices
//!
//! Float conversions between ticks, Q64.96 sqrt prices and human-scale prices
//! (token1 per token0, adjusted for token decimals).

use crate::constants::{MAX_TICK, MIN_TICK, Q96_F64, TICK_BASE};
use crate::errors::{CoreResult, ZapCoreError};
use crate::math::big_int::{u256_to_f64, U256};
use crate::math::tick_math::is_tick_valid;

/// 10^(decimals0 - decimals1): converts a raw price into display units
fn decimal_scale(decimals0: u8, decimals1: u8) -> f64 {
    10f64.powi(i32::from(decimals0) - i32::from(decimals1))
}

/// Convert a Q64.96 sqrt price into a display price
pub fn sqrt_price_to_price(sqrt_price_x96: U256, decimals0: u8, decimals1: u8) -> f64 {
    let sqrt_price = u256_to_f64(sqrt_price_x96) / Q96_F64;
    sqrt_price * sqrt_price * decimal_scale(decimals0, decimals1)
}

/// Display price at a tick
pub fn tick_to_price(tick: i32, decimals0: u8, decimals1: u8) -> CoreResult<f64> {
    if !is_tick_valid(tick) {
        return Err(ZapCoreError::TickOutOfRange(tick));
    }
    Ok(TICK_BASE.powi(tick) * decimal_scale(decimals0, decimals1))
}

/// Greatest tick whose price is at or below `price`, clamped to the tick bounds
pub fn price_to_tick(price: f64, decimals0: u8, decimals1: u8) -> CoreResult<i32> {
    if !price.is_finite() || price <= 0.0 {
        return Err(ZapCoreError::InvalidPrice);
    }

    let raw_price = price / decimal_scale(decimals0, decimals1);
    let estimate = (raw_price.ln() / TICK_BASE.ln()).floor();
    if estimate <= MIN_TICK as f64 {
        return Ok(MIN_TICK);
    }
    if estimate >= MAX_TICK as f64 {
        return Ok(MAX_TICK);
    }

    // The logarithm can land one tick off either side of an exact boundary
    let mut tick = estimate as i32;
    if tick < MAX_TICK && TICK_BASE.powi(tick + 1) <= raw_price {
        tick += 1;
    } else if tick > MIN_TICK && TICK_BASE.powi(tick) > raw_price {
        tick -= 1;
    }

    Ok(tick)
}

/// Flip a price to the other quote direction
pub fn invert_price(price: f64) -> Option<f64> {
    if price.is_finite() && price > 0.0 {
        Some(1.0 / price)
    } else {
        None
    }
}
