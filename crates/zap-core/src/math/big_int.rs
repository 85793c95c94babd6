//! Big integer operations for high-precision math
//!
//! Q64.96 sqrt prices are 160-bit values and liquidity is 128-bit, so products
//! need up to 512 bits before they are divided back down. This module provides
//! the wide types and a `mul_div` that never loses the intermediate bits.

#![allow(clippy::all)]

use uint::construct_uint;

use crate::errors::{CoreResult, ZapCoreError};

construct_uint! {
    /// 256-bit unsigned integer, constructed out of 4 words x 64 bits.
    pub struct U256(4);
}

construct_uint! {
    /// 512-bit unsigned integer, constructed out of 8 words x 64 bits.
    pub struct U512(8);
}

const FLOAT_TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// Rounding mode for division operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Rounding {
    /// Round down (towards zero)
    Down,
    /// Round up (away from zero)
    Up,
}

impl Rounding {
    pub fn from_round_up(round_up: bool) -> Self {
        if round_up {
            Rounding::Up
        } else {
            Rounding::Down
        }
    }
}

/// Zero-extend a U256 into a U512
pub fn widen(value: U256) -> U512 {
    let [w0, w1, w2, w3] = value.0;
    U512([w0, w1, w2, w3, 0, 0, 0, 0])
}

/// Narrow a U512 back to U256, failing if any high word is set
pub fn narrow(value: U512) -> Option<U256> {
    let words = value.0;
    if words[4..].iter().any(|word| *word != 0) {
        return None;
    }
    Some(U256([words[0], words[1], words[2], words[3]]))
}

/// Convert U256 to u128, returning None if overflow
pub fn to_u128(value: U256) -> Option<u128> {
    if value.bits() > 128 {
        None
    } else {
        Some(value.low_u128())
    }
}

/// Lossy conversion to f64 (round-to-nearest on each word)
pub fn u256_to_f64(value: U256) -> f64 {
    value
        .0
        .iter()
        .rev()
        .fold(0.0, |acc, &word| acc * FLOAT_TWO_POW_64 + word as f64)
}

/// Multiply two values and divide by a third with specified rounding
/// result = (a * b) / denominator
pub fn mul_div(a: U256, b: U256, denominator: U256, rounding: Rounding) -> CoreResult<U256> {
    if denominator.is_zero() {
        return Err(ZapCoreError::DivisionByZero);
    }

    let product = widen(a)
        .checked_mul(widen(b))
        .ok_or(ZapCoreError::MulDivOverflow)?;
    let (quotient, remainder) = product.div_mod(widen(denominator));

    let quotient = narrow(quotient).ok_or(ZapCoreError::MulDivOverflow)?;

    if rounding == Rounding::Up && !remainder.is_zero() {
        return quotient
            .checked_add(U256::one())
            .ok_or(ZapCoreError::MulDivOverflow);
    }

    Ok(quotient)
}

/// Divide rounding away from zero when there is a remainder
pub fn div_rounding_up(numerator: U256, denominator: U256) -> CoreResult<U256> {
    if denominator.is_zero() {
        return Err(ZapCoreError::DivisionByZero);
    }

    let (quotient, remainder) = numerator.div_mod(denominator);
    if remainder.is_zero() {
        Ok(quotient)
    } else {
        quotient
            .checked_add(U256::one())
            .ok_or(ZapCoreError::MathOverflow)
    }
}

/// Multiply two u128 values and divide by a third with specified rounding
pub fn mul_div_u128(a: u128, b: u128, denominator: u128, rounding: Rounding) -> CoreResult<u128> {
    let result = mul_div(
        U256::from(a),
        U256::from(b),
        U256::from(denominator),
        rounding,
    )?;

    to_u128(result).ok_or(ZapCoreError::MulDivOverflow)
}
