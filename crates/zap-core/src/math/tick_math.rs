//! # Tick Math
//!
//! Conversions between ticks and Q64.96 sqrt prices. The multipliers are the
//! on-chain constants, so every result matches a pool's `slot0` bit for bit.

use crate::constants::{MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK, MIN_TICK_SPACING};
use crate::errors::{CoreResult, ZapCoreError};
use crate::math::big_int::U256;

/// sqrt(1.0001)^-(2^i) in Q128, for i = 1..=19
const MAGIC_SQRT_1_0001_POW_2: [(u32, u128); 19] = [
    (0x2, 0xfff97272373d413259a46990580e213a),
    (0x4, 0xfff2e50f5f656932ef12357cf3c7fdcc),
    (0x8, 0xffe5caca7e10e4e61c3624eaa0941cd0),
    (0x10, 0xffcb9843d60f6159c9db58835c926644),
    (0x20, 0xff973b41fa98c081472e6896dfb254c0),
    (0x40, 0xff2ea16466c96a3843ec78b326b52861),
    (0x80, 0xfe5dee046a99a2a811c461f1969c3053),
    (0x100, 0xfcbe86c7900a88aedcffc83b479aa3a4),
    (0x200, 0xf987a7253ac413176f2b074cf7815e54),
    (0x400, 0xf3392b0822b70005940c7a398e4b70f3),
    (0x800, 0xe7159475a2c29b7443b29c7fa6e889d9),
    (0x1000, 0xd097f3bdfd2022b8845ad8f792aa5825),
    (0x2000, 0xa9f746462d870fdf8a65dc1f90e061e5),
    (0x4000, 0x70d869a156d2a1b890bb3df62baf32f7),
    (0x8000, 0x31be135f97d08fd981231505542fcfa6),
    (0x10000, 0x9aa508b5b7a84e1c677de54f3e99bc9),
    (0x20000, 0x5d6af8dedb81196699c329225ee604),
    (0x40000, 0x2216e584f5fa1ea926041bedfe98),
    (0x80000, 0x48a170391f7dc42444e8fa2),
];

/// sqrt(1.0001)^-1 in Q128
const MAGIC_SQRT_1_0001_INV: u128 = 0xfffcb933bd6fad37aa2d162d1a594001;

/// Get sqrt(1.0001^tick) * 2^96
pub fn get_sqrt_ratio_at_tick(tick: i32) -> CoreResult<U256> {
    if !is_tick_valid(tick) {
        return Err(ZapCoreError::TickOutOfRange(tick));
    }

    let abs_tick = tick.unsigned_abs();

    let mut ratio = if abs_tick & 0x1 != 0 {
        U256::from(MAGIC_SQRT_1_0001_INV)
    } else {
        U256::one() << 128
    };

    // Binary decomposition of the tick; each step stays below 2^256
    for (mask, magic) in MAGIC_SQRT_1_0001_POW_2 {
        if abs_tick & mask != 0 {
            ratio = ratio
                .checked_mul(U256::from(magic))
                .ok_or(ZapCoreError::MathOverflow)?
                >> 128;
        }
    }

    // We computed the negative tick; invert for positive ticks
    if tick > 0 {
        ratio = U256::max_value() / ratio;
    }

    // Q128 -> Q96, rounding up so tick lookups stay consistent
    let remainder_mask = (U256::one() << 32) - U256::one();
    let round_up = if (ratio & remainder_mask).is_zero() {
        U256::zero()
    } else {
        U256::one()
    };

    Ok((ratio >> 32) + round_up)
}

/// Get the greatest tick whose sqrt ratio is at or below `sqrt_price_x96`
pub fn get_tick_at_sqrt_ratio(sqrt_price_x96: U256) -> CoreResult<i32> {
    if !is_sqrt_price_x96_valid(sqrt_price_x96) {
        return Err(ZapCoreError::SqrtPriceOutOfRange);
    }

    // Binary search for the tick
    let mut low = MIN_TICK;
    let mut high = MAX_TICK;

    while low < high {
        let mid = low + (high - low + 1) / 2;
        if get_sqrt_ratio_at_tick(mid)? <= sqrt_price_x96 {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    Ok(low)
}

/// Check if a tick is within the supported range
pub fn is_tick_valid(tick: i32) -> bool {
    (MIN_TICK..=MAX_TICK).contains(&tick)
}

/// Check if a Q64.96 sqrt price can be mapped back to a tick
pub fn is_sqrt_price_x96_valid(sqrt_price_x96: U256) -> bool {
    sqrt_price_x96 >= MIN_SQRT_RATIO && sqrt_price_x96 < MAX_SQRT_RATIO
}

/// Round a tick to the nearest multiple of `tick_spacing`, staying in bounds.
///
/// Halfway ticks round up, so -5 with spacing 10 gives 0.
pub fn nearest_usable_tick(tick: i32, tick_spacing: i32) -> CoreResult<i32> {
    if tick_spacing < MIN_TICK_SPACING {
        return Err(ZapCoreError::InvalidTickSpacing(tick_spacing));
    }
    if !is_tick_valid(tick) {
        return Err(ZapCoreError::TickOutOfRange(tick));
    }

    let rounded = (tick as f64 / tick_spacing as f64 + 0.5).floor() as i32 * tick_spacing;

    Ok(if rounded < MIN_TICK {
        rounded + tick_spacing
    } else if rounded > MAX_TICK {
        rounded - tick_spacing
    } else {
        rounded
    })
}
