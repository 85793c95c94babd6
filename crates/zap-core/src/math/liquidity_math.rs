//! # Liquidity Math
//!
//! Token amounts represented by concentrated liquidity, and the inverse
//! liquidity-for-amounts formulas. Everything runs in the Q64.96 integer
//! domain; amounts handed back to callers are truncated toward zero so a
//! position's withdrawable balance is never overstated.

use crate::constants::{Q96, RESOLUTION};
use crate::errors::{CoreResult, ZapCoreError};
use crate::math::big_int::{div_rounding_up, mul_div, to_u128, Rounding, U256};
use crate::math::tick_math::get_sqrt_ratio_at_tick;
use crate::types::PositionAmounts;

/// Calculate amount0 delta between two sqrt prices
/// amount0 = L * (sqrt_b - sqrt_a) / (sqrt_a * sqrt_b)
pub fn get_amount_0_delta(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: u128,
    round_up: bool,
) -> CoreResult<U256> {
    if sqrt_ratio_a_x96 > sqrt_ratio_b_x96 {
        return get_amount_0_delta(sqrt_ratio_b_x96, sqrt_ratio_a_x96, liquidity, round_up);
    }
    if sqrt_ratio_a_x96.is_zero() {
        return Err(ZapCoreError::DivisionByZero);
    }

    let numerator1 = U256::from(liquidity) << RESOLUTION;
    let numerator2 = sqrt_ratio_b_x96 - sqrt_ratio_a_x96;

    if round_up {
        div_rounding_up(
            mul_div(numerator1, numerator2, sqrt_ratio_b_x96, Rounding::Up)?,
            sqrt_ratio_a_x96,
        )
    } else {
        Ok(mul_div(numerator1, numerator2, sqrt_ratio_b_x96, Rounding::Down)? / sqrt_ratio_a_x96)
    }
}

/// Calculate amount1 delta between two sqrt prices
/// amount1 = L * (sqrt_b - sqrt_a)
pub fn get_amount_1_delta(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: u128,
    round_up: bool,
) -> CoreResult<U256> {
    if sqrt_ratio_a_x96 > sqrt_ratio_b_x96 {
        return get_amount_1_delta(sqrt_ratio_b_x96, sqrt_ratio_a_x96, liquidity, round_up);
    }

    mul_div(
        U256::from(liquidity),
        sqrt_ratio_b_x96 - sqrt_ratio_a_x96,
        U256::from(Q96),
        Rounding::from_round_up(round_up),
    )
}

/// Decompose a position's liquidity into token amounts at the pool's current price.
///
/// The region is picked from `current_tick`; the lower tick is inclusive, so
/// `current_tick == tick_lower` counts as in range. `sqrt_price_x96` only
/// matters while in range, where it bounds both halves of the split.
pub fn get_position_amounts(
    current_tick: i32,
    tick_lower: i32,
    tick_upper: i32,
    sqrt_price_x96: U256,
    liquidity: u128,
) -> CoreResult<PositionAmounts> {
    if tick_lower >= tick_upper {
        return Err(ZapCoreError::invalid_tick_range(tick_lower, tick_upper));
    }
    if liquidity == 0 {
        return Ok(PositionAmounts::zero());
    }

    let sqrt_ratio_lower = get_sqrt_ratio_at_tick(tick_lower)?;
    let sqrt_ratio_upper = get_sqrt_ratio_at_tick(tick_upper)?;

    let amounts = if current_tick < tick_lower {
        // Price below range: all token0
        PositionAmounts::new(
            get_amount_0_delta(sqrt_ratio_lower, sqrt_ratio_upper, liquidity, false)?,
            U256::zero(),
        )
    } else if current_tick >= tick_upper {
        // Price above range: all token1
        PositionAmounts::new(
            U256::zero(),
            get_amount_1_delta(sqrt_ratio_lower, sqrt_ratio_upper, liquidity, false)?,
        )
    } else {
        PositionAmounts::new(
            get_amount_0_delta(sqrt_price_x96, sqrt_ratio_upper, liquidity, false)?,
            get_amount_1_delta(sqrt_ratio_lower, sqrt_price_x96, liquidity, false)?,
        )
    };

    Ok(amounts)
}

/// Pro-rata share of a constant-product pool's reserves held by `lp_balance`
pub fn get_constant_product_amounts(
    reserve0: U256,
    reserve1: U256,
    total_supply: U256,
    lp_balance: U256,
) -> CoreResult<PositionAmounts> {
    if lp_balance.is_zero() {
        return Ok(PositionAmounts::zero());
    }
    if total_supply.is_zero() {
        return Err(ZapCoreError::DivisionByZero);
    }
    if lp_balance > total_supply {
        return Err(ZapCoreError::LpBalanceExceedsSupply);
    }

    Ok(PositionAmounts::new(
        mul_div(reserve0, lp_balance, total_supply, Rounding::Down)?,
        mul_div(reserve1, lp_balance, total_supply, Rounding::Down)?,
    ))
}

/// Calculate liquidity for a given amount of token0
pub fn get_liquidity_for_amount_0(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    amount0: U256,
) -> CoreResult<u128> {
    if sqrt_ratio_a_x96 > sqrt_ratio_b_x96 {
        return get_liquidity_for_amount_0(sqrt_ratio_b_x96, sqrt_ratio_a_x96, amount0);
    }

    let intermediate = mul_div(
        sqrt_ratio_a_x96,
        sqrt_ratio_b_x96,
        U256::from(Q96),
        Rounding::Down,
    )?;

    let liquidity = mul_div(
        amount0,
        intermediate,
        sqrt_ratio_b_x96 - sqrt_ratio_a_x96,
        Rounding::Down,
    )?;

    to_u128(liquidity).ok_or(ZapCoreError::ConversionError)
}

/// Calculate liquidity for a given amount of token1
pub fn get_liquidity_for_amount_1(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    amount1: U256,
) -> CoreResult<u128> {
    if sqrt_ratio_a_x96 > sqrt_ratio_b_x96 {
        return get_liquidity_for_amount_1(sqrt_ratio_b_x96, sqrt_ratio_a_x96, amount1);
    }

    let liquidity = mul_div(
        amount1,
        U256::from(Q96),
        sqrt_ratio_b_x96 - sqrt_ratio_a_x96,
        Rounding::Down,
    )?;

    to_u128(liquidity).ok_or(ZapCoreError::ConversionError)
}

/// Maximum liquidity that both amounts can fund at the current price
pub fn get_liquidity_for_amounts(
    sqrt_price_x96: U256,
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    amount0: U256,
    amount1: U256,
) -> CoreResult<u128> {
    let (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = if sqrt_ratio_a_x96 > sqrt_ratio_b_x96 {
        (sqrt_ratio_b_x96, sqrt_ratio_a_x96)
    } else {
        (sqrt_ratio_a_x96, sqrt_ratio_b_x96)
    };

    if sqrt_price_x96 <= sqrt_ratio_a_x96 {
        get_liquidity_for_amount_0(sqrt_ratio_a_x96, sqrt_ratio_b_x96, amount0)
    } else if sqrt_price_x96 < sqrt_ratio_b_x96 {
        let liquidity0 = get_liquidity_for_amount_0(sqrt_price_x96, sqrt_ratio_b_x96, amount0)?;
        let liquidity1 = get_liquidity_for_amount_1(sqrt_ratio_a_x96, sqrt_price_x96, amount1)?;

        Ok(liquidity0.min(liquidity1))
    } else {
        get_liquidity_for_amount_1(sqrt_ratio_a_x96, sqrt_ratio_b_x96, amount1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqrt_at(tick: i32) -> U256 {
        get_sqrt_ratio_at_tick(tick).unwrap()
    }

    #[test]
    fn test_amount_deltas() {
        let lower = sqrt_at(0);
        let upper = sqrt_at(100);

        let amount0_down = get_amount_0_delta(lower, upper, 1_000_000, false).unwrap();
        let amount0_up = get_amount_0_delta(lower, upper, 1_000_000, true).unwrap();
        assert!(amount0_down > U256::zero());
        assert!(amount0_up >= amount0_down);
        assert!(amount0_up - amount0_down <= U256::one());

        let amount1_down = get_amount_1_delta(lower, upper, 1_000_000, false).unwrap();
        let amount1_up = get_amount_1_delta(upper, lower, 1_000_000, true).unwrap();
        assert!(amount1_down > U256::zero());
        assert!(amount1_up >= amount1_down);
    }

    #[test]
    fn test_amount_0_delta_zero_price() {
        assert_eq!(
            get_amount_0_delta(U256::zero(), sqrt_at(0), 1, false),
            Err(ZapCoreError::DivisionByZero)
        );
    }

    #[test]
    fn test_position_below_range() {
        let amounts = get_position_amounts(-10, 0, 100, sqrt_at(-10), 1_000_000).unwrap();
        assert!(amounts.amount0 > U256::zero());
        assert_eq!(amounts.amount1, U256::zero());
    }

    #[test]
    fn test_position_above_range() {
        let amounts = get_position_amounts(100, 0, 100, sqrt_at(100), 1_000_000).unwrap();
        assert_eq!(amounts.amount0, U256::zero());
        assert!(amounts.amount1 > U256::zero());
    }

    #[test]
    fn test_position_lower_tick_is_in_range() {
        // At the lower tick the current sqrt price equals the lower bound,
        // so the token1 half is empty but the region is still "in range".
        let amounts = get_position_amounts(0, 0, 100, sqrt_at(0), 1_000_000).unwrap();
        let below = get_position_amounts(-1, 0, 100, sqrt_at(-1), 1_000_000).unwrap();
        assert_eq!(amounts.amount1, U256::zero());
        assert_eq!(amounts.amount0, below.amount0);
    }

    #[test]
    fn test_position_zero_liquidity() {
        let amounts = get_position_amounts(50, 0, 100, sqrt_at(50), 0).unwrap();
        assert_eq!(amounts, PositionAmounts::zero());
    }

    #[test]
    fn test_position_invalid_range() {
        assert_eq!(
            get_position_amounts(0, 100, 100, sqrt_at(0), 1),
            Err(ZapCoreError::invalid_tick_range(100, 100))
        );
        assert_eq!(
            get_position_amounts(0, 100, -100, sqrt_at(0), 1),
            Err(ZapCoreError::invalid_tick_range(100, -100))
        );
    }

    #[test]
    fn test_position_known_amounts() {
        // L = 2^96 makes amount1 = sqrt_current - sqrt_lower exactly
        let liquidity = Q96;
        let amounts = get_position_amounts(0, -60, 60, sqrt_at(0), liquidity).unwrap();
        assert_eq!(amounts.amount1, sqrt_at(0) - sqrt_at(-60));
    }

    #[test]
    fn test_constant_product_share() {
        let amounts = get_constant_product_amounts(
            U256::from(1_000u64),
            U256::from(4_000u64),
            U256::from(300u64),
            U256::from(100u64),
        )
        .unwrap();
        assert_eq!(amounts, PositionAmounts::new(U256::from(333u64), U256::from(1_333u64)));

        assert!(get_constant_product_amounts(U256::one(), U256::one(), U256::zero(), U256::zero())
            .unwrap()
            .is_zero());
        assert_eq!(
            get_constant_product_amounts(U256::one(), U256::one(), U256::zero(), U256::one()),
            Err(ZapCoreError::DivisionByZero)
        );
        assert_eq!(
            get_constant_product_amounts(U256::one(), U256::one(), U256::one(), U256::from(2u64)),
            Err(ZapCoreError::LpBalanceExceedsSupply)
        );
    }

    #[test]
    fn test_liquidity_round_trip() {
        let sqrt_price = sqrt_at(0);
        let lower = sqrt_at(-1000);
        let upper = sqrt_at(1000);
        let liquidity = 1_000_000_000_000u128;

        let amounts = get_position_amounts(0, -1000, 1000, sqrt_price, liquidity).unwrap();
        let recovered =
            get_liquidity_for_amounts(sqrt_price, lower, upper, amounts.amount0, amounts.amount1)
                .unwrap();

        // Truncation on both legs can only lose a little
        assert!(recovered <= liquidity);
        assert!(liquidity - recovered < 1_000);
    }

    #[test]
    fn test_liquidity_for_single_sided_amounts() {
        let lower = sqrt_at(0);
        let upper = sqrt_at(100);

        let below = get_liquidity_for_amounts(sqrt_at(-50), lower, upper, U256::from(1_000u64), U256::zero())
            .unwrap();
        assert_eq!(below, get_liquidity_for_amount_0(lower, upper, U256::from(1_000u64)).unwrap());

        let above = get_liquidity_for_amounts(sqrt_at(150), upper, lower, U256::zero(), U256::from(1_000u64))
            .unwrap();
        assert_eq!(above, get_liquidity_for_amount_1(lower, upper, U256::from(1_000u64)).unwrap());
    }
}
