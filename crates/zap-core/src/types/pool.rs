//! # Pool and Position Types
//!
//! Validated views of on-chain pool state and the positions held in it.

use crate::errors::{CoreResult, ZapCoreError};
use crate::math::big_int::U256;
use crate::math::liquidity_math::{get_constant_product_amounts, get_position_amounts};
use crate::math::price::{sqrt_price_to_price, tick_to_price};
use crate::math::tick_math::{get_sqrt_ratio_at_tick, get_tick_at_sqrt_ratio, is_tick_valid};
use crate::types::amounts::PositionAmounts;

#[cfg(feature = "client")]
use crate::types::amounts::u256_dec;

/// Pool price state as read from `slot0`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolSnapshot {
    pub current_tick: i32,
    #[cfg_attr(feature = "client", serde(with = "u256_dec"))]
    pub sqrt_price_x96: U256,
    pub token0_decimals: u8,
    pub token1_decimals: u8,
}

impl PoolSnapshot {
    /// Build a snapshot, rejecting a tick that does not match the sqrt price
    pub fn new(
        current_tick: i32,
        sqrt_price_x96: U256,
        token0_decimals: u8,
        token1_decimals: u8,
    ) -> CoreResult<Self> {
        let expected = get_tick_at_sqrt_ratio(sqrt_price_x96)?;
        if expected != current_tick {
            return Err(ZapCoreError::InconsistentPoolState {
                tick: current_tick,
                expected,
            });
        }

        Ok(Self {
            current_tick,
            sqrt_price_x96,
            token0_decimals,
            token1_decimals,
        })
    }

    /// Snapshot with the tick derived from the sqrt price
    pub fn from_sqrt_price(
        sqrt_price_x96: U256,
        token0_decimals: u8,
        token1_decimals: u8,
    ) -> CoreResult<Self> {
        let current_tick = get_tick_at_sqrt_ratio(sqrt_price_x96)?;
        Self::new(current_tick, sqrt_price_x96, token0_decimals, token1_decimals)
    }

    /// Snapshot sitting exactly on a tick boundary
    pub fn at_tick(current_tick: i32, token0_decimals: u8, token1_decimals: u8) -> CoreResult<Self> {
        let sqrt_price_x96 = get_sqrt_ratio_at_tick(current_tick)?;
        Ok(Self {
            current_tick,
            sqrt_price_x96,
            token0_decimals,
            token1_decimals,
        })
    }

    /// Display price (token1 per token0)
    pub fn price(&self) -> f64 {
        sqrt_price_to_price(self.sqrt_price_x96, self.token0_decimals, self.token1_decimals)
    }
}

/// Tick bounds of a concentrated position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionRange {
    pub tick_lower: i32,
    pub tick_upper: i32,
}

impl PositionRange {
    pub fn new(tick_lower: i32, tick_upper: i32) -> CoreResult<Self> {
        if tick_lower >= tick_upper {
            return Err(ZapCoreError::invalid_tick_range(tick_lower, tick_upper));
        }
        for tick in [tick_lower, tick_upper] {
            if !is_tick_valid(tick) {
                return Err(ZapCoreError::TickOutOfRange(tick));
            }
        }

        Ok(Self {
            tick_lower,
            tick_upper,
        })
    }

    /// Lower bound inclusive, upper bound exclusive
    pub fn contains(&self, tick: i32) -> bool {
        tick >= self.tick_lower && tick < self.tick_upper
    }

    /// Display prices at both bounds
    pub fn price_bounds(&self, token0_decimals: u8, token1_decimals: u8) -> CoreResult<(f64, f64)> {
        Ok((
            tick_to_price(self.tick_lower, token0_decimals, token1_decimals)?,
            tick_to_price(self.tick_upper, token0_decimals, token1_decimals)?,
        ))
    }
}

/// A liquidity position in one of the supported pool kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "client", serde(tag = "kind", rename_all = "snake_case"))]
pub enum PoolPosition {
    /// Fungible LP tokens over full-range reserves
    ConstantProduct {
        #[cfg_attr(feature = "client", serde(with = "u256_dec"))]
        reserve0: U256,
        #[cfg_attr(feature = "client", serde(with = "u256_dec"))]
        reserve1: U256,
        #[cfg_attr(feature = "client", serde(with = "u256_dec"))]
        total_supply: U256,
        #[cfg_attr(feature = "client", serde(with = "u256_dec"))]
        lp_balance: U256,
    },
    /// Liquidity bound to a tick range
    ConcentratedLiquidity {
        pool: PoolSnapshot,
        range: PositionRange,
        liquidity: u128,
    },
}

impl PoolPosition {
    /// Token amounts withdrawable from the position right now
    pub fn amounts(&self) -> CoreResult<PositionAmounts> {
        match self {
            PoolPosition::ConstantProduct {
                reserve0,
                reserve1,
                total_supply,
                lp_balance,
            } => get_constant_product_amounts(*reserve0, *reserve1, *total_supply, *lp_balance),
            PoolPosition::ConcentratedLiquidity {
                pool,
                range,
                liquidity,
            } => get_position_amounts(
                pool.current_tick,
                range.tick_lower,
                range.tick_upper,
                pool.sqrt_price_x96,
                *liquidity,
            ),
        }
    }

    pub fn is_in_range(&self) -> bool {
        match self {
            PoolPosition::ConstantProduct { .. } => true,
            PoolPosition::ConcentratedLiquidity { pool, range, .. } => {
                range.contains(pool.current_tick)
            }
        }
    }
}
