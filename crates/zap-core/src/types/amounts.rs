//! # Amount Types
//!
//! Integer token amounts a position decomposes into.

use crate::constants::BPS_DENOMINATOR;
use crate::errors::{CoreResult, ZapCoreError};
use crate::math::big_int::{mul_div, Rounding, U256};

/// Token0/token1 amounts represented by some liquidity at a given price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionAmounts {
    #[cfg_attr(feature = "client", serde(with = "u256_dec"))]
    pub amount0: U256,
    #[cfg_attr(feature = "client", serde(with = "u256_dec"))]
    pub amount1: U256,
}

impl PositionAmounts {
    pub const fn new(amount0: U256, amount1: U256) -> Self {
        Self { amount0, amount1 }
    }

    pub const fn zero() -> Self {
        Self::new(U256([0; 4]), U256([0; 4]))
    }

    pub fn is_zero(&self) -> bool {
        self.amount0.is_zero() && self.amount1.is_zero()
    }

    /// Share of both amounts for a partial removal, truncated toward zero
    pub fn scale_bps(&self, bps: u32) -> CoreResult<Self> {
        if bps > BPS_DENOMINATOR {
            return Err(ZapCoreError::InvalidBasisPoints(bps));
        }

        let scale = |amount: U256| {
            mul_div(
                amount,
                U256::from(bps),
                U256::from(BPS_DENOMINATOR),
                Rounding::Down,
            )
        };

        Ok(Self::new(scale(self.amount0)?, scale(self.amount1)?))
    }
}

/// Serde helpers writing U256 as a decimal string, the format wallets and
/// RPC responses use for on-chain integers
#[cfg(feature = "client")]
pub mod u256_dec {
    use crate::math::big_int::U256;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        U256::from_dec_str(&s)
            .map_err(|e| serde::de::Error::custom(format!("invalid integer {:?}: {:?}", s, e)))
    }
}
