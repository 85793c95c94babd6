//! # Estimate Types
//!
//! Float-domain inputs and outputs of the exit estimator. Prices here are
//! display prices (token1 per token0) and amounts are human-scale.

/// What a position holds now and the price range it covers
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionSnapshot {
    pub current_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub token0_amount: f64,
    pub token1_amount: f64,
}

impl PositionSnapshot {
    /// The same position quoted as token0 per token1.
    ///
    /// Bounds swap places and the token amounts trade sides. A zero price
    /// becomes infinite, which the estimator rejects.
    pub fn inverted(&self) -> Self {
        Self {
            current_price: 1.0 / self.current_price,
            min_price: 1.0 / self.max_price,
            max_price: 1.0 / self.min_price,
            token0_amount: self.token1_amount,
            token1_amount: self.token0_amount,
        }
    }
}

/// Price window an exit waits for. A missing bound is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceCondition {
    pub gte: Option<f64>,
    pub lte: Option<f64>,
}

impl PriceCondition {
    pub fn at_least(price: f64) -> Self {
        Self {
            gte: Some(price),
            lte: None,
        }
    }

    pub fn at_most(price: f64) -> Self {
        Self {
            gte: None,
            lte: Some(price),
        }
    }

    pub fn between(gte: f64, lte: f64) -> Self {
        Self {
            gte: Some(gte),
            lte: Some(lte),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.gte.is_none() && self.lte.is_none()
    }
}

/// How two exit conditions combine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "client", serde(rename_all = "lowercase"))]
pub enum ConditionLogic {
    And,
    Or,
}

/// Token amounts the position would hold once the exit fires
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpectedAmounts {
    pub amount0: f64,
    pub amount1: f64,
}

impl ExpectedAmounts {
    /// Swap token sides, matching `PositionSnapshot::inverted`
    pub fn swapped(&self) -> Self {
        Self {
            amount0: self.amount1,
            amount1: self.amount0,
        }
    }
}
