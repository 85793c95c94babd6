//! # Core Error Types
//!
//! Errors raised by the integer-domain math. The float-domain estimators never
//! fail; they answer `None` when no estimate can be made.

use thiserror::Error;

/// Errors that can occur while converting ticks or decomposing positions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum ZapCoreError {
    // ========================================================================
    // Math Errors
    // ========================================================================

    #[error("Math overflow")]
    MathOverflow,

    #[error("Math underflow")]
    MathUnderflow,

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Mul div overflow")]
    MulDivOverflow,

    // ========================================================================
    // Validation Errors
    // ========================================================================

    #[error("Tick {0} out of range")]
    TickOutOfRange(i32),

    #[error("Sqrt price out of range")]
    SqrtPriceOutOfRange,

    #[error("Invalid tick range: lower {lower} must be below upper {upper}")]
    InvalidTickRange { lower: i32, upper: i32 },

    #[error("Invalid tick spacing: {0}")]
    InvalidTickSpacing(i32),

    #[error("Invalid price")]
    InvalidPrice,

    #[error("Inconsistent pool state: tick {tick} does not match sqrt price (expected {expected})")]
    InconsistentPoolState { tick: i32, expected: i32 },

    #[error("Invalid basis points: {0}")]
    InvalidBasisPoints(u32),

    #[error("LP balance exceeds total supply")]
    LpBalanceExceedsSupply,

    // ========================================================================
    // General Errors
    // ========================================================================

    #[error("Conversion error")]
    ConversionError,
}

/// Result type using core errors
pub type CoreResult<T> = Result<T, ZapCoreError>;

impl ZapCoreError {
    /// Create an invalid tick range error
    pub fn invalid_tick_range(lower: i32, upper: i32) -> Self {
        Self::InvalidTickRange { lower, upper }
    }
}
