//! # Core Type Definitions
//!
//! Pool state, positions, and the inputs and outputs of the estimators.

pub mod amounts;
pub mod estimate;
pub mod pool;

// Re-export all types
pub use amounts::*;
pub use estimate::*;
pub use pool::*;
