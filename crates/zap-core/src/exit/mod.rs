//! # Exit Estimation
//!
//! Price-triggered exits: merging trigger conditions and estimating what a
//! concentrated position will hold when one fires.

pub mod condition;
pub mod expected_amounts;

pub use condition::*;
pub use expected_amounts::*;
