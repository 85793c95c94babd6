//! Expected token amounts at an exit price.
//!
//! The estimator backs out the position's liquidity from what it holds now,
//! then re-applies the forward three-region formula at the target price. All
//! of it is float math on display prices, so results are estimates.

use log::trace;

use crate::constants::MIN_USABLE_DENOMINATOR;
use crate::types::{ExpectedAmounts, PositionSnapshot, PriceCondition};

/// Amounts the position would hold once `condition` is met, or `None` when
/// the inputs do not allow an estimate
pub fn calculate_expected_amounts(
    position: &PositionSnapshot,
    condition: &PriceCondition,
) -> Option<ExpectedAmounts> {
    let PositionSnapshot {
        current_price,
        min_price,
        max_price,
        token0_amount,
        token1_amount,
    } = *position;

    let finite = [current_price, min_price, max_price, token0_amount, token1_amount]
        .iter()
        .all(|value| value.is_finite());
    if !finite {
        trace!("no estimate: non-finite input {:?}", position);
        return None;
    }
    if current_price <= 0.0 || min_price < 0.0 || min_price > max_price {
        trace!(
            "no estimate: bad price range {} in [{}, {}]",
            current_price,
            min_price,
            max_price
        );
        return None;
    }
    if token0_amount < 0.0 || token1_amount < 0.0 {
        trace!("no estimate: negative holdings {:?}", position);
        return None;
    }

    let target = match condition.target_price() {
        Some(target) => target,
        None => {
            trace!("no estimate: condition {:?} has no target", condition);
            return None;
        }
    };

    let liquidity = match implied_liquidity(position) {
        Some(liquidity) => liquidity,
        None => {
            trace!("no estimate: liquidity cannot be backed out of {:?}", position);
            return None;
        }
    };

    Some(amounts_at_price(liquidity, target, min_price, max_price))
}

/// Liquidity consistent with the position's current holdings
fn implied_liquidity(position: &PositionSnapshot) -> Option<f64> {
    let sqrt_current = position.current_price.sqrt();
    let sqrt_min = position.min_price.sqrt();
    let sqrt_max = position.max_price.sqrt();
    let amount0 = position.token0_amount;
    let amount1 = position.token1_amount;

    let out_of_range = position.current_price < position.min_price
        || position.current_price > position.max_price;

    let liquidity = if out_of_range {
        // Single-sided: read the token the position holds on this side first
        let width = sqrt_max - sqrt_min;
        if width < MIN_USABLE_DENOMINATOR {
            return None;
        }
        let from_token0 = (amount0 > 0.0).then(|| amount0 * sqrt_min * sqrt_max / width);
        let from_token1 = (amount1 > 0.0).then(|| amount1 / width);

        let below = position.current_price < position.min_price;
        let (primary, fallback) = if below {
            (from_token0, from_token1)
        } else {
            (from_token1, from_token0)
        };
        primary.or(fallback)?
    } else {
        let upper_width = sqrt_max - sqrt_current;
        let lower_width = sqrt_current - sqrt_min;

        let from_token0 = (amount0 > 0.0 && upper_width >= MIN_USABLE_DENOMINATOR)
            .then(|| amount0 * sqrt_current * sqrt_max / upper_width)
            .filter(|liquidity| is_usable_liquidity(*liquidity));
        let from_token1 = (amount1 > 0.0 && lower_width >= MIN_USABLE_DENOMINATOR)
            .then(|| amount1 / lower_width)
            .filter(|liquidity| is_usable_liquidity(*liquidity));

        match (from_token0, from_token1) {
            (Some(l0), Some(l1)) => (l0 + l1) / 2.0,
            (Some(l0), None) => l0,
            (None, Some(l1)) => l1,
            (None, None) => return None,
        }
    };

    Some(liquidity).filter(|liquidity| is_usable_liquidity(*liquidity))
}

fn is_usable_liquidity(liquidity: f64) -> bool {
    liquidity.is_finite() && liquidity > 0.0
}

/// Forward three-region formula at `price`
fn amounts_at_price(liquidity: f64, price: f64, min_price: f64, max_price: f64) -> ExpectedAmounts {
    let sqrt_min = min_price.sqrt();
    let sqrt_max = max_price.sqrt();

    if price <= min_price {
        ExpectedAmounts {
            amount0: liquidity * (sqrt_max - sqrt_min) / (sqrt_min * sqrt_max),
            amount1: 0.0,
        }
    } else if price >= max_price {
        ExpectedAmounts {
            amount0: 0.0,
            amount1: liquidity * (sqrt_max - sqrt_min),
        }
    } else {
        let sqrt_price = price.sqrt();
        ExpectedAmounts {
            amount0: liquidity * (sqrt_max - sqrt_price) / (sqrt_price * sqrt_max),
            amount1: liquidity * (sqrt_price - sqrt_min),
        }
    }
}
