//! Combining exit conditions and resolving the price an exit would fire at.

use crate::types::{ConditionLogic, PriceCondition};

/// A bound counts only if it is a finite, positive price
fn usable(bound: Option<f64>) -> Option<f64> {
    bound.filter(|price| price.is_finite() && *price > 0.0)
}

/// Merge two conditions into a single window.
///
/// `And` intersects the windows: the tighter bound wins on each side.
/// `Or` takes the smallest window covering both; a side left open by either
/// condition stays open.
pub fn merge_price_conditions(
    first: &PriceCondition,
    second: &PriceCondition,
    logic: ConditionLogic,
) -> PriceCondition {
    let (gte_a, gte_b) = (usable(first.gte), usable(second.gte));
    let (lte_a, lte_b) = (usable(first.lte), usable(second.lte));

    match logic {
        ConditionLogic::And => PriceCondition {
            gte: either_or_both(gte_a, gte_b, f64::max),
            lte: either_or_both(lte_a, lte_b, f64::min),
        },
        ConditionLogic::Or => PriceCondition {
            gte: gte_a.zip(gte_b).map(|(a, b)| a.min(b)),
            lte: lte_a.zip(lte_b).map(|(a, b)| a.max(b)),
        },
    }
}

fn either_or_both(a: Option<f64>, b: Option<f64>, pick: fn(f64, f64) -> f64) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(pick(a, b)),
        (Some(a), None) => Some(a),
        (None, b) => b,
    }
}

impl PriceCondition {
    /// Trigger price of the condition: the lower bound when present, else
    /// the upper bound.
    ///
    /// `None` when the condition has no usable bound or the window is empty.
    pub fn target_price(&self) -> Option<f64> {
        match (usable(self.gte), usable(self.lte)) {
            (Some(low), Some(high)) if low > high => None,
            (Some(low), _) => Some(low),
            (None, high) => high,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_takes_tighter_bounds() {
        let merged = merge_price_conditions(
            &PriceCondition::between(1_000.0, 3_000.0),
            &PriceCondition::between(1_500.0, 2_500.0),
            ConditionLogic::And,
        );
        assert_eq!(merged, PriceCondition::between(1_500.0, 2_500.0));

        let merged = merge_price_conditions(
            &PriceCondition::at_least(1_000.0),
            &PriceCondition::at_most(2_000.0),
            ConditionLogic::And,
        );
        assert_eq!(merged, PriceCondition::between(1_000.0, 2_000.0));
    }

    #[test]
    fn test_or_covers_both_windows() {
        let merged = merge_price_conditions(
            &PriceCondition::between(1_000.0, 2_000.0),
            &PriceCondition::between(1_500.0, 3_000.0),
            ConditionLogic::Or,
        );
        assert_eq!(merged, PriceCondition::between(1_000.0, 3_000.0));

        // A side open in either condition stays open
        let merged = merge_price_conditions(
            &PriceCondition::at_least(2_000.0),
            &PriceCondition::at_most(1_500.0),
            ConditionLogic::Or,
        );
        assert!(merged.is_unbounded());
    }

    #[test]
    fn test_unusable_bounds_are_ignored() {
        let merged = merge_price_conditions(
            &PriceCondition::at_least(f64::NAN),
            &PriceCondition::at_least(-5.0),
            ConditionLogic::And,
        );
        assert!(merged.is_unbounded());
    }

    #[test]
    fn test_target_price() {
        assert_eq!(PriceCondition::between(1_500.0, 2_500.0).target_price(), Some(1_500.0));
        assert_eq!(PriceCondition::at_least(2_000.0).target_price(), Some(2_000.0));
        assert_eq!(PriceCondition::at_most(500.0).target_price(), Some(500.0));

        // An unusable lower bound falls through to the upper one
        let condition = PriceCondition {
            gte: Some(f64::NAN),
            lte: Some(800.0),
        };
        assert_eq!(condition.target_price(), Some(800.0));
    }

    #[test]
    fn test_target_price_without_window() {
        assert_eq!(PriceCondition::default().target_price(), None);
        assert_eq!(PriceCondition::between(3.0, 2.0).target_price(), None);
        assert_eq!(PriceCondition::at_least(0.0).target_price(), None);
    }
}
