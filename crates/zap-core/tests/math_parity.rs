//! # Math Parity Tests
//!
//! Scenarios checked against values a deployed pool reports, so the off-chain
//! numbers shown in the widgets agree with what a withdrawal would return.

#[cfg(test)]
mod tests {
    use zap_core::constants::*;
    use zap_core::math::*;
    use zap_core::*;

    #[test]
    fn test_tick_math_parity() {
        let test_ticks = vec![
            MIN_TICK,
            MIN_TICK + 1,
            -100_000,
            -10_000,
            -1_000,
            -100,
            -10,
            -1,
            0,
            1,
            10,
            100,
            1_000,
            10_000,
            100_000,
            MAX_TICK - 1,
        ];

        for tick in test_ticks {
            let sqrt_price = get_sqrt_ratio_at_tick(tick).unwrap();

            assert!(sqrt_price >= MIN_SQRT_RATIO);
            assert!(sqrt_price < MAX_SQRT_RATIO);

            let recovered_tick = get_tick_at_sqrt_ratio(sqrt_price).unwrap();
            assert_eq!(tick, recovered_tick, "Round trip failed for tick {}", tick);
        }
    }

    #[test]
    fn test_sqrt_ratio_monotonic() {
        let mut previous = get_sqrt_ratio_at_tick(-5_000).unwrap();
        for tick in (-4_999..=5_000).step_by(7) {
            let current = get_sqrt_ratio_at_tick(tick).unwrap();
            assert!(current > previous, "not increasing at tick {}", tick);
            previous = current;
        }
    }

    #[test]
    fn test_symmetric_range_at_unit_price() {
        // Tick 0, range [-1000, 1000], L = 1,000,000: L * (1 - 1.0001^-500) on each side
        let pool = PoolSnapshot::at_tick(0, 18, 18).unwrap();
        let amounts = get_position_amounts(0, -1_000, 1_000, pool.sqrt_price_x96, 1_000_000).unwrap();

        assert_eq!(amounts.amount0, U256::from(48_768u64));
        assert_eq!(amounts.amount1, U256::from(48_768u64));
    }

    #[test]
    fn test_region_boundaries() {
        let liquidity = 5_000_000_000u128;
        let sqrt_lower = get_sqrt_ratio_at_tick(-600).unwrap();
        let sqrt_upper = get_sqrt_ratio_at_tick(600).unwrap();

        // Just below the lower tick: single-sided token0
        let below = get_position_amounts(-601, -600, 600, get_sqrt_ratio_at_tick(-601).unwrap(), liquidity)
            .unwrap();
        assert_eq!(below.amount1, U256::zero());
        assert_eq!(
            below.amount0,
            get_amount_0_delta(sqrt_lower, sqrt_upper, liquidity, false).unwrap()
        );

        // At the upper tick the position has fully converted to token1
        let above = get_position_amounts(600, -600, 600, sqrt_upper, liquidity).unwrap();
        assert_eq!(above.amount0, U256::zero());
        assert_eq!(
            above.amount1,
            get_amount_1_delta(sqrt_lower, sqrt_upper, liquidity, false).unwrap()
        );

        // Crossing the range moves value from token0 to token1 continuously
        let mid = get_position_amounts(0, -600, 600, get_sqrt_ratio_at_tick(0).unwrap(), liquidity).unwrap();
        assert!(mid.amount0 < below.amount0);
        assert!(mid.amount1 < above.amount1);
    }

    #[test]
    fn test_usdc_weth_position() {
        // USDC (6) / WETH (18) pool at tick 200311, roughly 2000 USDC per ETH
        let pool = PoolSnapshot::at_tick(200_311, 6, 18).unwrap();
        let price = pool.price();
        let eth_price = invert_price(price).unwrap();
        assert!(eth_price > 1_990.0 && eth_price < 2_010.0, "eth price {}", eth_price);

        let range = PositionRange::new(nearest_usable_tick(195_000, 60).unwrap(), 205_020).unwrap();
        let position = PoolPosition::ConcentratedLiquidity {
            pool,
            range,
            liquidity: 10u128.pow(17),
        };
        let amounts = position.amounts().unwrap();
        assert!(!amounts.amount0.is_zero());
        assert!(!amounts.amount1.is_zero());

        let half = amounts.scale_bps(5_000).unwrap();
        assert!(half.amount0 * U256::from(2u64) <= amounts.amount0);
    }

    #[test]
    fn test_exit_estimate_after_position_read() {
        let snapshot = PositionSnapshot {
            current_price: 2_000.0,
            min_price: 1_500.0,
            max_price: 2_500.0,
            token0_amount: 1.0,
            token1_amount: 1_800.0,
        };

        let condition = merge_price_conditions(
            &PriceCondition::at_least(2_600.0),
            &PriceCondition::at_most(3_000.0),
            ConditionLogic::And,
        );
        let expected = calculate_expected_amounts(&snapshot, &condition).unwrap();

        // Exit above range: all value sits in token1
        assert_eq!(expected.amount0, 0.0);
        assert!(expected.amount1 > snapshot.token1_amount);
    }

    #[test]
    fn test_axis_labels() {
        assert_eq!(format_axis_price(0.0), "0");
        assert_eq!(format_axis_price(1_500.0), "1,500");
        assert_eq!(format_axis_price(2_500_000.0), "2.5M");
        assert_eq!(format_axis_price(0.000_001), "0.00001");

        let labels: Vec<String> = calculate_price_axis_ticks(1_800.0, 2_200.0, DEFAULT_AXIS_TICK_COUNT)
            .map(format_axis_price)
            .collect();
        assert_eq!(labels, vec!["1,800", "1,900", "2,000", "2,100", "2,200"]);

        assert_eq!(get_edge_intensity(50.0, 10.0), 0.0);
        assert_eq!(get_edge_intensity(0.0, 10.0), 1.0);
        assert_eq!(get_edge_intensity(95.0, 10.0), 0.5);
    }
}
