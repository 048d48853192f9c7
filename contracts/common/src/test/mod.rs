#![cfg(test)]

mod decimal_tests {
    use soroban_sdk::Env;

    use crate::decimal::{
        apply_bps, div, ensure_within_slippage, from_units, mul, mul_div,
        mul_div_round_half_up, mul_div_round_up, require_non_negative, require_positive, slippage_band, SCALE,
    };
    use crate::ExchangeError;

    #[test]
    fn mul_div_truncates_toward_zero() {
        let env = Env::default();
        assert_eq!(mul_div(&env, 7, 3, 2), Ok(10));
        assert_eq!(div(&env, SCALE, 3 * SCALE), Ok(333_333_333_333_333_333));
    }

    #[test]
    fn mul_carries_wide_intermediate() {
        let env = Env::default();
        // 5000e18 * 5000e18 does not fit in i128 before the division by SCALE.
        let five_thousand = from_units(5_000).unwrap();
        assert_eq!(mul(&env, five_thousand, five_thousand), from_units(25_000_000));
    }

    #[test]
    fn mul_div_reports_overflow_when_result_exceeds_i128() {
        let env = Env::default();
        assert_eq!(mul_div(&env, i128::MAX, i128::MAX, 1), Err(ExchangeError::Overflow));
    }

    #[test]
    fn mul_div_rejects_negative_operands_and_zero_divisor() {
        let env = Env::default();
        assert_eq!(mul_div(&env, -1, 1, 1), Err(ExchangeError::InvalidAmount));
        assert_eq!(mul_div(&env, 1, -1, 1), Err(ExchangeError::InvalidAmount));
        assert_eq!(mul_div(&env, 1, 1, 0), Err(ExchangeError::DivisionByZero));
    }

    #[test]
    fn round_half_up_only_rounds_at_or_above_half() {
        let env = Env::default();
        assert_eq!(mul_div_round_half_up(&env, 1, 1, 2), Ok(1));
        assert_eq!(mul_div_round_half_up(&env, 1, 1, 3), Ok(0));
        assert_eq!(mul_div_round_half_up(&env, 2, 1, 3), Ok(1));
    }

    #[test]
    fn round_half_up_on_wide_path() {
        let env = Env::default();
        let big = 10_i128.pow(28);
        assert_eq!(
            mul_div_round_half_up(&env, big, big, 6 * 10_i128.pow(37)),
            Ok(1_666_666_666_666_666_667)
        );
        assert_eq!(
            mul_div(&env, big, big, 6 * 10_i128.pow(37)),
            Ok(1_666_666_666_666_666_666)
        );
    }

    #[test]
    fn round_up_only_moves_inexact_quotients() {
        let env = Env::default();
        assert_eq!(mul_div_round_up(&env, 10, 1, 3), Ok(4));
        assert_eq!(mul_div_round_up(&env, 9, 1, 3), Ok(3));
        assert_eq!(mul_div_round_up(&env, 0, 1, 3), Ok(0));
        assert_eq!(mul_div_round_up(&env, 1, 1, 0), Err(ExchangeError::DivisionByZero));
    }

    #[test]
    fn round_up_on_wide_path() {
        let env = Env::default();
        let big = 10_i128.pow(28);
        assert_eq!(
            mul_div_round_up(&env, big, big, 6 * 10_i128.pow(37)),
            Ok(1_666_666_666_666_666_667)
        );
        assert_eq!(mul_div_round_up(&env, big, big, 10_i128.pow(37)), Ok(10_i128.pow(19)));
    }

    #[test]
    fn apply_bps_takes_fee_fraction() {
        let env = Env::default();
        assert_eq!(apply_bps(&env, from_units(100).unwrap(), 300), from_units(3));
        assert_eq!(apply_bps(&env, 1, 300), Ok(0));
    }

    #[test]
    fn slippage_band_brackets_rate() {
        let env = Env::default();
        let (lower, upper) = slippage_band(&env, SCALE, SCALE).unwrap();
        assert_eq!(lower, 990_000_000_000_000_000);
        assert_eq!(upper, 1_010_101_010_101_010_101);
    }

    #[test]
    fn slippage_band_with_zero_tolerance_is_a_point() {
        let env = Env::default();
        assert_eq!(slippage_band(&env, 42 * SCALE, 0), Ok((42 * SCALE, 42 * SCALE)));
    }

    #[test]
    fn slippage_band_rejects_out_of_range_percentages() {
        let env = Env::default();
        assert_eq!(slippage_band(&env, SCALE, -1), Err(ExchangeError::InvalidAmount));
        assert_eq!(
            slippage_band(&env, SCALE, 100 * SCALE),
            Err(ExchangeError::InvalidAmount)
        );
    }

    #[test]
    fn ensure_within_slippage_flags_outliers() {
        let env = Env::default();
        assert_eq!(ensure_within_slippage(&env, SCALE, SCALE + SCALE / 200, SCALE), Ok(()));
        assert_eq!(
            ensure_within_slippage(&env, SCALE, SCALE - SCALE / 50, SCALE),
            Err(ExchangeError::SlippageExceeded)
        );
    }

    #[test]
    fn amount_guards() {
        assert_eq!(require_positive(0), Err(ExchangeError::InvalidAmount));
        assert_eq!(require_positive(1), Ok(()));
        assert_eq!(require_non_negative(0), Ok(()));
        assert_eq!(require_non_negative(-1), Err(ExchangeError::InvalidAmount));
        assert_eq!(from_units(i128::MAX), Err(ExchangeError::Overflow));
    }
}

mod decimal_properties {
    use proptest::prelude::*;
    use soroban_sdk::Env;

    use crate::decimal::{mul_div, mul_div_round_half_up, slippage_band, ONE_HUNDRED_PERCENT, SCALE};

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn narrow_products_match_native_division(
            a in 0_i128..(1 << 62),
            b in 0_i128..(1 << 62),
            d in 1_i128..(1 << 62),
        ) {
            let env = Env::default();
            prop_assert_eq!(mul_div(&env, a, b, d), Ok(a * b / d));
        }

        #[test]
        fn wide_products_divide_back_exactly(
            a in 1_i128..(1 << 100),
            b in (1_i128 << 40)..(1 << 100),
        ) {
            let env = Env::default();
            prop_assert_eq!(mul_div(&env, a, b, b), Ok(a));
        }

        #[test]
        fn rounding_never_exceeds_floor_by_more_than_one(
            a in 0_i128..(1 << 90),
            b in 0_i128..(1 << 90),
            d in 1_i128..(1 << 90),
        ) {
            let env = Env::default();
            if let (Ok(floor), Ok(rounded)) =
                (mul_div(&env, a, b, d), mul_div_round_half_up(&env, a, b, d))
            {
                prop_assert!(rounded == floor || rounded == floor + 1);
            }
        }

        #[test]
        fn slippage_band_contains_reference(
            rate in 1_i128..(1_000_000 * SCALE),
            pct in 0_i128..(ONE_HUNDRED_PERCENT - SCALE),
        ) {
            let env = Env::default();
            let (lower, upper) = slippage_band(&env, rate, pct).unwrap();
            prop_assert!(lower <= rate && rate <= upper);
        }
    }
}

mod product_tests {
    use soroban_sdk::{Env, U256};

    use crate::decimal::{from_units, product, require_percentage, SCALE};
    use crate::ExchangeError;

    #[test]
    fn product_compares_beyond_i128() {
        let env = Env::default();
        let reserve = from_units(5_000).unwrap();
        let before = product(&env, reserve, reserve).unwrap();
        let after = product(&env, reserve + 1, reserve).unwrap();
        assert!(after > before);
        assert_eq!(
            product(&env, 2, 3).unwrap(),
            U256::from_u32(&env, 6)
        );
    }

    #[test]
    fn product_rejects_negative_factor() {
        let env = Env::default();
        assert_eq!(product(&env, -1, 1), Err(ExchangeError::InvalidAmount));
    }

    #[test]
    fn percentage_bounds() {
        assert_eq!(require_percentage(0), Ok(()));
        assert_eq!(require_percentage(99 * SCALE), Ok(()));
        assert_eq!(require_percentage(100 * SCALE), Err(ExchangeError::InvalidAmount));
    }
}
