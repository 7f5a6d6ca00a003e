//! Property-based invariants of the risk calculator

use calculator::compute;
use proptest::prelude::*;
use rust_decimal::Decimal;
use types::errors::InvalidInputKind;
use types::trade::{Side, SizingPolicy, TradeInputs};

/// Prices between 0.01 and 100 000.00
fn price() -> impl Strategy<Value = Decimal> {
    (1i64..=10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Long), Just(Side::Short)]
}

fn policy() -> impl Strategy<Value = SizingPolicy> {
    prop_oneof![Just(SizingPolicy::SplitFullRisk), Just(SizingPolicy::RiskScaledByDca)]
}

fn risk() -> impl Strategy<Value = Decimal> {
    (1i64..=1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    /// Invariant: identical inputs give identical outputs.
    #[test]
    fn prop_compute_deterministic(
        side in side(),
        entry in price(),
        stop in price(),
        leverage in 1u32..=125,
        risk in risk(),
        dca in 0i64..=100,
        policy in policy(),
    ) {
        prop_assume!(entry != stop);
        let inputs = TradeInputs::new(side, entry, stop, leverage)
            .with_risk_dollars(risk)
            .with_dca(Decimal::from(dca))
            .with_sizing_policy(policy);

        let first = compute(&inputs).unwrap();
        let second = compute(&inputs).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Invariant: entry == stop is always a zero risk distance.
    #[test]
    fn prop_zero_distance_always_rejected(
        side in side(),
        entry in price(),
        leverage in 0u32..=125,
        risk in -1_000i64..1_000,
        balance in -1_000i64..1_000,
    ) {
        let inputs = TradeInputs::new(side, entry, entry, leverage)
            .with_risk_dollars(Decimal::from(risk))
            .with_account_balance(Decimal::from(balance));
        let err = compute(&inputs).unwrap_err();
        prop_assert_eq!(err.kind, InvalidInputKind::ZeroRiskDistance);
    }

    /// Invariant: DCA at 0% fills everything at entry, at 100% reserves everything.
    #[test]
    fn prop_dca_extremes(
        side in side(),
        entry in price(),
        stop in price(),
        leverage in 1u32..=125,
        risk in risk(),
        policy in policy(),
    ) {
        prop_assume!(entry != stop);
        let base = TradeInputs::new(side, entry, stop, leverage)
            .with_risk_dollars(risk)
            .with_sizing_policy(policy);

        let none = compute(&base.clone().with_dca(Decimal::ZERO)).unwrap();
        prop_assert_eq!(none.entry_leg_units, none.total_position_units);
        prop_assert_eq!(none.dca_leg_units, Decimal::ZERO);

        let all = compute(&base.with_dca(Decimal::ONE_HUNDRED)).unwrap();
        prop_assert_eq!(all.entry_leg_units, Decimal::ZERO);
        prop_assert_eq!(all.dca_leg_units, all.total_position_units);
    }

    /// Invariant: liquidation sits on the losing side of entry.
    #[test]
    fn prop_liquidation_side(
        side in side(),
        entry in price(),
        stop in price(),
        leverage in 2u32..=125,
        risk in risk(),
    ) {
        prop_assume!(entry != stop);
        let inputs = TradeInputs::new(side, entry, stop, leverage).with_risk_dollars(risk);
        let metrics = compute(&inputs).unwrap();
        match side {
            Side::Long => prop_assert!(metrics.liquidation_price < entry),
            Side::Short => prop_assert!(metrics.liquidation_price > entry),
        }
    }

    /// Invariant: R:R is absent exactly when the target equals entry.
    #[test]
    fn prop_risk_reward_absent_iff_target_at_entry(
        side in side(),
        entry in price(),
        stop in price(),
        target in price(),
        use_entry_as_target in any::<bool>(),
        risk in risk(),
    ) {
        prop_assume!(entry != stop);
        let target = if use_entry_as_target { entry } else { target };
        let inputs = TradeInputs::new(side, entry, stop, 10)
            .with_target_price(target)
            .with_risk_dollars(risk);
        let metrics = compute(&inputs).unwrap();
        prop_assert_eq!(metrics.risk_reward_ratio.is_none(), target == entry);
    }

    /// Invariant: legs always add back up to the total.
    #[test]
    fn prop_legs_sum_to_total(
        entry in price(),
        stop in price(),
        risk in risk(),
        dca in 0i64..=10_000,
    ) {
        prop_assume!(entry != stop);
        let inputs = TradeInputs::new(Side::Long, entry, stop, 10)
            .with_risk_dollars(risk)
            .with_dca(Decimal::new(dca, 2));
        let metrics = compute(&inputs).unwrap();
        let diff = (metrics.entry_leg_units + metrics.dca_leg_units - metrics.total_position_units).abs();
        prop_assert!(diff <= Decimal::new(1, 18));
    }
}
