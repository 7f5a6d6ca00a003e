//! Position sizing
//!
//! Turns a dollar risk budget into a unit count and splits it into an
//! immediate entry leg and a reserved DCA leg.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::numeric::percent_to_fraction;
use types::trade::{RiskMode, SizingPolicy, TradeInputs};

/// Sized position, before prices are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionSizing {
    pub total_units: Decimal,
    pub entry_leg_units: Decimal,
    pub dca_leg_units: Decimal,
    /// Dollar risk the total position carries if stopped out
    pub sized_risk_dollars: Decimal,
    /// Dollar risk treated as active immediately
    pub effective_risk_dollars: Decimal,
}

/// Resolve the dollar risk budget.
///
/// PercentOfAccount: `account_balance × percent / 100`.
/// DollarAmount: the supplied amount.
///
/// `None` on overflow.
pub fn resolve_risk_dollars(inputs: &TradeInputs) -> Option<Decimal> {
    match inputs.risk_mode {
        RiskMode::DollarAmount => Some(inputs.risk_dollar_amount),
        RiskMode::PercentOfAccount => inputs
            .account_balance
            .checked_mul(percent_to_fraction(inputs.risk_percent_of_account)),
    }
}

/// Size a position against `risk_dollars`.
///
/// `dca_percent` is `None` when DCA is disabled. `risk_per_unit` must be
/// non-zero.
///
/// RiskScaledByDca: `total = risk × dca% / risk_per_unit` (full risk when
/// DCA is off).
/// SplitFullRisk: `total = risk / risk_per_unit`.
///
/// Either way the total is then split `entry = total × (1 − dca%)`,
/// `dca = total × dca%`. Returns `None` when the unit count overflows.
pub fn size_position(
    policy: SizingPolicy,
    risk_dollars: Decimal,
    risk_per_unit: Decimal,
    dca_percent: Option<Decimal>,
) -> Option<PositionSizing> {
    assert!(!risk_per_unit.is_zero(), "Risk per unit must be non-zero");

    let dca_fraction = dca_percent.map(percent_to_fraction).unwrap_or(Decimal::ZERO);
    let entry_fraction = Decimal::ONE - dca_fraction;

    let sized_risk_dollars = match (policy, dca_percent) {
        (SizingPolicy::RiskScaledByDca, Some(_)) => risk_dollars.checked_mul(dca_fraction)?,
        (SizingPolicy::RiskScaledByDca, None) | (SizingPolicy::SplitFullRisk, _) => risk_dollars,
    };

    let total_units = sized_risk_dollars.checked_div(risk_per_unit)?;
    let entry_leg_units = total_units.checked_mul(entry_fraction)?;
    let dca_leg_units = total_units.checked_mul(dca_fraction)?;

    let effective_risk_dollars = match policy {
        SizingPolicy::RiskScaledByDca => sized_risk_dollars,
        SizingPolicy::SplitFullRisk => entry_leg_units.checked_mul(risk_per_unit)?,
    };

    Some(PositionSizing {
        total_units,
        entry_leg_units,
        dca_leg_units,
        sized_risk_dollars,
        effective_risk_dollars,
    })
}

/// `units × price`, `None` on overflow.
pub fn notional(units: Decimal, price: Decimal) -> Option<Decimal> {
    units.checked_mul(price)
}

/// `notional / leverage`; leverage must be at least 1.
pub fn margin(notional: Decimal, leverage: u32) -> Option<Decimal> {
    assert!(leverage >= 1, "Leverage must be at least 1");
    notional.checked_div(Decimal::from(leverage))
}
