//! Risk calculation pipeline
//!
//! `RiskCalculator::compute` validates a `TradeInputs` snapshot and derives
//! every metric in one pass:
//!
//! 1. Resolve dollar risk (percent-of-account or fixed amount)
//! 2. Risk per unit `|entry − stop|`
//! 3. Resolve the target (explicit, or derived from a desired R:R)
//! 4. Size the position and split it into entry / DCA legs
//! 5. Notional and margin per leg
//! 6. Liquidation estimate
//! 7. Risk:reward
//! 8. Account risk
//! 9. Price distances
//! 10. Advisories
//!
//! The calculator holds configuration only; it keeps no state between
//! calls, so identical inputs always yield identical metrics.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use types::errors::InvalidInputError;
use types::numeric::{percent_of, HUNDRED};
use types::risk::TradeMetrics;
use types::trade::{RiskMode, TargetSpec, TradeInputs};

use crate::advisory::{self, AdvisoryMode, AdvisorySignals, AdvisoryThresholds};
use crate::liquidation;
use crate::sizing;

/// Calculator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalculatorConfig {
    #[serde(default)]
    pub advisory_mode: AdvisoryMode,
    #[serde(default)]
    pub thresholds: AdvisoryThresholds,
}

/// Stateless risk calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskCalculator {
    config: CalculatorConfig,
}

impl RiskCalculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Derive all metrics for `inputs`.
    ///
    /// Fails with `InvalidInputError` when entry equals stop (checked first),
    /// a price is out of range, leverage is below 1, the percent-of-account
    /// risk is above 100, the resolved risk is not positive, or a derived
    /// figure does not fit in a `Decimal`.
    pub fn compute(&self, inputs: &TradeInputs) -> Result<TradeMetrics, InvalidInputError> {
        let distance = inputs.entry_price.checked_sub(inputs.stop_price);
        if distance.is_some_and(|d| d.is_zero()) {
            return Err(reject(InvalidInputError::zero_risk_distance()));
        }

        validate(inputs)?;

        let risk_per_unit = distance.map(|d| d.abs()).ok_or_else(|| overflow("risk per unit"))?;

        let resolved_risk_dollars =
            sizing::resolve_risk_dollars(inputs).ok_or_else(|| overflow("dollar risk"))?;
        if resolved_risk_dollars <= Decimal::ZERO {
            return Err(reject(InvalidInputError::non_positive_risk(resolved_risk_dollars)));
        }

        let target_price = resolve_target(inputs, risk_per_unit)?;

        // Sizing
        let dca_percent = inputs.dca_enabled.then(|| inputs.effective_dca_percent());
        let sizing = sizing::size_position(
            inputs.sizing_policy,
            resolved_risk_dollars,
            risk_per_unit,
            dca_percent,
        )
        .ok_or_else(|| overflow("position size"))?;

        // Notional & margin
        let entry = inputs.entry_price;
        let notional = |units| sizing::notional(units, entry).ok_or_else(|| overflow("notional"));
        let total_notional_usd = notional(sizing.total_units)?;
        let entry_notional_usd = notional(sizing.entry_leg_units)?;
        let dca_notional_usd = notional(sizing.dca_leg_units)?;

        let margin =
            |usd| sizing::margin(usd, inputs.leverage).ok_or_else(|| overflow("margin"));
        let margin_required_full = margin(total_notional_usd)?;
        let margin_required_entry_leg = margin(entry_notional_usd)?;
        let margin_required_dca_leg = margin(dca_notional_usd)?;

        let liquidation_price = liquidation::liquidation_price(inputs.side, entry, inputs.leverage)
            .ok_or_else(|| overflow("liquidation price"))?;

        let risk_reward_ratio = match target_price {
            Some(target) => {
                let reward = target
                    .checked_sub(entry)
                    .ok_or_else(|| overflow("risk:reward"))?
                    .abs();
                if reward.is_zero() {
                    None
                } else {
                    Some(reward.checked_div(risk_per_unit).ok_or_else(|| overflow("risk:reward"))?)
                }
            }
            None => None,
        };

        let account_risk_percent = if inputs.account_balance > Decimal::ZERO {
            Some(
                percent_of(sizing.sized_risk_dollars, inputs.account_balance)
                    .ok_or_else(|| overflow("account risk"))?,
            )
        } else {
            None
        };

        let distance_pct = |reference, other| {
            liquidation::distance_percent(reference, other)
                .ok_or_else(|| overflow("price distance"))
        };
        let entry_to_stop_percent = distance_pct(entry, inputs.stop_price)?;
        let entry_to_liquidation_percent = distance_pct(entry, liquidation_price)?;
        let stop_to_liquidation_percent = distance_pct(inputs.stop_price, liquidation_price)?;

        let advisories = advisory::classify(
            &AdvisorySignals {
                stop_to_liquidation_percent,
                account_risk_percent,
                risk_reward_ratio,
            },
            self.config.advisory_mode,
            &self.config.thresholds,
        );

        debug!(
            side = ?inputs.side,
            policy = ?inputs.sizing_policy,
            %risk_per_unit,
            total_units = %sizing.total_units,
            %liquidation_price,
            ?advisories,
            "computed trade metrics"
        );

        Ok(TradeMetrics {
            sizing_policy: inputs.sizing_policy,
            resolved_risk_dollars,
            risk_per_unit,
            effective_risk_dollars: sizing.effective_risk_dollars,
            dca_percent_applied: inputs.effective_dca_percent(),
            total_position_units: sizing.total_units,
            entry_leg_units: sizing.entry_leg_units,
            dca_leg_units: sizing.dca_leg_units,
            total_notional_usd,
            entry_notional_usd,
            dca_notional_usd,
            margin_required_full,
            margin_required_entry_leg,
            margin_required_dca_leg,
            liquidation_price,
            target_price,
            risk_reward_ratio,
            account_risk_percent,
            entry_to_stop_percent,
            entry_to_liquidation_percent,
            stop_to_liquidation_percent,
            advisories,
        })
    }
}

/// Compute with the default configuration (cumulative advisories, default
/// thresholds).
pub fn compute(inputs: &TradeInputs) -> Result<TradeMetrics, InvalidInputError> {
    RiskCalculator::default().compute(inputs)
}

/// Range checks on prices, leverage, balance and percent risk.
fn validate(inputs: &TradeInputs) -> Result<(), InvalidInputError> {
    if inputs.entry_price <= Decimal::ZERO {
        return Err(reject(InvalidInputError::invalid_price("entry price", inputs.entry_price)));
    }
    if inputs.stop_price <= Decimal::ZERO {
        return Err(reject(InvalidInputError::invalid_price("stop price", inputs.stop_price)));
    }
    if let Some(TargetSpec::Price(target)) = inputs.target {
        if target < Decimal::ZERO {
            return Err(reject(InvalidInputError::invalid_price("target price", target)));
        }
    }
    if inputs.leverage < 1 {
        return Err(reject(InvalidInputError::invalid_leverage(inputs.leverage)));
    }
    if inputs.account_balance < Decimal::ZERO {
        return Err(reject(InvalidInputError::invalid_price(
            "account balance",
            inputs.account_balance,
        )));
    }
    if inputs.risk_mode == RiskMode::PercentOfAccount
        && inputs.risk_percent_of_account > HUNDRED
    {
        return Err(reject(InvalidInputError::risk_percent_out_of_range(
            inputs.risk_percent_of_account,
        )));
    }
    Ok(())
}

/// Explicit target, or `entry + sign(side) × desired_rr × risk_per_unit`.
fn resolve_target(
    inputs: &TradeInputs,
    risk_per_unit: Decimal,
) -> Result<Option<Decimal>, InvalidInputError> {
    match inputs.target {
        None => Ok(None),
        Some(TargetSpec::Price(target)) => Ok(Some(target)),
        Some(TargetSpec::RiskReward(desired)) => {
            if desired <= Decimal::ZERO {
                return Err(reject(InvalidInputError::invalid_risk_reward(desired)));
            }
            let target = inputs
                .side
                .sign()
                .checked_mul(desired)
                .and_then(|offset| offset.checked_mul(risk_per_unit))
                .and_then(|offset| inputs.entry_price.checked_add(offset))
                .ok_or_else(|| overflow("derived target price"))?;
            if target < Decimal::ZERO {
                return Err(reject(InvalidInputError::invalid_price("derived target price", target)));
            }
            Ok(Some(target))
        }
    }
}

fn reject(err: InvalidInputError) -> InvalidInputError {
    debug!(kind = ?err.kind, "rejected trade inputs: {}", err);
    err
}

fn overflow(quantity: &str) -> InvalidInputError {
    reject(InvalidInputError::numeric_overflow(quantity))
}
