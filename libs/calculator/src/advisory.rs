//! Advisory classification
//!
//! Rules, in evaluation order:
//!
//! | Rule                                  | Advisory               |
//! |---------------------------------------|------------------------|
//! | stop→liquidation < proximity limit    | `LiquidationNearStop`  |
//! | account risk > max account risk       | `ExcessiveAccountRisk` |
//! | R:R < weak                            | `WeakRiskReward`       |
//! | R:R ≥ strong                          | `StrongSetup`          |
//! | weak ≤ R:R < strong                   | `DecentSetup`          |
//! | nothing above fired                   | `BalancedSetup`        |

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::risk::Advisory;

/// How many advisories a calculation reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryMode {
    /// Every rule that fires
    #[default]
    Cumulative,
    /// Only the first rule that fires
    FirstMatch,
}

/// Classification thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisoryThresholds {
    /// Stop→liquidation distance (%) below which the stop is at risk
    pub liquidation_proximity_percent: Decimal,
    /// Share of the account (%) above which risk is excessive
    pub max_account_risk_percent: Decimal,
    /// R:R below this is weak
    pub weak_risk_reward: Decimal,
    /// R:R at or above this is strong
    pub strong_risk_reward: Decimal,
}

impl Default for AdvisoryThresholds {
    fn default() -> Self {
        Self {
            liquidation_proximity_percent: Decimal::ONE,
            max_account_risk_percent: Decimal::TWO,
            weak_risk_reward: Decimal::TWO,
            strong_risk_reward: Decimal::from(3),
        }
    }
}

/// Metrics the rules look at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvisorySignals {
    pub stop_to_liquidation_percent: Decimal,
    pub account_risk_percent: Option<Decimal>,
    pub risk_reward_ratio: Option<Decimal>,
}

/// Classify a setup. Never returns an empty list.
pub fn classify(
    signals: &AdvisorySignals,
    mode: AdvisoryMode,
    thresholds: &AdvisoryThresholds,
) -> Vec<Advisory> {
    let mut fired = Vec::new();

    if signals.stop_to_liquidation_percent < thresholds.liquidation_proximity_percent {
        fired.push(Advisory::LiquidationNearStop);
    }

    if signals
        .account_risk_percent
        .is_some_and(|pct| pct > thresholds.max_account_risk_percent)
    {
        fired.push(Advisory::ExcessiveAccountRisk);
    }

    if let Some(rr) = signals.risk_reward_ratio {
        if rr < thresholds.weak_risk_reward {
            fired.push(Advisory::WeakRiskReward);
        } else if rr >= thresholds.strong_risk_reward {
            fired.push(Advisory::StrongSetup);
        } else {
            fired.push(Advisory::DecentSetup);
        }
    }

    if fired.is_empty() {
        fired.push(Advisory::BalancedSetup);
    }

    if mode == AdvisoryMode::FirstMatch {
        fired.truncate(1);
    }

    fired
}
