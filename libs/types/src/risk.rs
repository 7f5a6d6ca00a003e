//! Calculation output types
//!
//! `TradeMetrics` is the full derived result of one calculation, including
//! the advisories the calculator raised for it.

use crate::trade::SizingPolicy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Visual weight a shell should give an advisory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Success,
}

/// Advisory classification of a setup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Advisory {
    /// Liquidation sits so close to the stop that the stop may never fill
    LiquidationNearStop,
    /// Share of the account at risk exceeds the limit
    ExcessiveAccountRisk,
    /// Reward does not justify the risk
    WeakRiskReward,
    /// Reward comfortably outweighs the risk
    StrongSetup,
    /// Acceptable but unremarkable reward
    DecentSetup,
    /// Nothing else fired
    BalancedSetup,
}

impl Advisory {
    pub fn severity(&self) -> Severity {
        match self {
            Advisory::LiquidationNearStop => Severity::Warning,
            Advisory::ExcessiveAccountRisk => Severity::Warning,
            Advisory::WeakRiskReward => Severity::Info,
            Advisory::StrongSetup => Severity::Success,
            Advisory::DecentSetup => Severity::Warning,
            Advisory::BalancedSetup => Severity::Success,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Advisory::LiquidationNearStop => {
                "Liquidation is dangerously close to stop-loss, consider lowering leverage"
            }
            Advisory::ExcessiveAccountRisk => "Risk exceeds the account risk limit, high exposure",
            Advisory::WeakRiskReward => "Risk:reward is below the minimum, may not justify the risk",
            Advisory::StrongSetup => "Strong setup, reward well above risk",
            Advisory::DecentSetup => "Decent setup, risk:reward is acceptable",
            Advisory::BalancedSetup => "Setup looks balanced, manage risk responsibly",
        }
    }
}

/// Derived metrics for one set of trade inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeMetrics {
    pub sizing_policy: SizingPolicy,
    /// Dollar risk after resolving percent-of-account mode
    pub resolved_risk_dollars: Decimal,
    pub risk_per_unit: Decimal,
    /// Dollar risk exposed by the immediate entry fill
    pub effective_risk_dollars: Decimal,
    /// Clamped DCA percent, zero when DCA is disabled
    pub dca_percent_applied: Decimal,

    pub total_position_units: Decimal,
    pub entry_leg_units: Decimal,
    pub dca_leg_units: Decimal,

    pub total_notional_usd: Decimal,
    pub entry_notional_usd: Decimal,
    pub dca_notional_usd: Decimal,

    pub margin_required_full: Decimal,
    pub margin_required_entry_leg: Decimal,
    pub margin_required_dca_leg: Decimal,

    /// Single-factor approximation, not exchange accurate
    pub liquidation_price: Decimal,
    pub target_price: Option<Decimal>,
    pub risk_reward_ratio: Option<Decimal>,
    pub account_risk_percent: Option<Decimal>,

    pub entry_to_stop_percent: Decimal,
    pub entry_to_liquidation_percent: Decimal,
    pub stop_to_liquidation_percent: Decimal,

    pub advisories: Vec<Advisory>,
}

impl TradeMetrics {
    pub fn has_advisory(&self, advisory: Advisory) -> bool {
        self.advisories.contains(&advisory)
    }
}
