//! Trade parameter types
//!
//! A `TradeInputs` value is the full snapshot of what the trader entered.
//! It is built fresh for every recalculation and never mutated afterwards.

use crate::numeric::clamp_percent;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of the planned position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Profits when price rises; stop sits below entry
    Long,
    /// Profits when price falls; stop sits above entry
    Short,
}

impl Side {
    /// `+1` for Long, `-1` for Short.
    pub fn sign(&self) -> Decimal {
        match self {
            Side::Long => Decimal::ONE,
            Side::Short => Decimal::NEGATIVE_ONE,
        }
    }
}

/// How the risk budget is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskMode {
    /// `risk_dollar_amount` is used as-is
    DollarAmount,
    /// `risk_percent_of_account` of `account_balance`
    PercentOfAccount,
}

/// How the DCA percentage feeds into position size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizingPolicy {
    /// Only the DCA fraction of the risk budget is sized
    RiskScaledByDca,
    /// The full risk budget sizes the total position; DCA only splits it
    #[default]
    SplitFullRisk,
}

/// Where the take-profit comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "value")]
pub enum TargetSpec {
    /// Explicit target price
    Price(Decimal),
    /// Target derived from a desired risk:reward multiple
    RiskReward(Decimal),
}

/// Snapshot of everything the trader entered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeInputs {
    pub side: Side,
    pub entry_price: Decimal,
    pub stop_price: Decimal,
    pub target: Option<TargetSpec>,
    pub leverage: u32,
    pub risk_mode: RiskMode,
    pub risk_dollar_amount: Decimal,
    pub risk_percent_of_account: Decimal,
    pub account_balance: Decimal,
    pub dca_enabled: bool,
    pub dca_percent: Decimal,
    #[serde(default)]
    pub sizing_policy: SizingPolicy,
}

impl TradeInputs {
    /// Start from the mandatory fields. Risk defaults to zero dollars, DCA
    /// off, no target, no account balance.
    pub fn new(side: Side, entry_price: Decimal, stop_price: Decimal, leverage: u32) -> Self {
        Self {
            side,
            entry_price,
            stop_price,
            target: None,
            leverage,
            risk_mode: RiskMode::DollarAmount,
            risk_dollar_amount: Decimal::ZERO,
            risk_percent_of_account: Decimal::ZERO,
            account_balance: Decimal::ZERO,
            dca_enabled: false,
            dca_percent: Decimal::ZERO,
            sizing_policy: SizingPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_target_price(mut self, target: Decimal) -> Self {
        self.target = Some(TargetSpec::Price(target));
        self
    }

    #[must_use]
    pub fn with_risk_reward(mut self, desired: Decimal) -> Self {
        self.target = Some(TargetSpec::RiskReward(desired));
        self
    }

    #[must_use]
    pub fn with_risk_dollars(mut self, amount: Decimal) -> Self {
        self.risk_mode = RiskMode::DollarAmount;
        self.risk_dollar_amount = amount;
        self
    }

    #[must_use]
    pub fn with_risk_percent(mut self, percent: Decimal) -> Self {
        self.risk_mode = RiskMode::PercentOfAccount;
        self.risk_percent_of_account = percent;
        self
    }

    #[must_use]
    pub fn with_account_balance(mut self, balance: Decimal) -> Self {
        self.account_balance = balance;
        self
    }

    /// Enable DCA with `percent` of the planned size reserved (clamped).
    #[must_use]
    pub fn with_dca(mut self, percent: Decimal) -> Self {
        self.dca_enabled = true;
        self.dca_percent = clamp_percent(percent);
        self
    }

    #[must_use]
    pub fn with_sizing_policy(mut self, policy: SizingPolicy) -> Self {
        self.sizing_policy = policy;
        self
    }

    /// DCA percent actually applied: clamped, and zero when DCA is off.
    pub fn effective_dca_percent(&self) -> Decimal {
        if self.dca_enabled {
            clamp_percent(self.dca_percent)
        } else {
            Decimal::ZERO
        }
    }
}
