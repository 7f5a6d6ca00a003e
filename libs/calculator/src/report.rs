//! Display report
//!
//! Fixed-precision strings for every metric so each shell renders the same
//! figures: units and prices at 8 dp, USD and percentages at 2 dp, all
//! rounded HALF_UP.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::numeric::{round_half_up, PRICE_DP, USD_DP};
use types::risk::{Advisory, Severity, TradeMetrics};

/// One rendered advisory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisoryLine {
    pub advisory: Advisory,
    pub severity: Severity,
    pub message: String,
}

/// Rendered metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeReport {
    pub position_size: String,
    pub entry_leg: String,
    pub dca_leg: String,
    pub liquidation_price: String,
    pub target_price: Option<String>,
    pub risk_reward: Option<String>,
    pub margin_required: String,
    pub margin_entry_leg: String,
    pub margin_dca_leg: String,
    pub account_risk: Option<String>,
    pub entry_to_stop: String,
    pub entry_to_liquidation: String,
    pub stop_to_liquidation: String,
    pub dca_note: String,
    pub advisories: Vec<AdvisoryLine>,
}

pub fn render(metrics: &TradeMetrics) -> TradeReport {
    TradeReport {
        position_size: units_with_notional(metrics.total_position_units, metrics.total_notional_usd),
        entry_leg: units_with_notional(metrics.entry_leg_units, metrics.entry_notional_usd),
        dca_leg: units_with_notional(metrics.dca_leg_units, metrics.dca_notional_usd),
        liquidation_price: price(metrics.liquidation_price),
        target_price: metrics.target_price.map(price),
        risk_reward: metrics
            .risk_reward_ratio
            .map(|rr| format!("1 : {:.2}", round_half_up(rr, USD_DP))),
        margin_required: usd(metrics.margin_required_full),
        margin_entry_leg: usd(metrics.margin_required_entry_leg),
        margin_dca_leg: usd(metrics.margin_required_dca_leg),
        account_risk: metrics.account_risk_percent.map(percent),
        entry_to_stop: percent(metrics.entry_to_stop_percent),
        entry_to_liquidation: percent(metrics.entry_to_liquidation_percent),
        stop_to_liquidation: percent(metrics.stop_to_liquidation_percent),
        dca_note: dca_note(metrics.dca_percent_applied),
        advisories: metrics
            .advisories
            .iter()
            .map(|a| AdvisoryLine {
                advisory: *a,
                severity: a.severity(),
                message: a.message().to_string(),
            })
            .collect(),
    }
}

fn price(v: Decimal) -> String {
    format!("{:.8}", round_half_up(v, PRICE_DP))
}

fn usd(v: Decimal) -> String {
    format!("${:.2}", round_half_up(v, USD_DP))
}

fn percent(v: Decimal) -> String {
    format!("{:.2}%", round_half_up(v, USD_DP))
}

fn units_with_notional(units: Decimal, notional: Decimal) -> String {
    format!("{} units (~{})", price(units), usd(notional))
}

fn dca_note(dca_percent: Decimal) -> String {
    if dca_percent.is_zero() {
        "DCA disabled: full size at entry".to_string()
    } else {
        format!("DCA active: {}% of the planned size reserved", dca_percent.normalize())
    }
}
