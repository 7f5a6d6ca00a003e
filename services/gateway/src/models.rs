//! Wire models for the calculator form
//!
//! The form arrives as raw text, exactly as typed into the UI. Parsing it
//! into `TradeInputs` is the shell's job; the calculator only ever sees
//! well-formed numbers.

use calculator::TradeReport;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use types::errors::ParseError;
use types::numeric::clamp_percent;
use types::risk::TradeMetrics;
use types::trade::{RiskMode, Side, SizingPolicy, TargetSpec, TradeInputs};
use uuid::Uuid;

use crate::config::parse_sizing_policy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorForm {
    pub side: String,
    pub entry_price: String,
    pub stop_price: String,
    #[serde(default)]
    pub target_price: Option<String>,
    #[serde(default)]
    pub desired_risk_reward: Option<String>,
    pub leverage: String,
    #[serde(default = "default_risk_mode")]
    pub risk_mode: String,
    /// Dollars or percent of account, depending on `risk_mode`
    pub risk_amount: String,
    #[serde(default)]
    pub account_balance: Option<String>,
    #[serde(default)]
    pub dca_enabled: bool,
    #[serde(default)]
    pub dca_percent: Option<String>,
    #[serde(default)]
    pub sizing_policy: Option<String>,
}

fn default_risk_mode() -> String {
    "dollar_amount".to_string()
}

impl Default for CalculatorForm {
    /// Form values a fresh calculator page starts with.
    fn default() -> Self {
        Self {
            side: "long".to_string(),
            entry_price: "0.0000105".to_string(),
            stop_price: "0.0000095".to_string(),
            target_price: Some("0.0000115".to_string()),
            desired_risk_reward: None,
            leverage: "20".to_string(),
            risk_mode: default_risk_mode(),
            risk_amount: "100".to_string(),
            account_balance: Some("5000".to_string()),
            dca_enabled: true,
            dca_percent: Some("50".to_string()),
            sizing_policy: None,
        }
    }
}

impl CalculatorForm {
    /// Parse every field. An explicit target wins over a desired R:R; blank
    /// optional fields count as absent. DCA percent is clamped to `[0, 100]`.
    pub fn into_inputs(self, default_policy: SizingPolicy) -> Result<TradeInputs, ParseError> {
        let side = parse_side(&self.side)?;
        let entry_price = parse_decimal("entry_price", &self.entry_price)?;
        let stop_price = parse_decimal("stop_price", &self.stop_price)?;

        let leverage = self
            .leverage
            .trim()
            .parse::<u32>()
            .map_err(|_| ParseError::new("leverage", &self.leverage))?;

        let target = match (
            non_blank(self.target_price.as_deref()),
            non_blank(self.desired_risk_reward.as_deref()),
        ) {
            (Some(raw), _) => Some(TargetSpec::Price(parse_decimal("target_price", raw)?)),
            (None, Some(raw)) => Some(TargetSpec::RiskReward(parse_decimal(
                "desired_risk_reward",
                raw,
            )?)),
            (None, None) => None,
        };

        let risk_mode = parse_risk_mode(&self.risk_mode)?;
        let risk_amount = parse_decimal("risk_amount", &self.risk_amount)?;

        let account_balance = match non_blank(self.account_balance.as_deref()) {
            Some(raw) => parse_decimal("account_balance", raw)?,
            None => Decimal::ZERO,
        };

        let dca_percent = match non_blank(self.dca_percent.as_deref()) {
            Some(raw) => clamp_percent(parse_decimal("dca_percent", raw)?),
            None => Decimal::ZERO,
        };

        let sizing_policy = match non_blank(self.sizing_policy.as_deref()) {
            Some(raw) => {
                parse_sizing_policy(raw).ok_or_else(|| ParseError::new("sizing_policy", raw))?
            }
            None => default_policy,
        };

        let (risk_dollar_amount, risk_percent_of_account) = match risk_mode {
            RiskMode::DollarAmount => (risk_amount, Decimal::ZERO),
            RiskMode::PercentOfAccount => (Decimal::ZERO, risk_amount),
        };

        Ok(TradeInputs {
            side,
            entry_price,
            stop_price,
            target,
            leverage,
            risk_mode,
            risk_dollar_amount,
            risk_percent_of_account,
            account_balance,
            dca_enabled: self.dca_enabled,
            dca_percent,
            sizing_policy,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CalculationResponse {
    pub calculation_id: Uuid,
    pub metrics: TradeMetrics,
    pub report: TradeReport,
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_decimal(field: &str, raw: &str) -> Result<Decimal, ParseError> {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| ParseError::new(field, raw))
}

fn parse_side(raw: &str) -> Result<Side, ParseError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "long" => Ok(Side::Long),
        "short" => Ok(Side::Short),
        _ => Err(ParseError::new("side", raw)),
    }
}

fn parse_risk_mode(raw: &str) -> Result<RiskMode, ParseError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "dollar_amount" | "dollar" | "usd" => Ok(RiskMode::DollarAmount),
        "percent_of_account" | "percent" => Ok(RiskMode::PercentOfAccount),
        _ => Err(ParseError::new("risk_mode", raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn form() -> CalculatorForm {
        CalculatorForm {
            side: "Long".to_string(),
            entry_price: "100".to_string(),
            stop_price: " 90 ".to_string(),
            target_price: Some("130".to_string()),
            desired_risk_reward: None,
            leverage: "10".to_string(),
            risk_mode: "dollar_amount".to_string(),
            risk_amount: "100".to_string(),
            account_balance: Some("5000".to_string()),
            dca_enabled: false,
            dca_percent: None,
            sizing_policy: None,
        }
    }

    #[test]
    fn test_parses_well_formed_form() {
        let inputs = form().into_inputs(SizingPolicy::SplitFullRisk).unwrap();
        assert_eq!(inputs.side, Side::Long);
        assert_eq!(inputs.stop_price, dec("90"));
        assert_eq!(inputs.target, Some(TargetSpec::Price(dec("130"))));
        assert_eq!(inputs.risk_dollar_amount, dec("100"));
        assert_eq!(inputs.account_balance, dec("5000"));
    }

    #[test]
    fn test_malformed_price_names_field() {
        let mut f = form();
        f.entry_price = "1O0".to_string();
        let err = f.into_inputs(SizingPolicy::SplitFullRisk).unwrap_err();
        assert_eq!(err.field, "entry_price");
        assert_eq!(err.value, "1O0");
    }

    #[test]
    fn test_negative_leverage_is_parse_error() {
        let mut f = form();
        f.leverage = "-2".to_string();
        let err = f.into_inputs(SizingPolicy::SplitFullRisk).unwrap_err();
        assert_eq!(err.field, "leverage");
    }

    #[test]
    fn test_dca_percent_clamped() {
        let mut f = form();
        f.dca_enabled = true;
        f.dca_percent = Some("135".to_string());
        let inputs = f.into_inputs(SizingPolicy::SplitFullRisk).unwrap();
        assert_eq!(inputs.dca_percent, Decimal::ONE_HUNDRED);
    }

    #[test]
    fn test_blank_target_falls_back_to_risk_reward() {
        let mut f = form();
        f.target_price = Some("  ".to_string());
        f.desired_risk_reward = Some("2".to_string());
        let inputs = f.into_inputs(SizingPolicy::SplitFullRisk).unwrap();
        assert_eq!(inputs.target, Some(TargetSpec::RiskReward(dec("2"))));
    }

    #[test]
    fn test_percent_mode() {
        let mut f = form();
        f.risk_mode = "percent".to_string();
        f.risk_amount = "1.5".to_string();
        let inputs = f.into_inputs(SizingPolicy::SplitFullRisk).unwrap();
        assert_eq!(inputs.risk_mode, RiskMode::PercentOfAccount);
        assert_eq!(inputs.risk_percent_of_account, dec("1.5"));
    }

    #[test]
    fn test_sizing_policy_override_and_default() {
        let inputs = form().into_inputs(SizingPolicy::RiskScaledByDca).unwrap();
        assert_eq!(inputs.sizing_policy, SizingPolicy::RiskScaledByDca);

        let mut f = form();
        f.sizing_policy = Some("split_full_risk".to_string());
        let inputs = f.into_inputs(SizingPolicy::RiskScaledByDca).unwrap();
        assert_eq!(inputs.sizing_policy, SizingPolicy::SplitFullRisk);

        let mut f = form();
        f.sizing_policy = Some("martingale".to_string());
        assert!(f.into_inputs(SizingPolicy::SplitFullRisk).is_err());
    }

    #[test]
    fn test_scientific_notation_accepted() {
        let mut f = form();
        f.entry_price = "1.05e-5".to_string();
        f.stop_price = "9.5e-6".to_string();
        let inputs = f.into_inputs(SizingPolicy::SplitFullRisk).unwrap();
        assert_eq!(inputs.entry_price, dec("0.0000105"));
    }
}
