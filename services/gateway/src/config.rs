//! Service configuration
//!
//! Read once at startup from the environment:
//!
//! - `GATEWAY_BIND_ADDR` (default `0.0.0.0:8080`)
//! - `CALCULATOR_ADVISORY_MODE`: `cumulative` | `first_match`
//! - `CALCULATOR_SIZING_POLICY`: `split_full_risk` | `risk_scaled_by_dca`,
//!   used when a request does not name one
//! - `CALCULATOR_LIQUIDATION_PROXIMITY_PCT`, `CALCULATOR_MAX_ACCOUNT_RISK_PCT`,
//!   `CALCULATOR_WEAK_RR`, `CALCULATOR_STRONG_RR`: advisory thresholds

use calculator::{AdvisoryMode, AdvisoryThresholds, CalculatorConfig};
use rust_decimal::Decimal;
use std::net::SocketAddr;
use std::str::FromStr;
use thiserror::Error;
use types::trade::SizingPolicy;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Weak risk:reward threshold {weak} exceeds strong threshold {strong}")]
    InvertedRiskReward { weak: Decimal, strong: Decimal },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub calculator: CalculatorConfig,
    pub default_sizing_policy: SizingPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            calculator: CalculatorConfig::default(),
            default_sizing_policy: SizingPolicy::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let default_thresholds = AdvisoryThresholds::default();

        let bind_addr = parse_or("GATEWAY_BIND_ADDR", &lookup, defaults.bind_addr, |v| {
            SocketAddr::from_str(v).ok()
        })?;

        let advisory_mode = parse_or(
            "CALCULATOR_ADVISORY_MODE",
            &lookup,
            AdvisoryMode::default(),
            parse_advisory_mode,
        )?;

        let default_sizing_policy = parse_or(
            "CALCULATOR_SIZING_POLICY",
            &lookup,
            defaults.default_sizing_policy,
            parse_sizing_policy,
        )?;

        let thresholds = AdvisoryThresholds {
            liquidation_proximity_percent: parse_or(
                "CALCULATOR_LIQUIDATION_PROXIMITY_PCT",
                &lookup,
                default_thresholds.liquidation_proximity_percent,
                parse_non_negative,
            )?,
            max_account_risk_percent: parse_or(
                "CALCULATOR_MAX_ACCOUNT_RISK_PCT",
                &lookup,
                default_thresholds.max_account_risk_percent,
                parse_non_negative,
            )?,
            weak_risk_reward: parse_or(
                "CALCULATOR_WEAK_RR",
                &lookup,
                default_thresholds.weak_risk_reward,
                parse_non_negative,
            )?,
            strong_risk_reward: parse_or(
                "CALCULATOR_STRONG_RR",
                &lookup,
                default_thresholds.strong_risk_reward,
                parse_non_negative,
            )?,
        };

        if thresholds.weak_risk_reward > thresholds.strong_risk_reward {
            return Err(ConfigError::InvertedRiskReward {
                weak: thresholds.weak_risk_reward,
                strong: thresholds.strong_risk_reward,
            });
        }

        Ok(Self {
            bind_addr,
            calculator: CalculatorConfig {
                advisory_mode,
                thresholds,
            },
            default_sizing_policy,
        })
    }
}

pub fn parse_sizing_policy(raw: &str) -> Option<SizingPolicy> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "split_full_risk" | "split" | "b" => Some(SizingPolicy::SplitFullRisk),
        "risk_scaled_by_dca" | "scaled" | "a" => Some(SizingPolicy::RiskScaledByDca),
        _ => None,
    }
}

fn parse_advisory_mode(raw: &str) -> Option<AdvisoryMode> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "cumulative" => Some(AdvisoryMode::Cumulative),
        "first_match" => Some(AdvisoryMode::FirstMatch),
        _ => None,
    }
}

fn parse_non_negative(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim())
        .ok()
        .filter(|v| *v >= Decimal::ZERO)
}

fn parse_or<T, F, P>(key: &'static str, lookup: &F, default: T, parse: P) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Option<T>,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => parse(&value).ok_or(ConfigError::InvalidValue { key, value }),
    }
}
