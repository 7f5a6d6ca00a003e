//! Error types for the risk calculator
//!
//! Two tiers: `ParseError` for raw form text the shell cannot turn into a
//! number, and `InvalidInputError` for well-formed inputs the calculator
//! rejects.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reason a set of trade inputs was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvalidInputKind {
    /// Entry and stop are the same price
    ZeroRiskDistance,
    /// Leverage below 1x
    InvalidLeverage,
    /// Resolved dollar risk is zero or negative
    NonPositiveRisk,
    /// A price or the account balance is out of range
    InvalidPrice,
    /// Desired risk:reward is zero or negative
    InvalidRiskReward,
    /// Percent-of-account risk outside `[0, 100]`
    RiskPercentOutOfRange,
    /// A derived figure exceeds the representable decimal range
    NumericOverflow,
}

/// Domain validation failure raised by the calculator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct InvalidInputError {
    pub kind: InvalidInputKind,
    pub message: String,
}

impl InvalidInputError {
    pub fn new(kind: InvalidInputKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn zero_risk_distance() -> Self {
        Self::new(
            InvalidInputKind::ZeroRiskDistance,
            "Entry and stop-loss cannot be identical",
        )
    }

    pub fn invalid_leverage(leverage: u32) -> Self {
        Self::new(
            InvalidInputKind::InvalidLeverage,
            format!("Leverage must be at least 1x, got {}x", leverage),
        )
    }

    pub fn non_positive_risk(resolved: impl std::fmt::Display) -> Self {
        Self::new(
            InvalidInputKind::NonPositiveRisk,
            format!("Risk amount must be positive, resolved to {}", resolved),
        )
    }

    pub fn invalid_price(field: &str, value: impl std::fmt::Display) -> Self {
        Self::new(
            InvalidInputKind::InvalidPrice,
            format!("Invalid {}: {}", field, value),
        )
    }

    pub fn invalid_risk_reward(value: impl std::fmt::Display) -> Self {
        Self::new(
            InvalidInputKind::InvalidRiskReward,
            format!("Desired risk:reward must be positive, got {}", value),
        )
    }

    pub fn risk_percent_out_of_range(value: impl std::fmt::Display) -> Self {
        Self::new(
            InvalidInputKind::RiskPercentOutOfRange,
            format!("Risk percent of account must be within 0-100, got {}", value),
        )
    }

    pub fn numeric_overflow(quantity: &str) -> Self {
        Self::new(
            InvalidInputKind::NumericOverflow,
            format!("Inputs are too extreme to compute {}", quantity),
        )
    }
}

/// Raw field text that could not be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Cannot parse {field}: {value:?}")]
pub struct ParseError {
    pub field: String,
    pub value: String,
}

impl ParseError {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}
