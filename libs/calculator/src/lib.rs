//! Calculator: leveraged position risk engine
//!
//! Provides deterministic computation for:
//! - Position sizing from a dollar or percent-of-account risk budget
//! - DCA leg split (immediate entry vs reserved fill)
//! - Notional, margin and an approximate liquidation price
//! - Risk:reward, account risk and price distances
//! - Advisory classification of the setup
//!
//! # Determinism
//! All functions are pure: no system time, no RNG, no external calls.
//! Uses `Decimal` (fixed-point) throughout.

pub mod advisory;
pub mod engine;
pub mod liquidation;
pub mod report;
pub mod sizing;

pub use advisory::{AdvisoryMode, AdvisoryThresholds};
pub use engine::{compute, CalculatorConfig, RiskCalculator};
pub use report::{render, TradeReport};

/// Crate version constant
pub const CALCULATOR_VERSION: &str = "1.0.0";
