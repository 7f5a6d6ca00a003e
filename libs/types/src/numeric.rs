//! Fixed-point decimal helpers
//!
//! Uses rust_decimal for deterministic arithmetic (no floating-point errors).
//! Display rounding is HALF_UP (midpoint away from zero).

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Display precision for prices and unit counts (8 dp).
pub const PRICE_DP: u32 = 8;

/// Display precision for USD amounts and percentages (2 dp).
pub const USD_DP: u32 = 2;

/// `100`, the percent scale.
pub const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Clamp a percentage into `[0, 100]`.
///
/// Out-of-range values are pulled to the nearest bound instead of rejected,
/// so a slider overshoot still produces a usable value.
pub fn clamp_percent(value: Decimal) -> Decimal {
    value.clamp(Decimal::ZERO, HUNDRED)
}

/// `value` as a fraction of one (`50` -> `0.5`).
pub fn percent_to_fraction(percent: Decimal) -> Decimal {
    percent / HUNDRED
}

/// `part / whole × 100`, or `None` when `whole` is zero or the result
/// overflows.
pub fn percent_of(part: Decimal, whole: Decimal) -> Option<Decimal> {
    part.checked_div(whole)?.checked_mul(HUNDRED)
}

/// Round HALF_UP to `dp` decimal places.
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}
