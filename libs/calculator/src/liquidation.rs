//! Liquidation estimate and price distances
//!
//! The liquidation price is a single-factor approximation: it ignores
//! maintenance margin, funding and fees, so a real exchange will liquidate
//! somewhat earlier than the price reported here.

use rust_decimal::Decimal;
use types::numeric::HUNDRED;
use types::trade::Side;

/// Estimate the liquidation price.
///
/// LONG:  `entry × (1 − 1/leverage)`
/// SHORT: `entry × (1 + 1/leverage)`
///
/// `None` when the short-side estimate overflows.
pub fn liquidation_price(side: Side, entry_price: Decimal, leverage: u32) -> Option<Decimal> {
    assert!(leverage >= 1, "Leverage must be at least 1");
    let lev_inv = Decimal::ONE / Decimal::from(leverage);
    match side {
        Side::Long => entry_price.checked_mul(Decimal::ONE - lev_inv),
        Side::Short => entry_price.checked_mul(Decimal::ONE + lev_inv),
    }
}

/// `|reference − other| / reference × 100`; `reference` must be non-zero.
pub fn distance_percent(reference: Decimal, other: Decimal) -> Option<Decimal> {
    assert!(!reference.is_zero(), "Reference price must be non-zero");
    reference
        .checked_sub(other)?
        .abs()
        .checked_div(reference)?
        .checked_mul(HUNDRED)
}
