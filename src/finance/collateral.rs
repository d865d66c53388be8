//! Vault collateralization ratio

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// `(mbs_balance / bonds_locked) * 100`, with the 0 sentinel when no bonds
/// are locked. The raw ratio is unclamped and can exceed 100%.
pub fn collateralization_ratio(mbs_balance: Decimal, bonds_locked: Decimal) -> Decimal {
    if bonds_locked <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    mbs_balance / bonds_locked * dec!(100)
}

/// Display-bar width for a ratio, clamped to `[0, 100]`. Only the bar is
/// clamped; the numeric ratio keeps its raw value.
pub fn collateral_bar_fill(ratio: Decimal) -> Decimal {
    ratio.clamp(Decimal::ZERO, dec!(100))
}
