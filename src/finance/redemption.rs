//! Redemption value calculation

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const DAYS_PER_YEAR: Decimal = dec!(365);

/// Principal plus simple (non-compounding) interest prorated over the lock
/// duration: `amount + amount * (rate/100) * (days/365)`. Non-positive
/// amounts redeem for the 0 sentinel.
pub fn redemption_value(
    amount: Decimal,
    annual_rate_pct: Decimal,
    time_locked_days: Decimal,
) -> Decimal {
    if amount <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let time_factor = time_locked_days / DAYS_PER_YEAR;
    amount + amount * (annual_rate_pct / dec!(100)) * time_factor
}

/// Interest portion of a redemption: `redemption_value - amount`, 0 for
/// non-positive amounts.
pub fn yield_earned(
    amount: Decimal,
    annual_rate_pct: Decimal,
    time_locked_days: Decimal,
) -> Decimal {
    if amount <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    redemption_value(amount, annual_rate_pct, time_locked_days) - amount
}
