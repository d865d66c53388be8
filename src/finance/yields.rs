//! Yield rate derivation and projections
//!
//! One canonical rate model: the monthly rate is `annual/12`, the daily
//! rate `annual/365`, and earnings are `principal * rate / 100`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{DailyAccrual, YieldProjection};

/// Derives the monthly/daily rates from an annual percentage rate and
/// projects earnings at each horizon. Rates are derived regardless of the
/// principal; earnings use the 0 sentinel for a non-positive principal.
pub fn project_yield(principal: Decimal, annual_rate_pct: Decimal) -> YieldProjection {
    let monthly_rate_pct = annual_rate_pct / dec!(12);
    let daily_rate_pct = annual_rate_pct / dec!(365);
    let earning_base = principal.max(Decimal::ZERO);

    YieldProjection {
        principal,
        annual_rate_pct,
        monthly_rate_pct,
        daily_rate_pct,
        yearly_earnings: earning_base * annual_rate_pct / dec!(100),
        monthly_earnings: earning_base * monthly_rate_pct / dec!(100),
        daily_earnings: earning_base * daily_rate_pct / dec!(100),
    }
}

/// Cumulative yield trail for the last `days` days, oldest day first:
/// entry `days_ago = d` holds the interest accrued over `d` days.
/// Non-positive principal or a zero window yields an empty trail.
pub fn daily_accruals(principal: Decimal, annual_rate_pct: Decimal, days: u32) -> Vec<DailyAccrual> {
    if principal <= Decimal::ZERO || days == 0 {
        return Vec::new();
    }
    let daily_rate_pct = annual_rate_pct / dec!(365);
    (1..=days)
        .map(|days_ago| DailyAccrual {
            days_ago,
            amount: principal * daily_rate_pct * Decimal::from(days_ago) / dec!(100),
        })
        .collect()
}

/// Yield expressed as a percentage of principal, 0 when the principal is
/// non-positive.
pub fn yield_percentage(principal: Decimal, yield_earned: Decimal) -> Decimal {
    if principal <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    yield_earned / principal * dec!(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_derive_from_the_annual_rate() {
        let projection = project_yield(dec!(10000), dec!(4.2));
        assert_eq!(projection.monthly_rate_pct, dec!(0.35));
        assert_eq!(projection.daily_rate_pct.round_dp(6), dec!(0.011507));
    }

    #[test]
    fn earnings_scale_with_the_principal() {
        let projection = project_yield(dec!(10000), dec!(4.2));
        assert_eq!(projection.yearly_earnings, dec!(420));
        assert_eq!(projection.monthly_earnings, dec!(35));
        assert_eq!(projection.daily_earnings.round_dp(4), dec!(1.1507));
    }

    #[test]
    fn non_positive_principal_zeroes_earnings_but_keeps_rates() {
        let projection = project_yield(dec!(-100), dec!(4.2));
        assert_eq!(projection.principal, dec!(-100));
        assert_eq!(projection.yearly_earnings, Decimal::ZERO);
        assert_eq!(projection.monthly_earnings, Decimal::ZERO);
        assert_eq!(projection.daily_earnings, Decimal::ZERO);
        assert_eq!(projection.monthly_rate_pct, dec!(0.35));
    }

    #[test]
    fn accrual_trail_is_ascending_and_linear() {
        let trail = daily_accruals(dec!(1000), dec!(4.2), 7);
        assert_eq!(trail.len(), 7);
        assert_eq!(trail[0].days_ago, 1);
        assert_eq!(trail[6].days_ago, 7);
        assert_eq!(trail[0].amount.round_dp(6), dec!(0.115068));
        assert_eq!(trail[6].amount.round_dp(6), dec!(0.805479));
        // Seven days of accrual is seven times one day.
        assert_eq!(
            trail[6].amount.round_dp(10),
            (trail[0].amount * dec!(7)).round_dp(10)
        );
    }

    #[test]
    fn degenerate_trails_are_empty() {
        assert!(daily_accruals(dec!(0), dec!(4.2), 7).is_empty());
        assert!(daily_accruals(dec!(-10), dec!(4.2), 7).is_empty());
        assert!(daily_accruals(dec!(1000), dec!(4.2), 0).is_empty());
    }

    #[test]
    fn yield_percentage_guards_the_principal() {
        assert_eq!(yield_percentage(dec!(1000), dec!(42.5)), dec!(4.25));
        assert_eq!(yield_percentage(dec!(0), dec!(42.5)), Decimal::ZERO);
        assert_eq!(yield_percentage(dec!(-1), dec!(42.5)), Decimal::ZERO);
    }
}
