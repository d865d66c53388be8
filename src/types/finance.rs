//! Financial derivation output types

use rust_decimal::Decimal;
use serde::Serialize;

/// One slice of the profit distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfitShare {
    pub id: String,
    pub label: String,
    pub value: Decimal,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A `ProfitShare` resolved against the distribution total: its percentage
/// of the whole and the pie arc it covers, in degrees from 12 o'clock.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionSegment {
    pub share: ProfitShare,
    pub percent: Decimal,
    pub start_angle: Decimal,
    pub end_angle: Decimal,
    pub mid_angle: Decimal,
    /// Slices thinner than the label threshold render without an inline label.
    pub show_label: bool,
}

/// Projected earnings for a principal at an annual percentage rate, with
/// the derived monthly and daily rates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldProjection {
    pub principal: Decimal,
    pub annual_rate_pct: Decimal,
    pub monthly_rate_pct: Decimal,
    pub daily_rate_pct: Decimal,
    pub yearly_earnings: Decimal,
    pub monthly_earnings: Decimal,
    pub daily_earnings: Decimal,
}

/// Accumulated yield as of `days_ago` days into the accrual window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAccrual {
    pub days_ago: u32,
    pub amount: Decimal,
}
